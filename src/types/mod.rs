//! Core data types for the 20-20-20 timer.
//!
//! This module defines the data structures used for:
//! - The work/rest phase alternation
//! - Phase duration configuration
//! - The countdown state owned by the timer engine

use serde::{Deserialize, Serialize};

/// Work phase duration in seconds (20 minutes).
pub const WORK_SECONDS: u32 = 20 * 60;

/// Rest phase duration in seconds.
pub const REST_SECONDS: u32 = 20;

// ============================================================================
// Phase
// ============================================================================

/// The two alternating intervals of the 20-20-20 cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// 20-minute work interval
    Work,
    /// 20-second eye-rest interval
    Rest,
}

impl Phase {
    /// Returns the string representation of the phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Work => "work",
            Phase::Rest => "rest",
        }
    }

    /// Returns the phase that follows this one.
    pub fn other(&self) -> Self {
        match self {
            Phase::Work => Phase::Rest,
            Phase::Rest => Phase::Work,
        }
    }
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Work
    }
}

// ============================================================================
// TimerConfig
// ============================================================================

/// Phase durations for the timer.
///
/// The 20-20-20 durations are fixed constants in production; non-default
/// values exist so tests can run through full cycles quickly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Work phase duration in seconds
    pub work_seconds: u32,
    /// Rest phase duration in seconds
    pub rest_seconds: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_seconds: WORK_SECONDS,
            rest_seconds: REST_SECONDS,
        }
    }
}

impl TimerConfig {
    /// Creates a configuration with the specified work duration.
    pub fn with_work_seconds(mut self, seconds: u32) -> Self {
        self.work_seconds = seconds;
        self
    }

    /// Creates a configuration with the specified rest duration.
    pub fn with_rest_seconds(mut self, seconds: u32) -> Self {
        self.rest_seconds = seconds;
        self
    }

    /// Returns the duration of the given phase in seconds.
    pub fn duration_of(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Work => self.work_seconds,
            Phase::Rest => self.rest_seconds,
        }
    }

    /// Returns the longer of the two phase durations.
    pub fn max_duration(&self) -> u32 {
        self.work_seconds.max(self.rest_seconds)
    }

    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails.
    pub fn validate(&self) -> Result<(), String> {
        if self.work_seconds == 0 {
            return Err("work duration must be at least 1 second".to_string());
        }
        if self.rest_seconds == 0 {
            return Err("rest duration must be at least 1 second".to_string());
        }
        Ok(())
    }
}

// ============================================================================
// TimerState
// ============================================================================

/// The countdown state owned by the timer engine.
///
/// There is exactly one instance per engine; it is mutated only by the
/// engine's start/pause/reset operations and the tick handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    /// Which interval is currently active
    pub phase: Phase,
    /// Seconds left in the current phase
    pub remaining_seconds: u32,
    /// Whether a tick series is currently scheduled
    pub running: bool,
    /// Phase durations
    pub config: TimerConfig,
}

impl TimerState {
    /// Creates a new state: idle at the start of a work phase.
    pub fn new(config: TimerConfig) -> Self {
        let remaining_seconds = config.work_seconds;
        Self {
            phase: Phase::Work,
            remaining_seconds,
            running: false,
            config,
        }
    }

    /// Marks the timer as running. Phase and remaining time are untouched.
    pub fn resume(&mut self) {
        self.running = true;
    }

    /// Marks the timer as stopped. Phase and remaining time are preserved
    /// exactly, so a later resume continues from the same point.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Returns to the initial state: idle at a full work phase.
    pub fn reset(&mut self) {
        self.running = false;
        self.phase = Phase::Work;
        self.remaining_seconds = self.config.work_seconds;
    }

    /// Decrements the countdown by one second.
    ///
    /// Returns true if the current phase is exhausted (reached 0).
    pub fn tick(&mut self) -> bool {
        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
        }
        self.remaining_seconds == 0
    }

    /// Flips to the other phase and reloads its full duration.
    pub fn advance_phase(&mut self) {
        self.phase = self.phase.other();
        self.remaining_seconds = self.config.duration_of(self.phase);
    }

    /// Returns true if a tick series is active.
    pub fn is_running(&self) -> bool {
        self.running
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // Phase Tests
    // ------------------------------------------------------------------------

    mod phase_tests {
        use super::*;

        #[test]
        fn test_default_is_work() {
            assert_eq!(Phase::default(), Phase::Work);
        }

        #[test]
        fn test_as_str() {
            assert_eq!(Phase::Work.as_str(), "work");
            assert_eq!(Phase::Rest.as_str(), "rest");
        }

        #[test]
        fn test_other_alternates() {
            assert_eq!(Phase::Work.other(), Phase::Rest);
            assert_eq!(Phase::Rest.other(), Phase::Work);
            assert_eq!(Phase::Work.other().other(), Phase::Work);
        }

        #[test]
        fn test_serialize_deserialize() {
            let json = serde_json::to_string(&Phase::Rest).unwrap();
            assert_eq!(json, "\"rest\"");

            let deserialized: Phase = serde_json::from_str(&json).unwrap();
            assert_eq!(deserialized, Phase::Rest);
        }
    }

    // ------------------------------------------------------------------------
    // TimerConfig Tests
    // ------------------------------------------------------------------------

    mod timer_config_tests {
        use super::*;

        #[test]
        fn test_default_values() {
            let config = TimerConfig::default();
            assert_eq!(config.work_seconds, 1200);
            assert_eq!(config.rest_seconds, 20);
        }

        #[test]
        fn test_builder_pattern() {
            let config = TimerConfig::default()
                .with_work_seconds(5)
                .with_rest_seconds(2);

            assert_eq!(config.work_seconds, 5);
            assert_eq!(config.rest_seconds, 2);
        }

        #[test]
        fn test_duration_of() {
            let config = TimerConfig::default();
            assert_eq!(config.duration_of(Phase::Work), 1200);
            assert_eq!(config.duration_of(Phase::Rest), 20);
        }

        #[test]
        fn test_max_duration() {
            let config = TimerConfig::default();
            assert_eq!(config.max_duration(), 1200);

            let inverted = TimerConfig::default()
                .with_work_seconds(5)
                .with_rest_seconds(30);
            assert_eq!(inverted.max_duration(), 30);
        }

        #[test]
        fn test_validate_success() {
            assert!(TimerConfig::default().validate().is_ok());
        }

        #[test]
        fn test_validate_zero_work() {
            let config = TimerConfig::default().with_work_seconds(0);
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_validate_zero_rest() {
            let config = TimerConfig::default().with_rest_seconds(0);
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_serialize_deserialize() {
            let config = TimerConfig::default().with_work_seconds(90);
            let json = serde_json::to_string(&config).unwrap();
            let deserialized: TimerConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(config, deserialized);
        }
    }

    // ------------------------------------------------------------------------
    // TimerState Tests
    // ------------------------------------------------------------------------

    mod timer_state_tests {
        use super::*;

        #[test]
        fn test_new_state_is_idle_work() {
            let state = TimerState::new(TimerConfig::default());

            assert_eq!(state.phase, Phase::Work);
            assert_eq!(state.remaining_seconds, 1200);
            assert!(!state.running);
        }

        #[test]
        fn test_resume_and_pause_touch_only_running() {
            let mut state = TimerState::new(TimerConfig::default());

            state.resume();
            assert!(state.is_running());
            assert_eq!(state.remaining_seconds, 1200);

            state.remaining_seconds = 777;
            state.pause();
            assert!(!state.is_running());
            assert_eq!(state.phase, Phase::Work);
            assert_eq!(state.remaining_seconds, 777);
        }

        #[test]
        fn test_pause_then_resume_is_identity() {
            let mut state = TimerState::new(TimerConfig::default());
            state.resume();
            state.remaining_seconds = 1195;

            let before = state.clone();
            state.pause();
            state.resume();

            assert_eq!(state, before);
        }

        #[test]
        fn test_reset_from_any_state() {
            let mut state = TimerState::new(TimerConfig::default());
            state.resume();
            state.phase = Phase::Rest;
            state.remaining_seconds = 7;

            state.reset();

            assert_eq!(state.phase, Phase::Work);
            assert_eq!(state.remaining_seconds, 1200);
            assert!(!state.running);
        }

        #[test]
        fn test_tick() {
            let mut state = TimerState::new(TimerConfig::default());
            state.remaining_seconds = 2;

            assert!(!state.tick());
            assert_eq!(state.remaining_seconds, 1);

            assert!(state.tick());
            assert_eq!(state.remaining_seconds, 0);
        }

        #[test]
        fn test_tick_saturates_at_zero() {
            let mut state = TimerState::new(TimerConfig::default());
            state.remaining_seconds = 0;

            assert!(state.tick());
            assert_eq!(state.remaining_seconds, 0);
        }

        #[test]
        fn test_advance_phase_work_to_rest() {
            let mut state = TimerState::new(TimerConfig::default());
            state.remaining_seconds = 0;

            state.advance_phase();

            assert_eq!(state.phase, Phase::Rest);
            assert_eq!(state.remaining_seconds, 20);
        }

        #[test]
        fn test_advance_phase_rest_to_work() {
            let mut state = TimerState::new(TimerConfig::default());
            state.phase = Phase::Rest;
            state.remaining_seconds = 0;

            state.advance_phase();

            assert_eq!(state.phase, Phase::Work);
            assert_eq!(state.remaining_seconds, 1200);
        }

        #[test]
        fn test_remaining_stays_in_bounds_across_full_cycle() {
            let config = TimerConfig::default();
            let max = config.max_duration();
            let mut state = TimerState::new(config);
            state.resume();

            for _ in 0..(1200 + 20 + 5) {
                if state.tick() {
                    state.advance_phase();
                }
                assert!(state.remaining_seconds <= max);
            }
        }

        #[test]
        fn test_serialize_deserialize() {
            let mut state = TimerState::new(TimerConfig::default());
            state.resume();
            state.remaining_seconds = 42;

            let json = serde_json::to_string(&state).unwrap();
            let deserialized: TimerState = serde_json::from_str(&json).unwrap();

            assert_eq!(deserialized, state);
        }
    }
}
