//! Timer engine for the 20-20-20 timer.
//!
//! This module provides the core countdown state machine:
//! - Start/pause toggle, reset
//! - One-second countdown driven by an injected tick source
//! - Phase alternation (Work ⇄ Rest) with an event at every boundary
//! - Event firing for display updates, notifications and sounds
//!
//! The engine owns the single [`TimerState`] and is the only code that
//! mutates it. Collaborators (display, sound, notifications) observe the
//! engine through [`TimerEvent`]s; their failures never reach the countdown.

pub mod clock;

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tracing::debug;

use crate::types::{Phase, TimerConfig, TimerState};

pub use clock::{IntervalTickSource, ManualTick, ManualTickSource, TickSource};

// ============================================================================
// TimerEvent
// ============================================================================

/// Events emitted by the engine for the presentation layer and alert sinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// One second elapsed; the display should show the new value
    Tick {
        /// Remaining seconds in the current phase
        remaining_seconds: u32,
    },
    /// A phase ran out; the alarm fires exactly once per boundary
    PhaseCompleted {
        /// The phase that just finished
        phase: Phase,
    },
    /// The next phase began immediately after a completed one
    PhaseStarted {
        /// The phase now counting down
        phase: Phase,
        /// Its full duration
        remaining_seconds: u32,
    },
    /// The countdown was paused by the user
    Paused {
        /// Remaining seconds, preserved for resume
        remaining_seconds: u32,
    },
    /// The countdown was started or resumed by the user
    Resumed {
        /// The phase being resumed
        phase: Phase,
        /// Remaining seconds at the moment of resume
        remaining_seconds: u32,
    },
    /// The timer was reset to an idle work phase
    Reset {
        /// The full work duration
        remaining_seconds: u32,
    },
}

// ============================================================================
// TimerEngine
// ============================================================================

/// The interval-alternation state machine.
///
/// States are `running` × `phase`: Idle(Work|Rest) and Ticking(Work|Rest).
/// `start` toggles Idle ⇄ Ticking without touching the countdown, `reset`
/// returns to Idle(Work) with a full work phase, and tick exhaustion flips
/// Ticking(Work) ⇄ Ticking(Rest). There is no terminal state; the
/// alternation continues until paused or the process exits.
pub struct TimerEngine {
    /// Current timer state
    state: TimerState,
    /// Event sender channel
    event_tx: mpsc::UnboundedSender<TimerEvent>,
}

impl TimerEngine {
    /// Creates a new engine, idle at the start of a work phase.
    pub fn new(config: TimerConfig, event_tx: mpsc::UnboundedSender<TimerEvent>) -> Self {
        Self {
            state: TimerState::new(config),
            event_tx,
        }
    }

    /// Starts the countdown, or pauses it if it is already running.
    ///
    /// Start and pause share one entry point because they share one button.
    /// Starting emits an immediate display update so the rendered value does
    /// not wait a full second for the first tick.
    pub fn start(&mut self) -> Result<()> {
        if self.state.is_running() {
            return self.pause();
        }

        self.state.resume();
        debug!(phase = self.state.phase.as_str(), "timer started");

        self.event_tx
            .send(TimerEvent::Resumed {
                phase: self.state.phase,
                remaining_seconds: self.state.remaining_seconds,
            })
            .context("Failed to send resumed event")?;

        Ok(())
    }

    /// Pauses the countdown, preserving phase and remaining time exactly.
    ///
    /// A no-op when the timer is already idle. No transition or alarm fires.
    pub fn pause(&mut self) -> Result<()> {
        if !self.state.is_running() {
            return Ok(());
        }

        self.state.pause();
        debug!(
            remaining = self.state.remaining_seconds,
            "timer paused"
        );

        self.event_tx
            .send(TimerEvent::Paused {
                remaining_seconds: self.state.remaining_seconds,
            })
            .context("Failed to send paused event")?;

        Ok(())
    }

    /// Stops the countdown and returns to an idle, full work phase.
    ///
    /// Emits a display update but no alarm.
    pub fn reset(&mut self) -> Result<()> {
        self.state.reset();
        debug!("timer reset");

        self.event_tx
            .send(TimerEvent::Reset {
                remaining_seconds: self.state.remaining_seconds,
            })
            .context("Failed to send reset event")?;

        Ok(())
    }

    /// Advances the countdown by one second.
    ///
    /// A no-op while idle. When the decrement exhausts the current phase the
    /// engine fires the boundary events, flips to the other phase and keeps
    /// ticking; the machine never stops on its own.
    pub fn tick(&mut self) -> Result<()> {
        if !self.state.is_running() {
            return Ok(());
        }

        let completed = self.state.tick();

        self.event_tx
            .send(TimerEvent::Tick {
                remaining_seconds: self.state.remaining_seconds,
            })
            .context("Failed to send tick event")?;

        if completed {
            self.handle_phase_complete()?;
        }

        Ok(())
    }

    /// Handles phase exhaustion: alarm boundary, flip, reload, re-display.
    fn handle_phase_complete(&mut self) -> Result<()> {
        let finished = self.state.phase;
        debug!(phase = finished.as_str(), "phase completed");

        self.event_tx
            .send(TimerEvent::PhaseCompleted { phase: finished })
            .context("Failed to send phase completed event")?;

        self.state.advance_phase();

        self.event_tx
            .send(TimerEvent::PhaseStarted {
                phase: self.state.phase,
                remaining_seconds: self.state.remaining_seconds,
            })
            .context("Failed to send phase started event")?;

        Ok(())
    }

    /// Runs the countdown loop against an injected tick source.
    ///
    /// Ticks are skipped while the timer is idle, so there is never more
    /// than one active tick series regardless of how often the user toggles.
    pub async fn run<T: TickSource>(&mut self, ticker: &mut T) -> Result<()> {
        loop {
            ticker.next_tick().await;
            self.tick()?;
        }
    }

    /// Returns a reference to the current timer state.
    pub fn state(&self) -> &TimerState {
        &self.state
    }

    /// Returns a mutable reference to the timer state (for testing).
    #[cfg(test)]
    pub fn state_mut(&mut self) -> &mut TimerState {
        &mut self.state
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn create_engine() -> (TimerEngine, mpsc::UnboundedReceiver<TimerEvent>) {
        create_engine_with_config(TimerConfig::default())
    }

    fn create_engine_with_config(
        config: TimerConfig,
    ) -> (TimerEngine, mpsc::UnboundedReceiver<TimerEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let engine = TimerEngine::new(config, tx);
        (engine, rx)
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<TimerEvent>) -> Vec<TimerEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    // ------------------------------------------------------------------------
    // TimerEvent Tests
    // ------------------------------------------------------------------------

    mod timer_event_tests {
        use super::*;

        #[test]
        fn test_tick_event() {
            let event = TimerEvent::Tick {
                remaining_seconds: 1199,
            };
            assert_eq!(
                event,
                TimerEvent::Tick {
                    remaining_seconds: 1199
                }
            );
        }

        #[test]
        fn test_phase_completed_event() {
            let event = TimerEvent::PhaseCompleted { phase: Phase::Work };
            assert_eq!(event, TimerEvent::PhaseCompleted { phase: Phase::Work });
        }

        #[test]
        fn test_event_clone() {
            let event = TimerEvent::PhaseStarted {
                phase: Phase::Rest,
                remaining_seconds: 20,
            };
            assert_eq!(event.clone(), event);
        }

        #[test]
        fn test_event_debug() {
            let event = TimerEvent::Reset {
                remaining_seconds: 1200,
            };
            let debug_str = format!("{:?}", event);
            assert!(debug_str.contains("Reset"));
        }
    }

    // ------------------------------------------------------------------------
    // TimerEngine Tests
    // ------------------------------------------------------------------------

    mod timer_engine_tests {
        use super::*;

        #[test]
        fn test_new_engine_is_idle_work() {
            let (engine, _rx) = create_engine();
            let state = engine.state();

            assert_eq!(state.phase, Phase::Work);
            assert_eq!(state.remaining_seconds, 1200);
            assert!(!state.is_running());
        }

        #[test]
        fn test_start_emits_immediate_display_update() {
            let (mut engine, mut rx) = create_engine();

            engine.start().unwrap();

            assert!(engine.state().is_running());
            assert_eq!(
                rx.try_recv().unwrap(),
                TimerEvent::Resumed {
                    phase: Phase::Work,
                    remaining_seconds: 1200
                }
            );
        }

        #[test]
        fn test_start_while_running_pauses() {
            let (mut engine, mut rx) = create_engine();

            engine.start().unwrap();
            let _ = rx.try_recv(); // consume Resumed

            engine.start().unwrap();

            assert!(!engine.state().is_running());
            assert_eq!(
                rx.try_recv().unwrap(),
                TimerEvent::Paused {
                    remaining_seconds: 1200
                }
            );
        }

        #[test]
        fn test_pause_preserves_phase_and_remaining() {
            let (mut engine, mut rx) = create_engine();

            engine.start().unwrap();
            engine.state_mut().remaining_seconds = 1000;

            engine.pause().unwrap();

            let state = engine.state();
            assert!(!state.is_running());
            assert_eq!(state.phase, Phase::Work);
            assert_eq!(state.remaining_seconds, 1000);

            let events = drain(&mut rx);
            assert_eq!(
                events.last().unwrap(),
                &TimerEvent::Paused {
                    remaining_seconds: 1000
                }
            );
        }

        #[test]
        fn test_pause_while_idle_is_noop() {
            let (mut engine, mut rx) = create_engine();

            engine.pause().unwrap();

            assert!(!engine.state().is_running());
            assert!(rx.try_recv().is_err(), "no event for a no-op pause");
        }

        #[test]
        fn test_pause_then_start_is_identity() {
            let (mut engine, mut rx) = create_engine();

            engine.start().unwrap();
            engine.state_mut().remaining_seconds = 1195;
            let before = engine.state().clone();

            engine.pause().unwrap();
            engine.start().unwrap();

            assert_eq!(engine.state(), &before);

            let events = drain(&mut rx);
            assert_eq!(
                events.last().unwrap(),
                &TimerEvent::Resumed {
                    phase: Phase::Work,
                    remaining_seconds: 1195
                }
            );
        }

        #[test]
        fn test_reset_from_ticking_rest() {
            let (mut engine, mut rx) = create_engine();

            engine.start().unwrap();
            engine.state_mut().phase = Phase::Rest;
            engine.state_mut().remaining_seconds = 7;

            engine.reset().unwrap();

            let state = engine.state();
            assert!(!state.is_running());
            assert_eq!(state.phase, Phase::Work);
            assert_eq!(state.remaining_seconds, 1200);

            let events = drain(&mut rx);
            assert_eq!(
                events.last().unwrap(),
                &TimerEvent::Reset {
                    remaining_seconds: 1200
                }
            );
        }

        #[test]
        fn test_reset_fires_no_alarm() {
            let (mut engine, mut rx) = create_engine();

            engine.start().unwrap();
            engine.reset().unwrap();

            let events = drain(&mut rx);
            assert!(!events
                .iter()
                .any(|e| matches!(e, TimerEvent::PhaseCompleted { .. })));
        }

        #[test]
        fn test_tick_while_idle_is_noop() {
            let (mut engine, mut rx) = create_engine();

            engine.tick().unwrap();

            assert_eq!(engine.state().remaining_seconds, 1200);
            assert!(rx.try_recv().is_err());
        }

        #[test]
        fn test_tick_decrements_and_emits() {
            let (mut engine, mut rx) = create_engine();

            engine.start().unwrap();
            let _ = rx.try_recv(); // consume Resumed

            engine.tick().unwrap();

            assert_eq!(engine.state().remaining_seconds, 1199);
            assert_eq!(
                rx.try_recv().unwrap(),
                TimerEvent::Tick {
                    remaining_seconds: 1199
                }
            );
        }

        #[test]
        fn test_work_exhaustion_transitions_to_rest() {
            let (mut engine, mut rx) = create_engine();

            engine.start().unwrap();
            engine.state_mut().remaining_seconds = 1;
            let _ = drain(&mut rx);

            engine.tick().unwrap();

            let state = engine.state();
            assert!(state.is_running(), "machine keeps ticking on its own");
            assert_eq!(state.phase, Phase::Rest);
            assert_eq!(state.remaining_seconds, 20);

            let events = drain(&mut rx);
            assert_eq!(
                events,
                vec![
                    TimerEvent::Tick {
                        remaining_seconds: 0
                    },
                    TimerEvent::PhaseCompleted { phase: Phase::Work },
                    TimerEvent::PhaseStarted {
                        phase: Phase::Rest,
                        remaining_seconds: 20
                    },
                ]
            );
        }

        #[test]
        fn test_rest_exhaustion_transitions_to_work() {
            let (mut engine, mut rx) = create_engine();

            engine.start().unwrap();
            engine.state_mut().phase = Phase::Rest;
            engine.state_mut().remaining_seconds = 1;
            let _ = drain(&mut rx);

            engine.tick().unwrap();

            let state = engine.state();
            assert_eq!(state.phase, Phase::Work);
            assert_eq!(state.remaining_seconds, 1200);

            let events = drain(&mut rx);
            assert!(events.contains(&TimerEvent::PhaseCompleted { phase: Phase::Rest }));
            assert!(events.contains(&TimerEvent::PhaseStarted {
                phase: Phase::Work,
                remaining_seconds: 1200
            }));
        }

        #[test]
        fn test_alarm_fires_exactly_once_per_boundary() {
            let config = TimerConfig::default()
                .with_work_seconds(3)
                .with_rest_seconds(2);
            let (mut engine, mut rx) = create_engine_with_config(config);

            engine.start().unwrap();
            for _ in 0..3 {
                engine.tick().unwrap();
            }

            let completions = drain(&mut rx)
                .into_iter()
                .filter(|e| matches!(e, TimerEvent::PhaseCompleted { .. }))
                .count();
            assert_eq!(completions, 1);
        }

        #[test]
        fn test_remaining_seconds_always_in_bounds() {
            let (mut engine, mut rx) = create_engine();

            engine.start().unwrap();
            for _ in 0..(1200 + 20 + 30) {
                engine.tick().unwrap();
                assert!(engine.state().remaining_seconds <= 1200);
                let _ = drain(&mut rx);
            }
        }
    }

    // ------------------------------------------------------------------------
    // Run Loop Tests
    // ------------------------------------------------------------------------

    mod run_loop_tests {
        use super::*;
        use tokio::time::{sleep, Duration};

        #[tokio::test]
        async fn test_run_with_manual_ticks() {
            let (mut engine, mut rx) = create_engine();
            engine.start().unwrap();
            let _ = drain(&mut rx);

            let (mut ticker, tick) = ManualTickSource::new();
            tick.fire_many(5);

            // Drive the loop until the fired ticks are consumed.
            tokio::select! {
                result = engine.run(&mut ticker) => result.unwrap(),
                _ = sleep(Duration::from_millis(200)) => {}
            }

            assert_eq!(engine.state().remaining_seconds, 1195);

            let ticks = drain(&mut rx)
                .into_iter()
                .filter(|e| matches!(e, TimerEvent::Tick { .. }))
                .count();
            assert_eq!(ticks, 5);
        }

        #[tokio::test]
        async fn test_run_skips_ticks_while_idle() {
            let (mut engine, mut rx) = create_engine();

            let (mut ticker, tick) = ManualTickSource::new();
            tick.fire_many(5);

            tokio::select! {
                result = engine.run(&mut ticker) => result.unwrap(),
                _ = sleep(Duration::from_millis(200)) => {}
            }

            assert_eq!(engine.state().remaining_seconds, 1200);
            assert!(rx.try_recv().is_err());
        }
    }
}
