//! 20-20-20 Timer Library
//!
//! This library provides the core functionality for the twenty CLI, an
//! eye-rest reminder built on the 20-20-20 rule: every 20 minutes, look at
//! something 20 feet away for 20 seconds. It includes:
//! - Timer engine alternating between work and rest phases
//! - Injectable tick scheduling for deterministic tests
//! - Alarm sound playback (synthesized tone via rodio)
//! - Desktop notifications at phase transitions
//! - CLI command parsing and terminal display with light/dark themes
//! - JSON file configuration for sound/notification/theme settings

pub mod alert;
pub mod app;
pub mod cli;
pub mod config;
pub mod engine;
pub mod notify;
pub mod sound;
pub mod types;

// Re-export commonly used types for convenience
pub use types::{Phase, TimerConfig, TimerState, REST_SECONDS, WORK_SECONDS};

// Re-export engine types
pub use engine::{
    IntervalTickSource, ManualTick, ManualTickSource, TickSource, TimerEngine, TimerEvent,
};

// Re-export alert types
pub use alert::AlertDispatcher;

// Re-export sound types
pub use sound::{try_create_player, MockSoundPlayer, RodioSoundPlayer, SoundError, SoundPlayer};

// Re-export notification types
pub use notify::{DesktopNotifier, MockNotifier, Notifier, NotifyError};

// Re-export configuration
pub use config::AppConfig;
