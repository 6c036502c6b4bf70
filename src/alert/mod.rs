//! Phase-transition alerts: alarm sound plus desktop notification.
//!
//! The dispatcher sits between the timer engine and the platform sinks.
//! Every failure here is logged and swallowed; a broken audio stack or a
//! missing notification daemon must never stall the countdown.

use std::sync::Arc;

use tracing::warn;

use crate::notify::Notifier;
use crate::sound::SoundPlayer;
use crate::types::Phase;

/// Notification shown when a work phase ends and the rest phase begins.
const WORK_DONE_TITLE: &str = "👀 Time for a break!";
const WORK_DONE_BODY: &str =
    "Look at something 20 feet away for 20 seconds to rest your eyes.";

/// Notification shown when a rest phase ends and work resumes.
const REST_DONE_TITLE: &str = "✅ Rest complete!";
const REST_DONE_BODY: &str = "Time to get back to work! Starting the 20-minute work timer.";

// ============================================================================
// AlertDispatcher
// ============================================================================

/// Fires the side effects of a phase boundary.
///
/// Both sinks are optional: `None` means the capability was unavailable or
/// switched off, and dispatch silently skips it.
pub struct AlertDispatcher {
    sound: Option<Arc<dyn SoundPlayer>>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl AlertDispatcher {
    /// Creates a dispatcher over the given sinks.
    ///
    /// The sinks are not required to be `Send`: everything runs on the
    /// current-thread runtime, and the rodio output stream is thread-bound.
    pub fn new(sound: Option<Arc<dyn SoundPlayer>>, notifier: Option<Arc<dyn Notifier>>) -> Self {
        Self { sound, notifier }
    }

    /// Creates a dispatcher that does nothing (both sinks absent).
    #[must_use]
    pub fn silent() -> Self {
        Self {
            sound: None,
            notifier: None,
        }
    }

    /// Returns the notification (title, body) for a completed phase.
    #[must_use]
    pub fn message_for(completed: Phase) -> (&'static str, &'static str) {
        match completed {
            Phase::Work => (WORK_DONE_TITLE, WORK_DONE_BODY),
            Phase::Rest => (REST_DONE_TITLE, REST_DONE_BODY),
        }
    }

    /// Fires the alarm for a completed phase: sound, then notification.
    ///
    /// Best-effort on both channels. Failures are logged at warn level and
    /// otherwise ignored.
    pub fn dispatch(&self, completed: Phase) {
        if let Some(sound) = &self.sound {
            if let Err(e) = sound.play() {
                warn!("alarm sound failed: {}", e);
            }
        }

        if let Some(notifier) = &self.notifier {
            let (title, body) = Self::message_for(completed);
            if let Err(e) = notifier.notify(title, body) {
                warn!("notification failed: {}", e);
            }
        }
    }
}

impl std::fmt::Debug for AlertDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertDispatcher")
            .field("sound", &self.sound.is_some())
            .field("notifier", &self.notifier.is_some())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
