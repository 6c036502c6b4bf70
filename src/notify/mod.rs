//! Desktop notification support for the 20-20-20 timer.
//!
//! The notifier is a best-effort collaborator: it is invoked with a title
//! and body at each phase transition, and any failure (no notification
//! daemon, permission denied, send error) is logged and swallowed so the
//! countdown is never affected.

mod error;

pub use error::NotifyError;

use std::time::Duration;

use notify_rust::{Notification, Timeout};
use tracing::debug;

/// Application name shown by the notification service.
const APP_NAME: &str = "twenty";

/// Icon name looked up from the platform icon theme.
const ICON_NAME: &str = "alarm-clock";

/// Notifications auto-dismiss after this long, where the platform allows it.
const DISMISS_AFTER: Duration = Duration::from_secs(10);

// ============================================================================
// Notifier
// ============================================================================

/// Trait for desktop notification implementations.
///
/// Abstracts the notification sink so transition logic can be tested with a
/// mock instead of a real notification daemon.
pub trait Notifier {
    /// Sends a notification with the given title and body.
    ///
    /// # Errors
    ///
    /// Returns an error if the notification cannot be delivered.
    fn notify(&self, title: &str, body: &str) -> Result<(), NotifyError>;

    /// Returns true if the notification service is expected to work.
    fn is_available(&self) -> bool;
}

// ============================================================================
// DesktopNotifier
// ============================================================================

/// Notifier backed by the platform notification service.
#[derive(Debug, Default)]
pub struct DesktopNotifier;

impl DesktopNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, body: &str) -> Result<(), NotifyError> {
        debug!(title, "sending desktop notification");

        Notification::new()
            .appname(APP_NAME)
            .summary(title)
            .body(body)
            .icon(ICON_NAME)
            .timeout(Timeout::Milliseconds(DISMISS_AFTER.as_millis() as u32))
            .show()
            .map(|_| ())
            .map_err(|e| NotifyError::SendFailed(e.to_string()))
    }

    fn is_available(&self) -> bool {
        // There is no reliable pre-flight check across platforms; the first
        // show() reports the real answer and the caller degrades on error.
        true
    }
}

// ============================================================================
// MockNotifier
// ============================================================================

/// Mock notifier for testing.
#[derive(Debug, Default)]
pub struct MockNotifier {
    sent: std::sync::Mutex<Vec<(String, String)>>,
    available: std::sync::atomic::AtomicBool,
    should_fail: std::sync::atomic::AtomicBool,
}

impl MockNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sent: std::sync::Mutex::new(Vec::new()),
            available: std::sync::atomic::AtomicBool::new(true),
            should_fail: std::sync::atomic::AtomicBool::new(false),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available
            .store(available, std::sync::atomic::Ordering::SeqCst);
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail
            .store(should_fail, std::sync::atomic::Ordering::SeqCst);
    }

    #[must_use]
    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    /// Returns all (title, body) pairs sent so far.
    #[must_use]
    pub fn sent_notifications(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, title: &str, body: &str) -> Result<(), NotifyError> {
        if self.should_fail.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(NotifyError::SendFailed("Mock failure".to_string()));
        }
        self.sent
            .lock()
            .unwrap()
            .push((title.to_string(), body.to_string()));
        Ok(())
    }

    fn is_available(&self) -> bool {
        self.available.load(std::sync::atomic::Ordering::SeqCst)
    }
}
