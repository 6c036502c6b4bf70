//! Notification error types.

use thiserror::Error;

/// Error from sending a desktop notification.
///
/// Degrades to silent operation: a notification that cannot be delivered is
/// dropped and the countdown continues.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The notification service rejected or failed the request. Covers the
    /// no-daemon and permission-denied cases too; the platform reports them
    /// all through the same send error.
    #[error("failed to send notification: {0}")]
    SendFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NotifyError::SendFailed("timeout".to_string());
        assert!(err.to_string().contains("failed to send"));
        assert!(err.to_string().contains("timeout"));
    }
}
