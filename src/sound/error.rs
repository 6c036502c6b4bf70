//! Sound system error types.

use thiserror::Error;

/// Errors that can occur in the alarm playback system.
///
/// None of these are fatal: the countdown continues without sound when
/// playback fails.
#[derive(Debug, Error)]
pub enum SoundError {
    /// Audio device is not available (e.g., headless host, no speakers).
    #[error("audio device not available: {0}")]
    DeviceNotAvailable(String),

    /// Failed to create the audio output sink.
    #[error("failed to create audio sink: {0}")]
    StreamError(String),

    /// Generic playback error.
    #[error("alarm playback failed: {0}")]
    PlaybackError(String),
}

impl SoundError {
    /// Returns true if this error means audio hardware is missing entirely.
    #[must_use]
    pub fn is_device_error(&self) -> bool {
        matches!(self, Self::DeviceNotAvailable(_) | Self::StreamError(_))
    }
}
