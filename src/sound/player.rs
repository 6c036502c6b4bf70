//! Alarm player implementation using rodio.
//!
//! The alarm is a fixed synthesized tone rather than a sound file, so there
//! is nothing to load from disk and nothing that can be missing at runtime.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, OutputStreamHandle, Sink};
use std::time::Duration;
use tracing::{debug, warn};

use super::error::SoundError;

/// Alarm tone frequency in Hz.
const ALARM_FREQUENCY_HZ: f32 = 880.0;

/// Alarm tone length.
const ALARM_DURATION: Duration = Duration::from_millis(750);

/// Alarm tone gain (full-scale sine is unpleasant).
const ALARM_GAIN: f32 = 0.3;

/// An alarm player that uses rodio for audio playback.
///
/// This player is thread-safe and can be shared using `Arc`. Playback is
/// non-blocking; the tone continues in the background after `play` returns.
pub struct RodioSoundPlayer {
    /// The audio output stream (must be kept alive for playback).
    _stream: OutputStream,
    /// Handle to the output stream for creating sinks.
    stream_handle: OutputStreamHandle,
    /// Whether alarm playback is disabled.
    disabled: AtomicBool,
}

impl RodioSoundPlayer {
    /// Creates a new alarm player.
    ///
    /// # Arguments
    ///
    /// * `disabled` - If true, all playback will be silently skipped.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::DeviceNotAvailable` if no audio output device
    /// is available.
    pub fn new(disabled: bool) -> Result<Self, SoundError> {
        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| SoundError::DeviceNotAvailable(e.to_string()))?;

        debug!("Audio output stream initialized");

        Ok(Self {
            _stream: stream,
            stream_handle,
            disabled: AtomicBool::new(disabled),
        })
    }

    /// Creates a player with playback disabled from the start.
    pub fn disabled() -> Result<Self, SoundError> {
        Self::new(true)
    }

    /// Plays the alarm tone.
    ///
    /// Non-blocking; the tone plays in the background.
    ///
    /// # Errors
    ///
    /// Returns an error if the audio sink cannot be created.
    pub fn play(&self) -> Result<(), SoundError> {
        if self.disabled.load(Ordering::Relaxed) {
            debug!("Alarm playback disabled, skipping");
            return Ok(());
        }

        let sink = Sink::try_new(&self.stream_handle)
            .map_err(|e| SoundError::StreamError(e.to_string()))?;

        let tone = SineWave::new(ALARM_FREQUENCY_HZ)
            .take_duration(ALARM_DURATION)
            .amplify(ALARM_GAIN);

        sink.append(tone);
        sink.detach(); // Non-blocking: tone continues after this returns

        debug!("Alarm playback started (detached)");
        Ok(())
    }

    /// Returns true if alarm playback is currently disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled.load(Ordering::Relaxed)
    }

    /// Enables alarm playback.
    pub fn enable(&self) {
        self.disabled.store(false, Ordering::Relaxed);
    }

    /// Disables alarm playback.
    pub fn disable(&self) {
        self.disabled.store(true, Ordering::Relaxed);
    }

    /// Returns true if the audio system is available.
    ///
    /// Always true once the player is constructed, since the output stream
    /// is opened during construction.
    #[must_use]
    pub fn is_available(&self) -> bool {
        true
    }
}

impl std::fmt::Debug for RodioSoundPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RodioSoundPlayer")
            .field("disabled", &self.disabled.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

/// Creates an alarm player, returning None if audio is unavailable.
///
/// If audio initialization fails, a warning is logged and None is returned;
/// the countdown runs without sound.
#[must_use]
pub fn try_create_player(disabled: bool) -> Option<Arc<RodioSoundPlayer>> {
    match RodioSoundPlayer::new(disabled) {
        Ok(player) => Some(Arc::new(player)),
        Err(e) => {
            warn!("Audio not available, alarm sound disabled: {}", e);
            None
        }
    }
}
