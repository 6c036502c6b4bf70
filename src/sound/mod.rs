//! Alarm sound playback for the 20-20-20 timer.
//!
//! The audio sink is a collaborator of the timer engine: it is invoked with
//! no parameters at each phase transition and plays one fixed alarm tone.
//! When audio is unavailable the countdown degrades to silent; playback
//! failure is never surfaced as a timer error.

mod error;
mod player;

pub use error::SoundError;
pub use player::{try_create_player, RodioSoundPlayer};

/// Trait for alarm playback implementations.
///
/// Abstracts the audio sink so the transition logic can be tested with a
/// mock instead of real audio hardware.
pub trait SoundPlayer {
    /// Plays the alarm tone.
    ///
    /// Non-blocking; the tone plays in the background.
    ///
    /// # Errors
    ///
    /// Returns an error if playback fails.
    fn play(&self) -> Result<(), SoundError>;

    /// Returns true if the audio system is available.
    fn is_available(&self) -> bool;

    /// Returns true if alarm playback is disabled.
    fn is_disabled(&self) -> bool;

    /// Enables alarm playback.
    fn enable(&self);

    /// Disables alarm playback.
    fn disable(&self);
}

impl SoundPlayer for RodioSoundPlayer {
    fn play(&self) -> Result<(), SoundError> {
        RodioSoundPlayer::play(self)
    }

    fn is_available(&self) -> bool {
        RodioSoundPlayer::is_available(self)
    }

    fn is_disabled(&self) -> bool {
        RodioSoundPlayer::is_disabled(self)
    }

    fn enable(&self) {
        RodioSoundPlayer::enable(self)
    }

    fn disable(&self) {
        RodioSoundPlayer::disable(self)
    }
}

/// Mock alarm player for testing.
#[derive(Debug, Default)]
pub struct MockSoundPlayer {
    play_count: std::sync::atomic::AtomicUsize,
    available: std::sync::atomic::AtomicBool,
    disabled: std::sync::atomic::AtomicBool,
    should_fail: std::sync::atomic::AtomicBool,
}

impl MockSoundPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            play_count: std::sync::atomic::AtomicUsize::new(0),
            available: std::sync::atomic::AtomicBool::new(true),
            disabled: std::sync::atomic::AtomicBool::new(false),
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
    pub fn play_count(&self) -> usize {
        self.play_count.load(std::sync::atomic::Ordering::SeqCst)
    }
}

impl SoundPlayer for MockSoundPlayer {
    fn play(&self) -> Result<(), SoundError> {
        if self.should_fail.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(SoundError::PlaybackError("Mock failure".to_string()));
        }
        if self.disabled.load(std::sync::atomic::Ordering::SeqCst) {
            return Ok(());
        }
        self.play_count
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Ok(())
    }

    fn is_available(&self) -> bool {
        self.available.load(std::sync::atomic::Ordering::SeqCst)
    }

    fn is_disabled(&self) -> bool {
        self.disabled.load(std::sync::atomic::Ordering::SeqCst)
    }

    fn enable(&self) {
        self.disabled
            .store(false, std::sync::atomic::Ordering::SeqCst);
    }

    fn disable(&self) {
        self.disabled
            .store(true, std::sync::atomic::Ordering::SeqCst);
    }
}
