//! Display formatting for the 20-20-20 timer.
//!
//! This module renders:
//! - The in-place countdown line
//! - Phase-transition banners
//! - Key help and error messages
//!
//! Two ANSI themes are supported; the theme can be toggled while running,
//! the terminal analog of the original widget's dark-mode switch.

use std::io::Write;

use crate::types::Phase;

/// ANSI reset sequence.
const RESET: &str = "\x1b[0m";

/// Countdown line color for the light theme.
const LIGHT_FG: &str = "\x1b[30m";

/// Countdown line color for the dark theme.
const DARK_FG: &str = "\x1b[97m";

/// Accent color for transition banners.
const ACCENT: &str = "\x1b[33m";

// ============================================================================
// Display
// ============================================================================

/// Terminal display with a toggleable theme.
#[derive(Debug)]
pub struct Display {
    dark: bool,
}

impl Display {
    /// Creates a display with the given initial theme.
    #[must_use]
    pub fn new(dark: bool) -> Self {
        Self { dark }
    }

    /// Flips between the light and dark theme.
    pub fn toggle_theme(&mut self) {
        self.dark = !self.dark;
    }

    /// Returns true if the dark theme is active.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Renders the countdown line in place.
    pub fn render_countdown(&self, phase: Phase, remaining_seconds: u32, running: bool) {
        let marker = if running { ">" } else { "||" };
        let fg = if self.dark { DARK_FG } else { LIGHT_FG };

        print!(
            "\r{}{:>2} {}  [{}]      {}",
            fg,
            marker,
            Self::format_clock(remaining_seconds),
            phase.as_str(),
            RESET
        );
        let _ = std::io::stdout().flush();
    }

    /// Shows a banner when a phase completes.
    pub fn show_transition(&self, title: &str) {
        println!("\n{}{}{}", ACCENT, title, RESET);
    }

    /// Shows the key bindings.
    pub fn show_keys(&self) {
        println!("keys: [s]tart/pause  [r]eset  [t]heme  [q]uit");
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("error: {}", message);
    }

    /// Formats remaining seconds as a clock string.
    ///
    /// Minutes are unbounded in width; seconds are zero-padded to 2 digits.
    #[must_use]
    pub fn format_clock(total_seconds: u32) -> String {
        let (minutes, seconds) = Self::format_time(total_seconds);
        format!("{}:{:02}", minutes, seconds)
    }

    /// Splits remaining seconds into (minutes, seconds).
    fn format_time(total_seconds: u32) -> (u32, u32) {
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;
        (minutes, seconds)
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new(false)
    }
}

// ============================================================================
// Tests
// ============================================================================
