//! CLI layer for the 20-20-20 timer.
//!
//! This module contains:
//! - Command definitions (clap)
//! - Display formatting for the terminal

pub mod commands;
pub mod display;

pub use commands::{Cli, Commands, RunArgs};
pub use display::Display;
