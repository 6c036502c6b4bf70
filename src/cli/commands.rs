//! Command definitions for the 20-20-20 timer CLI.
//!
//! Uses clap derive macro for argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

// ============================================================================
// CLI Structure
// ============================================================================

/// 20-20-20 eye-rest timer for the terminal
#[derive(Parser, Debug)]
#[command(
    name = "twenty",
    version,
    about = "A 20-20-20 eye-rest reminder timer",
    long_about = "Counts down 20 minutes of work, then reminds you to look at\n\
                  something 20 feet away for 20 seconds, and repeats.\n\
                  Runs in the foreground; control it with single-letter keys.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the timer in the foreground (default)
    Run(RunArgs),

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Run Command Arguments
// ============================================================================

/// Arguments for the run command
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Disable the alarm sound
    #[arg(long)]
    pub no_sound: bool,

    /// Disable desktop notifications
    #[arg(long)]
    pub no_notify: bool,

    /// Start with the dark display theme
    #[arg(long)]
    pub dark: bool,

    /// Path to a configuration file (defaults to the platform config dir)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

// ============================================================================
// Tests
// ============================================================================
