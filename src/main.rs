//! twenty - a 20-20-20 eye-rest reminder for the terminal
//!
//! This tool helps you avoid eye strain using the 20-20-20 rule:
//! - 20 minutes of work
//! - then 20 seconds looking at something 20 feet away
//! - repeated until you quit

use std::sync::Arc;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use twenty::alert::AlertDispatcher;
use twenty::app::App;
use twenty::cli::{Cli, Commands, Display, RunArgs};
use twenty::config::AppConfig;
use twenty::engine::IntervalTickSource;
use twenty::notify::{DesktopNotifier, Notifier};
use twenty::sound::{try_create_player, SoundPlayer};
use twenty::types::TimerConfig;

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    init_tracing();

    // Parse command line arguments
    let cli = Cli::parse();

    // Execute command
    if let Err(e) = execute(cli).await {
        Display::show_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    // Set verbose logging if requested
    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Run(args)) => run_timer(args).await,
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
            Ok(())
        }
        // No subcommand: run the timer with defaults.
        None => run_timer(RunArgs::default()).await,
    }
}

/// Runs the interactive timer with settings merged from file and flags.
async fn run_timer(args: RunArgs) -> Result<()> {
    let file_config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::load_default()?,
    };

    // CLI flags only ever switch things off or force dark mode on.
    let sound_enabled = file_config.sound && !args.no_sound;
    let notify_enabled = file_config.notify && !args.no_notify;
    let dark = file_config.dark_mode || args.dark;

    let sound = if sound_enabled {
        try_create_player(false).map(|p| p as Arc<dyn SoundPlayer>)
    } else {
        None
    };

    let notifier: Option<Arc<dyn Notifier>> = if notify_enabled {
        Some(Arc::new(DesktopNotifier::new()))
    } else {
        None
    };

    let alerts = AlertDispatcher::new(sound, notifier);
    let mut app = App::new(TimerConfig::default(), dark, alerts);

    let mut ticker = IntervalTickSource::new();
    app.run(&mut ticker, tokio::io::stdin()).await
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================
