//! Interactive foreground loop for the 20-20-20 timer.
//!
//! Everything runs on one logical thread: ticks from the injected tick
//! source, single-letter commands from stdin, engine events and ctrl-c are
//! interleaved through a `tokio::select!` loop. The engine is the only
//! owner of the timer state; this module just routes events between it,
//! the terminal and the alert sinks.

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc;
use tracing::debug;

use crate::alert::AlertDispatcher;
use crate::cli::Display;
use crate::engine::{TickSource, TimerEngine, TimerEvent};
use crate::types::TimerConfig;

/// What a stdin line asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Start or pause the countdown
    Toggle,
    /// Reset to an idle work phase
    Reset,
    /// Flip the display theme
    Theme,
    /// Exit the app
    Quit,
    /// Anything unrecognized
    Unknown,
}

impl Command {
    /// Parses a line of input into a command.
    fn parse(line: &str) -> Self {
        match line.trim().to_ascii_lowercase().as_str() {
            "" | "s" | "start" | "pause" => Command::Toggle,
            "r" | "reset" => Command::Reset,
            "t" | "theme" => Command::Theme,
            "q" | "quit" | "exit" => Command::Quit,
            _ => Command::Unknown,
        }
    }
}

// ============================================================================
// App
// ============================================================================

/// The interactive timer application.
pub struct App {
    engine: TimerEngine,
    event_rx: mpsc::UnboundedReceiver<TimerEvent>,
    display: Display,
    alerts: AlertDispatcher,
}

impl App {
    /// Creates the app with its engine, display theme and alert sinks.
    pub fn new(config: TimerConfig, dark: bool, alerts: AlertDispatcher) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            engine: TimerEngine::new(config, event_tx),
            event_rx,
            display: Display::new(dark),
            alerts,
        }
    }

    /// Runs the interactive loop until the user quits or ctrl-c arrives.
    ///
    /// `input` is the command stream, stdin in production. When it reaches
    /// EOF the countdown keeps going; only `q` or ctrl-c end the loop.
    pub async fn run<T, R>(&mut self, ticker: &mut T, input: R) -> Result<()>
    where
        T: TickSource,
        R: AsyncRead + Unpin,
    {
        self.display.show_keys();
        self.render();

        let mut lines = BufReader::new(input).lines();
        let mut input_open = true;

        loop {
            tokio::select! {
                _ = ticker.next_tick() => {
                    self.engine.tick()?;
                    self.drain_events();
                }
                line = lines.next_line(), if input_open => {
                    match line? {
                        Some(line) => {
                            if !self.handle_command(Command::parse(&line))? {
                                break;
                            }
                            self.drain_events();
                        }
                        // Input closed. Disable this branch so the loop
                        // parks between ticks instead of spinning on EOF.
                        None => input_open = false,
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    debug!("ctrl-c received");
                    break;
                }
            }
        }

        println!();
        Ok(())
    }

    /// Applies a user command. Returns false when the app should exit.
    fn handle_command(&mut self, command: Command) -> Result<bool> {
        match command {
            Command::Toggle => self.engine.start()?,
            Command::Reset => self.engine.reset()?,
            Command::Theme => {
                self.display.toggle_theme();
                self.render();
            }
            Command::Quit => return Ok(false),
            Command::Unknown => self.display.show_keys(),
        }
        Ok(true)
    }

    /// Processes every queued engine event.
    fn drain_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Routes one engine event to the display and the alert sinks.
    fn handle_event(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::Tick { .. }
            | TimerEvent::PhaseStarted { .. }
            | TimerEvent::Paused { .. }
            | TimerEvent::Resumed { .. }
            | TimerEvent::Reset { .. } => self.render(),
            TimerEvent::PhaseCompleted { phase } => {
                let (title, _) = AlertDispatcher::message_for(phase);
                self.display.show_transition(title);
                self.alerts.dispatch(phase);
            }
        }
    }

    /// Redraws the countdown line from the engine's current state.
    fn render(&self) {
        let state = self.engine.state();
        self.display
            .render_countdown(state.phase, state.remaining_seconds, state.running);
    }
}

// ============================================================================
// Tests
// ============================================================================
