//! Tick scheduling for the timer engine.
//!
//! The engine never talks to the platform clock directly; it is driven by a
//! [`TickSource`] injected into [`TimerEngine::run`](super::TimerEngine::run).
//! Production code uses [`IntervalTickSource`] (a real 1-second tokio
//! interval); tests use [`ManualTickSource`] to advance the countdown
//! deterministically without waiting on wall-clock time.

use tokio::sync::mpsc;
use tokio::time::{interval, Duration, Interval, MissedTickBehavior};

/// The tick cadence of the countdown.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

// ============================================================================
// TickSource
// ============================================================================

/// A source of periodic ticks.
///
/// `next_tick` completes once per scheduled tick. Implementations must be
/// cancel-safe so the engine can use them inside `tokio::select!`.
pub trait TickSource {
    /// Waits for the next tick.
    fn next_tick(&mut self) -> impl std::future::Future<Output = ()> + Send;
}

// ============================================================================
// IntervalTickSource
// ============================================================================

/// A real tick source backed by `tokio::time::interval`.
///
/// Missed ticks are skipped rather than bursted, so a suspended laptop does
/// not fast-forward the countdown on wake.
#[derive(Debug)]
pub struct IntervalTickSource {
    interval: Interval,
}

impl IntervalTickSource {
    /// Creates a tick source with the standard 1-second cadence.
    pub fn new() -> Self {
        Self::with_period(TICK_PERIOD)
    }

    /// Creates a tick source with a custom period.
    pub fn with_period(period: Duration) -> Self {
        let mut interval = interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { interval }
    }
}

impl Default for IntervalTickSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for IntervalTickSource {
    async fn next_tick(&mut self) {
        self.interval.tick().await;
    }
}

// ============================================================================
// ManualTickSource
// ============================================================================

/// A fake tick source driven by a [`ManualTick`] handle.
///
/// Used in tests to step the engine through exact tick counts.
#[derive(Debug)]
pub struct ManualTickSource {
    rx: mpsc::UnboundedReceiver<()>,
}

/// Handle that fires ticks into a [`ManualTickSource`].
#[derive(Debug, Clone)]
pub struct ManualTick {
    tx: mpsc::UnboundedSender<()>,
}

impl ManualTickSource {
    /// Creates a manual tick source and its firing handle.
    pub fn new() -> (Self, ManualTick) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { rx }, ManualTick { tx })
    }
}

impl TickSource for ManualTickSource {
    async fn next_tick(&mut self) {
        if self.rx.recv().await.is_none() {
            // All handles dropped: no further ticks will ever arrive.
            std::future::pending::<()>().await;
        }
    }
}

impl ManualTick {
    /// Fires a single tick.
    pub fn fire(&self) {
        let _ = self.tx.send(());
    }

    /// Fires `count` ticks back to back.
    pub fn fire_many(&self, count: u32) {
        for _ in 0..count {
            self.fire();
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
