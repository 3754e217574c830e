//! Timer abstraction for the intake state machine.
//!
//! All waiting goes through [`Scheduler`] rather than bare timer
//! calls, so tests can run against tokio's paused clock (which makes
//! [`TokioScheduler`] itself deterministic) or inject a scheduler that
//! never sleeps.

use async_trait::async_trait;
use std::time::Duration;

/// Schedules a resumption after a wall-clock duration.
#[async_trait]
pub trait Scheduler: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Production scheduler backed by the tokio timer wheel.
pub struct TokioScheduler;

#[async_trait]
impl Scheduler for TokioScheduler {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Scheduler that yields but never waits. Useful in tests that only
/// care about ordering, not timing.
pub struct ImmediateScheduler;

#[async_trait]
impl Scheduler for ImmediateScheduler {
    async fn sleep(&self, _duration: Duration) {
        tokio::task::yield_now().await;
    }
}
