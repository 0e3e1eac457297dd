// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use core::ops::{Add, Sub};
use core::time::Duration;
use tether_core::Result;

/// A unit of deferred work.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// An execution context that runs tasks later, in order.
///
/// Tasks scheduled with the same delay run in the order they were scheduled.
/// Time-based operators take a scheduler explicitly so tests can drive them
/// with virtual time.
pub trait Scheduler: Clone + Send + Sync + Debug + 'static {
    type Instant: Copy
        + Debug
        + Ord
        + Send
        + Sync
        + Add<Duration, Output = Self::Instant>
        + Sub<Self::Instant, Output = Duration>;

    /// The scheduler's notion of the current time.
    fn now(&self) -> Self::Instant;

    /// Runs `task` once `delay` has elapsed.
    fn schedule_after(&self, delay: Duration, task: Task) -> Result<()>;

    /// Runs `task` as soon as the scheduler gets to it.
    fn schedule(&self, task: Task) -> Result<()> {
        self.schedule_after(Duration::ZERO, task)
    }
}
