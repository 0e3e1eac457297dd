// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Manually driven scheduler for deterministic tests.
//!
//! Time only moves when [`VirtualScheduler::advance`] is called. Due tasks run
//! on the caller's thread, ordered by due time and then by scheduling order.

use crate::scheduler::{Scheduler, Task};
use core::fmt;
use core::ops::{Add, Sub};
use core::time::Duration;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;
use tether_core::Result;

/// A point on a [`VirtualScheduler`]'s clock, measured from its creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct VirtualInstant(Duration);

impl VirtualInstant {
    /// Time elapsed since the scheduler was created.
    pub const fn elapsed(self) -> Duration {
        self.0
    }
}

impl Add<Duration> for VirtualInstant {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self {
        Self(self.0 + rhs)
    }
}

impl Sub for VirtualInstant {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Duration {
        self.0.saturating_sub(rhs.0)
    }
}

#[derive(Default)]
struct Clock {
    now: Duration,
    next_seq: u64,
    tasks: BTreeMap<(Duration, u64), Task>,
}

/// A scheduler whose clock is advanced by hand.
#[derive(Clone, Default)]
pub struct VirtualScheduler {
    clock: Arc<Mutex<Clock>>,
}

impl VirtualScheduler {
    /// Creates a scheduler at time zero with no pending tasks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward by `by`, running every task that falls due.
    ///
    /// Tasks scheduled by running tasks are honoured if they fall due within
    /// the same window. Returns the number of tasks run.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.clock.lock().now + by;
        let mut ran = 0;

        loop {
            let task = {
                let mut clock = self.clock.lock();
                let due = clock
                    .tasks
                    .first_key_value()
                    .map(|(key, _)| *key)
                    .filter(|(at, _)| *at <= target);
                match due {
                    Some(key) => {
                        clock.now = key.0;
                        clock.tasks.remove(&key)
                    }
                    None => {
                        clock.now = target;
                        None
                    }
                }
            };

            match task {
                Some(task) => {
                    task();
                    ran += 1;
                }
                None => break,
            }
        }

        trace!("virtual clock advanced by {:?}, {} tasks run", by, ran);
        ran
    }

    /// Runs every task that is due now without moving the clock.
    pub fn run_pending(&self) -> usize {
        self.advance(Duration::ZERO)
    }

    /// Number of tasks not yet run.
    pub fn pending(&self) -> usize {
        self.clock.lock().tasks.len()
    }
}

impl fmt::Debug for VirtualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clock = self.clock.lock();
        f.debug_struct("VirtualScheduler")
            .field("now", &clock.now)
            .field("pending", &clock.tasks.len())
            .finish()
    }
}

impl Scheduler for VirtualScheduler {
    type Instant = VirtualInstant;

    fn now(&self) -> VirtualInstant {
        VirtualInstant(self.clock.lock().now)
    }

    fn schedule_after(&self, delay: Duration, task: Task) -> Result<()> {
        let mut clock = self.clock.lock();
        let seq = clock.next_seq;
        clock.next_seq += 1;
        let due = clock.now + delay;
        clock.tasks.insert((due, seq), task);
        Ok(())
    }
}
