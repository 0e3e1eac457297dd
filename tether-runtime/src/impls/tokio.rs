// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::scheduler::{Scheduler, Task};
use ::tokio::runtime::Handle;
use ::tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use ::tokio::time::{sleep_until, Instant};
use core::time::Duration;
use std::collections::BTreeMap;
use tether_core::{Result, TetherError};

type Timed = (Instant, Task);

/// A serial scheduler backed by a tokio runtime.
///
/// All tasks run one at a time on a single worker task, in the order they
/// become due, which makes it a stand-in for a UI main queue. A task's
/// deadline is fixed when it is scheduled, and tasks with the same deadline
/// run in the order they were scheduled. Delays use `tokio::time`, so paused
/// test time (`tokio::time::pause`) applies.
///
/// Clones share the same worker. The worker stops once every clone is
/// dropped; timers still pending at that point are discarded.
#[derive(Clone, Debug)]
pub struct TokioScheduler {
    queue: UnboundedSender<Timed>,
}

impl TokioScheduler {
    /// Creates a scheduler on the runtime the caller is running in.
    pub fn current() -> Result<Self> {
        let handle = Handle::try_current()
            .map_err(|_| TetherError::scheduler("no tokio runtime on the current thread"))?;
        Ok(Self::new(&handle))
    }

    /// Creates a scheduler whose worker runs on `handle`.
    pub fn new(handle: &Handle) -> Self {
        let (queue, inbox) = unbounded_channel::<Timed>();
        handle.spawn(run_worker(inbox));
        Self { queue }
    }
}

/// Owns the timer queue: runs every due task, then waits for either the next
/// deadline or new work.
async fn run_worker(mut inbox: UnboundedReceiver<Timed>) {
    let mut timers: BTreeMap<(Instant, u64), Task> = BTreeMap::new();
    let mut received = 0_u64;

    loop {
        let now = Instant::now();
        while let Some(entry) = timers.first_entry() {
            if entry.key().0 > now {
                break;
            }
            let task = entry.remove();
            task();
        }

        let next_due = timers.keys().next().map(|(due, _)| *due);
        ::tokio::select! {
            message = inbox.recv() => match message {
                Some((due, task)) => {
                    timers.insert((due, received), task);
                    received += 1;
                }
                None => break,
            },
            () = sleep_until(next_due.unwrap_or(now)), if next_due.is_some() => {}
        }
    }

    if !timers.is_empty() {
        warn!("tokio scheduler stopped with {} delayed tasks pending", timers.len());
    }
    debug!("tokio scheduler worker stopped");
}

impl Scheduler for TokioScheduler {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn schedule_after(&self, delay: Duration, task: Task) -> Result<()> {
        self.queue
            .send((Instant::now() + delay, task))
            .map_err(|_| TetherError::scheduler("scheduler worker has stopped"))
    }
}
