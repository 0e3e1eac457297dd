// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::time::Duration;
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use tether_core::{Observable, Observer, Subscription};
use tether_runtime::{Scheduler, Task};

struct ThrottleState<T> {
    pending: Option<T>,
    window_open: bool,
    active: bool,
}

/// Observable returned by [`ThrottleExt::throttle`].
pub struct Throttle<S, Sch> {
    source: S,
    interval: Duration,
    scheduler: Sch,
}

impl<S, Sch> Observable for Throttle<S, Sch>
where
    S: Observable,
    Sch: Scheduler,
{
    type Item = S::Item;

    fn subscribe_observer(&self, observer: Observer<S::Item>) -> Subscription {
        if self.interval.is_zero() {
            return self.source.subscribe_observer(observer);
        }

        let state = Arc::new(Mutex::new(ThrottleState {
            pending: None,
            window_open: false,
            active: true,
        }));

        let interval = self.interval;
        let scheduler = self.scheduler.clone();
        let upstream_state = Arc::clone(&state);
        let upstream = self
            .source
            .subscribe_observer(Arc::new(move |value: S::Item| {
                let opens_window = {
                    let mut state = upstream_state.lock();
                    if !state.active {
                        return;
                    }
                    state.pending = Some(value);
                    !core::mem::replace(&mut state.window_open, true)
                };
                if !opens_window {
                    return;
                }

                let flush = flush_task(Arc::downgrade(&upstream_state), Arc::clone(&observer));
                if let Err(_error) = scheduler.schedule_after(interval, flush) {
                    warn!("throttle: flush could not be scheduled, value dropped: {}", _error);
                    let mut state = upstream_state.lock();
                    state.pending = None;
                    state.window_open = false;
                }
            }));

        Subscription::new(move || {
            drop(upstream);
            let mut state = state.lock();
            state.active = false;
            state.pending = None;
        })
    }
}

fn flush_task<T: Send + 'static>(state: Weak<Mutex<ThrottleState<T>>>, observer: Observer<T>) -> Task {
    Box::new(move || {
        let Some(state) = state.upgrade() else {
            return;
        };
        let value = {
            let mut state = state.lock();
            state.window_open = false;
            if state.active {
                state.pending.take()
            } else {
                None
            }
        };
        if let Some(value) = value {
            trace!("throttle: window closed, forwarding latest value");
            observer(value);
        }
    })
}

/// Extension trait providing the `throttle` operator.
pub trait ThrottleExt: Observable + Sized {
    /// Forwards at most one value per `interval`, always the latest one.
    ///
    /// The first value after a quiet period opens a window of `interval` on
    /// `scheduler`. Values arriving while the window is open replace each
    /// other; when it closes, the most recent one is forwarded. Forwarded
    /// values are therefore at least `interval` apart, and the last value of
    /// a burst is never lost.
    ///
    /// A zero `interval` forwards every value synchronously and never touches
    /// the scheduler.
    ///
    /// Flushes run on the scheduler, so downstream observers run there too.
    /// Unsubscribing discards a pending value.
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    /// use tether_core::Scalar;
    /// use tether_runtime::VirtualScheduler;
    /// use tether_stream::prelude::*;
    /// use tether_time::prelude::*;
    /// use std::sync::{Arc, Mutex};
    ///
    /// let scheduler = VirtualScheduler::new();
    /// let text = Scalar::new(String::new());
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    ///
    /// let sink = seen.clone();
    /// let _sub = text
    ///     .clone()
    ///     .throttle(Duration::from_millis(300), scheduler.clone())
    ///     .observe(move |t| sink.lock().unwrap().push(t));
    ///
    /// for t in ["r", "ru", "rus"] {
    ///     text.set(t.to_string()).unwrap();
    /// }
    /// assert!(seen.lock().unwrap().is_empty());
    ///
    /// scheduler.advance(Duration::from_millis(300));
    /// assert_eq!(*seen.lock().unwrap(), vec!["rus"]);
    /// ```
    fn throttle<Sch: Scheduler>(self, interval: Duration, scheduler: Sch) -> Throttle<Self, Sch> {
        Throttle {
            source: self,
            interval,
            scheduler,
        }
    }
}

impl<S: Observable> ThrottleExt for S {}
