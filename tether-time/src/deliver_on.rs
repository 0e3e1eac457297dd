// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tether_core::{Observable, Observer, Subscription};
use tether_runtime::Scheduler;

/// Observable returned by [`DeliverOnExt::deliver_on`].
pub struct DeliverOn<S, Sch> {
    source: S,
    scheduler: Sch,
}

impl<S, Sch> Observable for DeliverOn<S, Sch>
where
    S: Observable,
    Sch: Scheduler,
{
    type Item = S::Item;

    fn subscribe_observer(&self, observer: Observer<S::Item>) -> Subscription {
        let active = Arc::new(AtomicBool::new(true));
        let scheduler = self.scheduler.clone();

        let delivering = Arc::clone(&active);
        let upstream = self
            .source
            .subscribe_observer(Arc::new(move |value: S::Item| {
                let active = Arc::clone(&delivering);
                let observer = Arc::clone(&observer);
                let scheduled = scheduler.schedule(Box::new(move || {
                    if active.load(Ordering::Acquire) {
                        observer(value);
                    }
                }));
                if let Err(_error) = scheduled {
                    warn!("deliver_on: value dropped: {}", _error);
                }
            }));

        Subscription::new(move || {
            active.store(false, Ordering::Release);
            drop(upstream);
        })
    }
}

/// Extension trait providing the `deliver_on` operator.
pub trait DeliverOnExt: Observable + Sized {
    /// Re-emits every value as a task on `scheduler`, preserving order.
    ///
    /// Values still queued when the subscription ends are discarded.
    fn deliver_on<Sch: Scheduler>(self, scheduler: Sch) -> DeliverOn<Self, Sch> {
        DeliverOn {
            source: self,
            scheduler,
        }
    }
}

impl<S: Observable> DeliverOnExt for S {}
