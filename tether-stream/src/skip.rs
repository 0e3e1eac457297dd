// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tether_core::{Observable, Observer, Subscription};

/// Observable returned by [`SkipExt::skip`].
pub struct Skip<S> {
    source: S,
    count: usize,
}

impl<S: Observable> Observable for Skip<S> {
    type Item = S::Item;

    fn subscribe_observer(&self, observer: Observer<S::Item>) -> Subscription {
        let remaining = AtomicUsize::new(self.count);
        self.source
            .subscribe_observer(Arc::new(move |value: S::Item| {
                let skipped = remaining
                    .fetch_update(Ordering::AcqRel, Ordering::Acquire, |left| left.checked_sub(1))
                    .is_ok();
                if !skipped {
                    observer(value);
                }
            }))
    }
}

/// Extension trait providing the `skip` operator.
pub trait SkipExt: Observable + Sized {
    /// Drops the first `count` values of every subscription.
    fn skip(self, count: usize) -> Skip<Self> {
        Skip {
            source: self,
            count,
        }
    }
}

impl<S: Observable> SkipExt for S {}
