// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::sync::Arc;
use tether_core::{Observable, Observer, Subscription};

/// Observable returned by [`DistinctExt::distinct`].
pub struct Distinct<S> {
    source: S,
}

impl<S> Observable for Distinct<S>
where
    S: Observable,
    S::Item: Clone + PartialEq,
{
    type Item = S::Item;

    fn subscribe_observer(&self, observer: Observer<S::Item>) -> Subscription {
        let last: Mutex<Option<S::Item>> = Mutex::new(None);
        self.source
            .subscribe_observer(Arc::new(move |value: S::Item| {
                let changed = {
                    let mut last = last.lock();
                    if last.as_ref() == Some(&value) {
                        false
                    } else {
                        *last = Some(value.clone());
                        true
                    }
                };
                if changed {
                    observer(value);
                }
            }))
    }
}

/// Observable returned by [`DistinctExt::distinct_by`].
pub struct DistinctBy<S, F> {
    source: S,
    key: Arc<F>,
}

impl<S, F, K> Observable for DistinctBy<S, F>
where
    S: Observable,
    F: Fn(&S::Item) -> K + Send + Sync + 'static,
    K: PartialEq + Send + 'static,
{
    type Item = S::Item;

    fn subscribe_observer(&self, observer: Observer<S::Item>) -> Subscription {
        let key = Arc::clone(&self.key);
        let last: Mutex<Option<K>> = Mutex::new(None);
        self.source
            .subscribe_observer(Arc::new(move |value: S::Item| {
                let current = key(&value);
                let changed = {
                    let mut last = last.lock();
                    if last.as_ref() == Some(&current) {
                        false
                    } else {
                        *last = Some(current);
                        true
                    }
                };
                if changed {
                    observer(value);
                }
            }))
    }
}

/// Extension trait providing the `distinct` operators.
pub trait DistinctExt: Observable + Sized {
    /// Suppresses consecutive duplicates.
    ///
    /// The first value always passes; later values pass only when they differ
    /// from the last value that passed. Non-adjacent repeats are kept, so
    /// `1, 1, 2, 1` becomes `1, 2, 1`. Each subscription tracks its own last value.
    fn distinct(self) -> Distinct<Self>
    where
        Self::Item: Clone + PartialEq,
    {
        Distinct { source: self }
    }

    /// Like [`distinct`](Self::distinct), comparing a key derived from each value.
    fn distinct_by<F, K>(self, key: F) -> DistinctBy<Self, F>
    where
        F: Fn(&Self::Item) -> K + Send + Sync + 'static,
        K: PartialEq + Send + 'static,
    {
        DistinctBy {
            source: self,
            key: Arc::new(key),
        }
    }
}

impl<S: Observable> DistinctExt for S {}
