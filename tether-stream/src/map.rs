// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;
use tether_core::{Observable, Observer, Subscription};

/// Observable returned by [`MapExt::map`].
pub struct Map<S, F> {
    source: S,
    f: Arc<F>,
}

impl<S, F, U> Observable for Map<S, F>
where
    S: Observable,
    F: Fn(S::Item) -> U + Send + Sync + 'static,
    U: Send + 'static,
{
    type Item = U;

    fn subscribe_observer(&self, observer: Observer<U>) -> Subscription {
        let f = Arc::clone(&self.f);
        self.source
            .subscribe_observer(Arc::new(move |value: S::Item| observer(f(value))))
    }
}

/// Observable returned by [`MapExt::filter_map`].
pub struct FilterMap<S, F> {
    source: S,
    f: Arc<F>,
}

impl<S, F, U> Observable for FilterMap<S, F>
where
    S: Observable,
    F: Fn(S::Item) -> Option<U> + Send + Sync + 'static,
    U: Send + 'static,
{
    type Item = U;

    fn subscribe_observer(&self, observer: Observer<U>) -> Subscription {
        let f = Arc::clone(&self.f);
        self.source
            .subscribe_observer(Arc::new(move |value: S::Item| {
                if let Some(mapped) = f(value) {
                    observer(mapped);
                }
            }))
    }
}

/// Extension trait providing the `map` and `filter_map` operators.
pub trait MapExt: Observable + Sized {
    /// Transforms every value with `f`.
    ///
    /// When `f` returns an observable (for example a
    /// [`Promise`](tether_core::Promise)), the result is an observable of
    /// observables; flatten it with
    /// [`switch_to_latest`](crate::SwitchToLatestExt::switch_to_latest).
    fn map<F, U>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Self::Item) -> U + Send + Sync + 'static,
        U: Send + 'static,
    {
        Map {
            source: self,
            f: Arc::new(f),
        }
    }

    /// Transforms every value with `f`, dropping those mapped to `None`.
    fn filter_map<F, U>(self, f: F) -> FilterMap<Self, F>
    where
        F: Fn(Self::Item) -> Option<U> + Send + Sync + 'static,
        U: Send + 'static,
    {
        FilterMap {
            source: self,
            f: Arc::new(f),
        }
    }
}

impl<S: Observable> MapExt for S {}
