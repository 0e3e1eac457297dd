// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;
use tether_core::{Observable, Observer, Subscription};

/// Observable returned by [`FilterExt::filter`].
pub struct Filter<S, P> {
    source: S,
    predicate: Arc<P>,
}

impl<S, P> Observable for Filter<S, P>
where
    S: Observable,
    P: Fn(&S::Item) -> bool + Send + Sync + 'static,
{
    type Item = S::Item;

    fn subscribe_observer(&self, observer: Observer<S::Item>) -> Subscription {
        let predicate = Arc::clone(&self.predicate);
        self.source
            .subscribe_observer(Arc::new(move |value: S::Item| {
                if predicate(&value) {
                    observer(value);
                }
            }))
    }
}

/// Extension trait providing the `filter` operator.
pub trait FilterExt: Observable + Sized {
    /// Emits only the upstream values for which `predicate` returns `true`.
    ///
    /// The predicate runs once per upstream emission, synchronously, on the
    /// emitting thread.
    ///
    /// # Example
    ///
    /// ```
    /// use tether_core::Scalar;
    /// use tether_stream::prelude::*;
    /// use std::sync::{Arc, Mutex};
    ///
    /// let number = Scalar::new(0);
    /// let evens = Arc::new(Mutex::new(Vec::new()));
    /// let sink = evens.clone();
    /// let _sub = number
    ///     .clone()
    ///     .filter(|n| n % 2 == 0)
    ///     .observe(move |n| sink.lock().unwrap().push(n));
    ///
    /// for n in 1..=6 {
    ///     number.set(n).unwrap();
    /// }
    /// assert_eq!(*evens.lock().unwrap(), vec![2, 4, 6]);
    /// ```
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: Fn(&Self::Item) -> bool + Send + Sync + 'static,
    {
        Filter {
            source: self,
            predicate: Arc::new(predicate),
        }
    }
}

impl<S: Observable> FilterExt for S {}
