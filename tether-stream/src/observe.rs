// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;
use tether_core::{Observable, Subscription};

/// Extension trait providing terminal consumption of an observable.
pub trait ObserveExt: Observable {
    /// Calls `f` for every emitted value until the returned subscription ends.
    ///
    /// Registration always succeeds while the upstream is alive. On a
    /// [`Scalar`](tether_core::Scalar) the inherent `observe` takes precedence
    /// and also replays the current value.
    fn observe<F>(&self, f: F) -> Subscription
    where
        F: Fn(Self::Item) + Send + Sync + 'static,
    {
        self.subscribe_observer(Arc::new(f))
    }
}

impl<S: Observable + ?Sized> ObserveExt for S {}

/// Extension trait for observables of `Result`s, such as flattened promises.
pub trait ResultExt<T, E>: Observable<Item = Result<T, E>> {
    /// Calls `f` with every successful value; failures are ignored.
    fn on_success<F>(&self, f: F) -> Subscription
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        self.subscribe_observer(Arc::new(move |outcome: Result<T, E>| {
            if let Ok(value) = outcome {
                f(value);
            }
        }))
    }

    /// Calls `f` with every failure; successes are ignored.
    fn on_failure<F>(&self, f: F) -> Subscription
    where
        F: Fn(E) + Send + Sync + 'static,
    {
        self.subscribe_observer(Arc::new(move |outcome: Result<T, E>| {
            if let Err(error) = outcome {
                f(error);
            }
        }))
    }
}

impl<S, T, E> ResultExt<T, E> for S where S: Observable<Item = Result<T, E>> + ?Sized {}
