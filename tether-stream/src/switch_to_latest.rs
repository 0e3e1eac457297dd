// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::map::{Map, MapExt};
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use tether_core::{Observable, Observer, Subscription};

/// Per-subscription state: which inner observable is current.
///
/// `generation` increases on every outer emission and on unsubscribe. An
/// inner emission is forwarded only while its generation is still current.
#[derive(Default)]
struct SwitchState {
    generation: u64,
    inner: Option<Subscription>,
}

fn is_current(state: &Weak<Mutex<SwitchState>>, generation: u64) -> bool {
    state
        .upgrade()
        .is_some_and(|state| state.lock().generation == generation)
}

/// Observable returned by [`SwitchToLatestExt::switch_to_latest`].
pub struct SwitchToLatest<S> {
    source: S,
}

impl<S> Observable for SwitchToLatest<S>
where
    S: Observable,
    S::Item: Observable,
{
    type Item = <S::Item as Observable>::Item;

    fn subscribe_observer(&self, observer: Observer<Self::Item>) -> Subscription {
        let state = Arc::new(Mutex::new(SwitchState::default()));

        let switch_state = Arc::clone(&state);
        let outer = self.source.subscribe_observer(Arc::new(move |inner: S::Item| {
            let (generation, previous) = {
                let mut state = switch_state.lock();
                state.generation += 1;
                (state.generation, state.inner.take())
            };
            // Ends the superseded inner subscription; its producer keeps running.
            drop(previous);
            debug!("switch_to_latest: now following inner #{}", generation);

            let observer = Arc::clone(&observer);
            let weak_state = Arc::downgrade(&switch_state);
            let subscription = inner.subscribe_observer(Arc::new(move |value: Self::Item| {
                if is_current(&weak_state, generation) {
                    observer(value);
                }
            }));

            // A newer inner may already have arrived while subscribing.
            let stale = {
                let mut state = switch_state.lock();
                if state.generation == generation {
                    state.inner = Some(subscription);
                    None
                } else {
                    Some(subscription)
                }
            };
            drop(stale);
        }));

        Subscription::new(move || {
            drop(outer);
            let inner = {
                let mut state = state.lock();
                state.generation += 1;
                state.inner.take()
            };
            drop(inner);
        })
    }
}

/// Extension trait providing the `switch_to_latest` and `flat_map_latest` operators.
pub trait SwitchToLatestExt: Observable + Sized {
    /// Flattens an observable of observables by following only the most
    /// recently emitted inner observable.
    ///
    /// Each outer emission unsubscribes from the previous inner observable and
    /// subscribes to the new one. Values the previous inner observable emitted
    /// before being replaced were already delivered; anything it emits after
    /// being replaced is dropped. Its producer is not told to stop.
    ///
    /// This is the tool for cancelling stale asynchronous requests: map each
    /// query to a [`Promise`](tether_core::Promise) and switch to the latest.
    ///
    /// # Example
    ///
    /// ```
    /// use tether_core::{Promise, Scalar};
    /// use tether_stream::prelude::*;
    /// use std::sync::{Arc, Mutex};
    ///
    /// let query = Scalar::new(String::new());
    /// let pending = Arc::new(Mutex::new(Vec::new()));
    /// let results = Arc::new(Mutex::new(Vec::new()));
    ///
    /// let resolvers = pending.clone();
    /// let sink = results.clone();
    /// let _sub = query
    ///     .clone()
    ///     .map(move |q: String| {
    ///         let (promise, resolver) = Promise::<String, ()>::pending();
    ///         resolvers.lock().unwrap().push((q, resolver));
    ///         promise
    ///     })
    ///     .switch_to_latest()
    ///     .on_success(move |r| sink.lock().unwrap().push(r));
    ///
    /// query.set("ru".into()).unwrap();
    /// query.set("rust".into()).unwrap();
    ///
    /// // The stale request finishes last but is ignored.
    /// let requests = std::mem::take(&mut *pending.lock().unwrap());
    /// requests[1].1.succeed(format!("results for {}", requests[1].0)).unwrap();
    /// requests[0].1.succeed(format!("results for {}", requests[0].0)).unwrap();
    ///
    /// assert_eq!(*results.lock().unwrap(), vec!["results for rust"]);
    /// ```
    fn switch_to_latest(self) -> SwitchToLatest<Self>
    where
        Self::Item: Observable,
    {
        SwitchToLatest { source: self }
    }

    /// Shorthand for `map(f).switch_to_latest()`.
    fn flat_map_latest<F, O>(self, f: F) -> SwitchToLatest<Map<Self, F>>
    where
        F: Fn(Self::Item) -> O + Send + Sync + 'static,
        O: Observable + 'static,
    {
        self.map(f).switch_to_latest()
    }
}

impl<S: Observable> SwitchToLatestExt for S {}
