// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Single-assignment asynchronous result.
//!
//! A [`Promise`] stands for work that finishes later with either a value or a
//! failure. Whoever performs the work holds the matching [`Resolver`] and
//! resolves it at most once; every later attempt is rejected with
//! [`TetherError::AlreadyResolved`].
//!
//! Outcomes can be consumed three ways:
//!
//! - continuations ([`on_success`](Promise::on_success), [`on_failure`](Promise::on_failure),
//!   [`on_complete`](Promise::on_complete)), which run immediately when attached
//!   to an already resolved promise;
//! - as an [`Observable`] emitting exactly one `Result`, which is what lets
//!   `switch_to_latest` flatten a stream of promises;
//! - by `.await`ing it.
//!
//! ```
//! use tether_core::Promise;
//!
//! let (promise, resolver) = Promise::<u32, String>::pending();
//! promise.on_success(|value| assert_eq!(value, 42));
//!
//! resolver.succeed(42).unwrap();
//! assert!(resolver.succeed(7).is_err());
//! assert_eq!(promise.result(), Some(Ok(42)));
//! ```

use crate::{Observable, Observer, ObserverSet, Result, Subscription, TetherError};
use core::future::{Future, IntoFuture};
use core::pin::Pin;
use core::task::{Context, Poll};
use event_listener::{Event, EventListener};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

type Outcome<T, E> = core::result::Result<T, E>;

struct Shared<T, E> {
    outcome: Mutex<Option<Outcome<T, E>>>,
    continuations: ObserverSet<Outcome<T, E>>,
    resolved: Event,
}

/// A value of `T` or a failure of `E`, available at most once, possibly later.
pub struct Promise<T, E> {
    shared: Arc<Shared<T, E>>,
}

/// The write side of a [`Promise`].
///
/// Dropping a resolver without resolving leaves the promise pending forever.
pub struct Resolver<T, E> {
    shared: Arc<Shared<T, E>>,
}

impl<T, E> Promise<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    /// Creates an unresolved promise together with its resolver.
    pub fn pending() -> (Self, Resolver<T, E>) {
        let shared = Arc::new(Shared {
            outcome: Mutex::new(None),
            continuations: ObserverSet::new(),
            resolved: Event::new(),
        });
        (
            Self {
                shared: Arc::clone(&shared),
            },
            Resolver { shared },
        )
    }

    /// A promise that has already succeeded with `value`.
    pub fn value(value: T) -> Self {
        Self::resolved(Ok(value))
    }

    /// A promise that has already failed with `error`.
    pub fn error(error: E) -> Self {
        Self::resolved(Err(error))
    }

    /// A promise already resolved with `outcome`.
    pub fn resolved(outcome: Outcome<T, E>) -> Self {
        let (promise, resolver) = Self::pending();
        // A fresh resolver cannot have been used yet.
        let _ = resolver.resolve(outcome);
        promise
    }

    /// The outcome, if the promise has been resolved.
    pub fn result(&self) -> Option<Outcome<T, E>> {
        self.shared.outcome.lock().clone()
    }

    /// Returns `true` once an outcome is available.
    pub fn is_resolved(&self) -> bool {
        self.shared.outcome.lock().is_some()
    }

    /// Runs `f` with the outcome once it is available.
    pub fn on_complete<F>(&self, f: F)
    where
        F: Fn(Outcome<T, E>) + Send + Sync + 'static,
    {
        let outcome = {
            let outcome = self.shared.outcome.lock();
            match outcome.as_ref() {
                Some(outcome) => outcome.clone(),
                None => {
                    self.shared.continuations.insert_detached(Arc::new(f));
                    return;
                }
            }
        };
        f(outcome);
    }

    /// Runs `f` with the value if the promise succeeds.
    pub fn on_success<F>(&self, f: F)
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        self.on_complete(move |outcome| {
            if let Ok(value) = outcome {
                f(value);
            }
        });
    }

    /// Runs `f` with the error if the promise fails.
    pub fn on_failure<F>(&self, f: F)
    where
        F: Fn(E) + Send + Sync + 'static,
    {
        self.on_complete(move |outcome| {
            if let Err(error) = outcome {
                f(error);
            }
        });
    }
}

impl<T, E> Resolver<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    /// Resolves the promise with `outcome` and runs its continuations.
    ///
    /// Fails with [`TetherError::AlreadyResolved`] if an outcome was already set;
    /// the first outcome is kept.
    pub fn resolve(&self, outcome: Outcome<T, E>) -> Result<()> {
        let continuations = {
            let mut slot = self.shared.outcome.lock();
            if slot.is_some() {
                warn!("promise resolved twice, second outcome discarded");
                return Err(TetherError::AlreadyResolved);
            }
            *slot = Some(outcome.clone());
            self.shared.continuations.close_and_drain()
        };

        debug!("promise resolved, running {} continuations", continuations.len());
        self.shared.resolved.notify(usize::MAX);
        for continuation in continuations {
            continuation(outcome.clone());
        }
        Ok(())
    }

    /// Resolves the promise with a value.
    pub fn succeed(&self, value: T) -> Result<()> {
        self.resolve(Ok(value))
    }

    /// Resolves the promise with an error.
    pub fn fail(&self, error: E) -> Result<()> {
        self.resolve(Err(error))
    }

    /// Returns `true` once the promise has an outcome.
    pub fn is_resolved(&self) -> bool {
        self.shared.outcome.lock().is_some()
    }
}

impl<T, E> Clone for Promise<T, E> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

/// Clones share the single assignment: only the first `resolve` across all of them wins.
impl<T, E> Clone for Resolver<T, E> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Promise<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Promise")
            .field("outcome", &*self.shared.outcome.lock())
            .finish()
    }
}

impl<T, E> fmt::Debug for Resolver<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("resolved", &self.shared.outcome.lock().is_some())
            .finish()
    }
}

impl<T, E> Observable for Promise<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    type Item = Outcome<T, E>;

    /// Emits the outcome once. Subscribing after resolution emits immediately.
    fn subscribe_observer(&self, observer: Observer<Self::Item>) -> Subscription {
        let outcome = {
            let outcome = self.shared.outcome.lock();
            match outcome.as_ref() {
                Some(outcome) => outcome.clone(),
                None => return self.shared.continuations.insert(observer),
            }
        };
        observer(outcome);
        Subscription::empty()
    }
}

/// Future returned by awaiting a [`Promise`].
pub struct PromiseFuture<T, E> {
    promise: Promise<T, E>,
    listener: Option<EventListener>,
}

impl<T, E> Future for PromiseFuture<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    type Output = Outcome<T, E>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        loop {
            if let Some(outcome) = self.promise.result() {
                return Poll::Ready(outcome);
            }

            match self.listener.as_mut() {
                // Register first, then re-check above so a resolution in between is not lost.
                None => self.listener = Some(self.promise.shared.resolved.listen()),
                Some(listener) => match Pin::new(listener).poll(cx) {
                    Poll::Ready(()) => self.listener = None,
                    Poll::Pending => return Poll::Pending,
                },
            }
        }
    }
}

impl<T, E> IntoFuture for Promise<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    type Output = Outcome<T, E>;
    type IntoFuture = PromiseFuture<T, E>;

    fn into_future(self) -> Self::IntoFuture {
        PromiseFuture {
            promise: self,
            listener: None,
        }
    }
}
