// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Unsubscribe capabilities.
//!
//! Registering an observer never keeps the observed value's owner alive.
//! Instead, every registration hands back a [`Subscription`]: the only
//! capability able to remove the callback again. Dropping the subscription
//! removes the callback, so its lifetime is the registration's lifetime.
//!
//! A [`DisposeBag`] collects subscriptions that should end together, typically
//! when the object that created them goes away.

use parking_lot::Mutex;

type Teardown = Box<dyn FnOnce() + Send>;

/// Handle to an active observer registration.
///
/// The registration ends when the handle is dropped or [`unsubscribe`](Self::unsubscribe)d.
/// Use [`detach`](Self::detach) to keep it for as long as the source lives.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    teardown: Option<Teardown>,
}

impl Subscription {
    /// Creates a subscription that runs `teardown` exactly once when it ends.
    pub fn new<F>(teardown: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    /// A subscription with nothing to tear down.
    ///
    /// Returned by sources that have already delivered everything they ever will.
    pub const fn empty() -> Self {
        Self { teardown: None }
    }

    /// Combines several subscriptions into one that ends all of them, in order.
    pub fn all(subscriptions: Vec<Subscription>) -> Self {
        Self::new(move || drop(subscriptions))
    }

    /// Ends the registration now.
    pub fn unsubscribe(mut self) {
        self.end();
    }

    /// Keeps the registration alive for the lifetime of the source.
    ///
    /// The teardown is leaked rather than run, so the callback stays registered
    /// until the source itself is closed or dropped.
    pub fn detach(mut self) {
        if let Some(teardown) = self.teardown.take() {
            std::mem::forget(teardown);
        }
    }

    /// Returns `true` while the subscription still owns a teardown.
    pub fn is_active(&self) -> bool {
        self.teardown.is_some()
    }

    fn end(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.end();
    }
}

impl core::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Collects subscriptions and ends them together.
///
/// Dropping the bag disposes of everything it holds, so a bag stored on an
/// owner ties the subscriptions to that owner's lifetime.
#[derive(Debug, Default)]
pub struct DisposeBag {
    subscriptions: Mutex<Vec<Subscription>>,
}

impl DisposeBag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a subscription to the bag.
    pub fn add(&self, subscription: Subscription) {
        self.subscriptions.lock().push(subscription);
    }

    /// Ends every subscription in the bag. The bag can be reused afterwards.
    pub fn dispose(&self) {
        let drained = core::mem::take(&mut *self.subscriptions.lock());
        drop(drained);
    }

    /// Number of subscriptions currently held.
    pub fn len(&self) -> usize {
        self.subscriptions.lock().len()
    }

    /// Returns `true` if the bag holds no subscriptions.
    pub fn is_empty(&self) -> bool {
        self.subscriptions.lock().is_empty()
    }
}

impl Drop for DisposeBag {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl Extend<Subscription> for DisposeBag {
    fn extend<I: IntoIterator<Item = Subscription>>(&mut self, iter: I) {
        self.subscriptions.get_mut().extend(iter);
    }
}

/// Extension for storing a subscription in a bag fluently.
pub trait DisposeIn {
    /// Moves the subscription into `bag`.
    fn dispose_in(self, bag: &DisposeBag);
}

impl DisposeIn for Subscription {
    fn dispose_in(self, bag: &DisposeBag) {
        bag.add(self);
    }
}
