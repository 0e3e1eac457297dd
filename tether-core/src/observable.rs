// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Subscription;
use std::sync::Arc;

/// A shared observer callback.
pub type Observer<T> = Arc<dyn Fn(T) + Send + Sync>;

/// Something that pushes values to registered observers.
///
/// Implementations deliver values synchronously on the thread that produced
/// them, in production order. Subscribing registers exactly one observer and
/// returns the [`Subscription`] that removes it again.
///
/// Derived observables (filters, maps, ...) are lazy: they subscribe to their
/// upstream only when they are subscribed to themselves, and every
/// subscription gets its own operator state.
pub trait Observable: Send + Sync {
    /// The type of value this observable emits.
    type Item: Send + 'static;

    /// Registers `observer` and returns the handle that ends the registration.
    fn subscribe_observer(&self, observer: Observer<Self::Item>) -> Subscription;

    /// Erases the concrete type, so differently built observables of the same
    /// item can share one type.
    fn boxed(self) -> BoxObservable<Self::Item>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl<O: Observable + ?Sized> Observable for Arc<O> {
    type Item = O::Item;

    fn subscribe_observer(&self, observer: Observer<Self::Item>) -> Subscription {
        (**self).subscribe_observer(observer)
    }
}

impl<O: Observable + ?Sized> Observable for Box<O> {
    type Item = O::Item;

    fn subscribe_observer(&self, observer: Observer<Self::Item>) -> Subscription {
        (**self).subscribe_observer(observer)
    }
}

/// A type-erased observable.
pub type BoxObservable<T> = Box<dyn Observable<Item = T>>;
