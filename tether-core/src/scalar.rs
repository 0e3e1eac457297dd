// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Observable value container.
//!
//! A [`Scalar`] holds a current value and synchronously notifies its observers
//! every time the value is set.
//!
//! ## Characteristics
//!
//! - **Synchronous**: `set` returns only after every observer has run.
//! - **Ordered**: observers run in registration order, each exactly once per `set`.
//! - **Hot**: [`observe_new`](Scalar::observe_new) observers only see later changes;
//!   [`observe`](Scalar::observe) additionally replays the current value once.
//! - **Tagged**: every change carries an [`UpdateSource`], available through
//!   [`observe_changes`](Scalar::observe_changes) and [`changes`](Scalar::changes).
//! - **Shared**: cheap to clone; all clones share the same value and observers.
//!
//! Observers run with no internal lock held and may call `set` again. Such a
//! nested `set` stores its value at once but its notification is queued: it
//! is delivered after the current notification has reached every observer,
//! so all observers see the values in `set` order and end on the stored value.
//!
//! ## Example
//!
//! ```
//! use tether_core::Scalar;
//! use std::sync::{Arc, Mutex};
//!
//! let text = Scalar::new(String::new());
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let sink = seen.clone();
//! let _subscription = text.observe_new(move |value| sink.lock().unwrap().push(value));
//!
//! text.set("a".to_string()).unwrap();
//! text.set("b".to_string()).unwrap();
//!
//! assert_eq!(*seen.lock().unwrap(), vec!["a", "b"]);
//! assert_eq!(text.get(), "b");
//! ```

use crate::{Change, Observable, Observer, ObserverSet, Result, Subscription, TetherError, UpdateSource};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Weak};

/// Changes waiting to be delivered, and whether a delivery loop is running.
struct Delivery<T> {
    delivering: bool,
    queue: VecDeque<Change<T>>,
}

struct Shared<T> {
    value: Mutex<T>,
    observers: ObserverSet<Change<T>>,
    delivery: Mutex<Delivery<T>>,
}

/// Ends a delivery loop that stops early, on error or observer panic.
struct DeliveryGuard<'a, T> {
    delivery: &'a Mutex<Delivery<T>>,
}

impl<T> Drop for DeliveryGuard<'_, T> {
    fn drop(&mut self) {
        let mut delivery = self.delivery.lock();
        delivery.delivering = false;
        delivery.queue.clear();
    }
}

/// A mutable value that notifies observers when it changes.
pub struct Scalar<T> {
    shared: Arc<Shared<T>>,
}

impl<T: Clone + Send + Sync + 'static> Scalar<T> {
    /// Creates a scalar holding `initial`. Constructing never notifies anyone.
    pub fn new(initial: T) -> Self {
        Self {
            shared: Arc::new(Shared {
                value: Mutex::new(initial),
                observers: ObserverSet::new(),
                delivery: Mutex::new(Delivery {
                    delivering: false,
                    queue: VecDeque::new(),
                }),
            }),
        }
    }

    /// Returns a clone of the current value.
    pub fn get(&self) -> T {
        self.shared.value.lock().clone()
    }

    /// Runs `f` against the current value without cloning it.
    ///
    /// `f` runs under the value lock and must not call back into this scalar.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.shared.value.lock())
    }

    /// Replaces the value and notifies every observer, tagged [`UpdateSource::Model`].
    pub fn set(&self, value: T) -> Result<()> {
        self.set_from(UpdateSource::Model, value)
    }

    /// Replaces the value and notifies every observer, tagged with `source`.
    pub fn set_from(&self, source: UpdateSource, value: T) -> Result<()> {
        if self.shared.observers.is_closed() {
            warn!("set on a closed scalar rejected");
            return Err(TetherError::Closed);
        }

        *self.shared.value.lock() = value.clone();
        self.publish(Change::new(value, source))
    }

    /// Mutates the value in place, then notifies with the result.
    pub fn update(&self, f: impl FnOnce(&mut T)) -> Result<()> {
        if self.shared.observers.is_closed() {
            return Err(TetherError::Closed);
        }

        let value = {
            let mut current = self.shared.value.lock();
            f(&mut current);
            current.clone()
        };
        self.publish(Change::new(value, UpdateSource::Model))
    }

    /// Queues `change` and, unless a delivery loop is already running,
    /// delivers queued changes in FIFO order until none are left.
    fn publish(&self, change: Change<T>) -> Result<()> {
        {
            let mut delivery = self.shared.delivery.lock();
            delivery.queue.push_back(change);
            if delivery.delivering {
                trace!("nested scalar change queued behind the current notification");
                return Ok(());
            }
            delivery.delivering = true;
        }

        let guard = DeliveryGuard {
            delivery: &self.shared.delivery,
        };
        loop {
            let next = {
                let mut delivery = guard.delivery.lock();
                match delivery.queue.pop_front() {
                    Some(next) => next,
                    None => {
                        // Cleared under the same lock that found the queue empty.
                        delivery.delivering = false;
                        drop(delivery);
                        core::mem::forget(guard);
                        return Ok(());
                    }
                }
            };
            let _delivered = self.shared.observers.notify(&next)?;
            trace!("scalar change from {:?} delivered to {} observers", next.source, _delivered);
        }
    }

    /// Registers `f` for subsequent changes only.
    pub fn observe_new<F>(&self, f: F) -> Subscription
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        self.shared
            .observers
            .insert(Arc::new(move |change: Change<T>| f(change.value)))
    }

    /// Calls `f` with the current value right away, then on every change.
    pub fn observe<F>(&self, f: F) -> Subscription
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        f(self.get());
        self.observe_new(f)
    }

    /// Registers `f` for subsequent changes, including their source.
    pub fn observe_changes<F>(&self, f: F) -> Subscription
    where
        F: Fn(Change<T>) + Send + Sync + 'static,
    {
        self.shared.observers.insert(Arc::new(f))
    }

    /// An observable of tagged changes, for composing with operators.
    pub fn changes(&self) -> Changes<T> {
        Changes {
            scalar: self.clone(),
        }
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.shared.observers.len()
    }

    /// Closes the scalar: observers are dropped and later `set`s fail with
    /// [`TetherError::Closed`]. The last value stays readable.
    pub fn close(&self) {
        self.shared.observers.close();
    }

    /// Returns `true` once [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.shared.observers.is_closed()
    }

    /// A non-owning handle to this scalar.
    pub fn downgrade(&self) -> WeakScalar<T> {
        WeakScalar {
            shared: Arc::downgrade(&self.shared),
        }
    }

    /// Returns `true` if both handles refer to the same scalar.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }
}

impl<T> Clone for Scalar<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: Clone + Default + Send + Sync + 'static> Default for Scalar<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Scalar<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scalar")
            .field("value", &*self.shared.value.lock())
            .field("observers", &self.shared.observers)
            .finish()
    }
}

impl<T: Clone + Send + Sync + 'static> Observable for Scalar<T> {
    type Item = T;

    fn subscribe_observer(&self, observer: Observer<T>) -> Subscription {
        self.shared
            .observers
            .insert(Arc::new(move |change: Change<T>| observer(change.value)))
    }
}

/// Observable view of a scalar's tagged changes. See [`Scalar::changes`].
pub struct Changes<T> {
    scalar: Scalar<T>,
}

impl<T: Clone + Send + Sync + 'static> Observable for Changes<T> {
    type Item = Change<T>;

    fn subscribe_observer(&self, observer: Observer<Change<T>>) -> Subscription {
        self.scalar.shared.observers.insert(observer)
    }
}

impl<T> Clone for Changes<T> {
    fn clone(&self) -> Self {
        Self {
            scalar: self.scalar.clone(),
        }
    }
}

/// Non-owning handle to a [`Scalar`]. See [`Scalar::downgrade`].
pub struct WeakScalar<T> {
    shared: Weak<Shared<T>>,
}

impl<T> WeakScalar<T> {
    /// Recovers the scalar if it is still alive.
    pub fn upgrade(&self) -> Option<Scalar<T>> {
        self.shared.upgrade().map(|shared| Scalar { shared })
    }
}

impl<T> Clone for WeakScalar<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Weak::clone(&self.shared),
        }
    }
}

impl<T> fmt::Debug for WeakScalar<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakScalar")
            .field("alive", &(self.shared.strong_count() > 0))
            .finish()
    }
}
