// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Ordered observer registry.
//!
//! [`ObserverSet`] is the broadcasting heart of every hot source in tether.
//! Observers are kept in registration order and notified in that order.
//! Notification works on a snapshot taken under the lock, and the lock is
//! released before any callback runs, so callbacks may subscribe,
//! unsubscribe or emit again without deadlocking. An observer removed while a
//! notification is in flight is skipped for the rest of that notification.

use crate::{Observer, Result, Subscription, TetherError};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

struct Entry<T> {
    id: u64,
    active: Arc<AtomicBool>,
    observer: Observer<T>,
}

struct Registry<T> {
    next_id: u64,
    closed: bool,
    entries: Vec<Entry<T>>,
}

/// A thread-safe, ordered set of observers.
///
/// Cheap to clone; all clones share the same registry.
pub struct ObserverSet<T> {
    registry: Arc<Mutex<Registry<T>>>,
}

impl<T: Clone + 'static> ObserverSet<T> {
    /// Creates an empty, open set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry {
                next_id: 0,
                closed: false,
                entries: Vec::new(),
            })),
        }
    }

    /// Registers an observer at the end of the notification order.
    ///
    /// On a closed set nothing is registered and an empty subscription is returned.
    pub fn insert(&self, observer: Observer<T>) -> Subscription {
        let Some((id, active)) = self.register(observer) else {
            warn!("subscribe on a closed observer set ignored");
            return Subscription::empty();
        };

        trace!("observer {} registered", id);
        let registry: Weak<Mutex<Registry<T>>> = Arc::downgrade(&self.registry);
        Subscription::new(move || {
            active.store(false, Ordering::Release);
            if let Some(registry) = registry.upgrade() {
                registry.lock().entries.retain(|entry| entry.id != id);
                trace!("observer {} removed", id);
            }
        })
    }

    /// Registers an observer that stays until the set is closed.
    ///
    /// Returns `false` if the set was already closed.
    pub fn insert_detached(&self, observer: Observer<T>) -> bool {
        self.register(observer).is_some()
    }

    fn register(&self, observer: Observer<T>) -> Option<(u64, Arc<AtomicBool>)> {
        let mut registry = self.registry.lock();
        if registry.closed {
            return None;
        }

        let id = registry.next_id;
        registry.next_id += 1;
        let active = Arc::new(AtomicBool::new(true));
        registry.entries.push(Entry {
            id,
            active: Arc::clone(&active),
            observer,
        });
        Some((id, active))
    }

    /// Delivers `value` to every live observer, in registration order.
    ///
    /// Returns the number of observers that received the value.
    pub fn notify(&self, value: &T) -> Result<usize> {
        let snapshot: Vec<(Arc<AtomicBool>, Observer<T>)> = {
            let registry = self.registry.lock();
            if registry.closed {
                return Err(TetherError::Closed);
            }
            registry
                .entries
                .iter()
                .map(|entry| (Arc::clone(&entry.active), Arc::clone(&entry.observer)))
                .collect()
        };

        let mut delivered = 0;
        for (active, observer) in snapshot {
            if active.load(Ordering::Acquire) {
                observer(value.clone());
                delivered += 1;
            }
        }
        Ok(delivered)
    }

    /// Closes the set and hands back the observers that were still registered.
    ///
    /// Used by single-shot sources that deliver one final value themselves.
    pub fn close_and_drain(&self) -> Vec<Observer<T>> {
        let mut registry = self.registry.lock();
        registry.closed = true;
        registry
            .entries
            .drain(..)
            .filter(|entry| entry.active.swap(false, Ordering::AcqRel))
            .map(|entry| entry.observer)
            .collect()
    }

    /// Closes the set, dropping every observer. Idempotent.
    pub fn close(&self) {
        let dropped = self.close_and_drain();
        debug!("observer set closed, {} observers dropped", dropped.len());
        drop(dropped);
    }

    /// Returns `true` once the set has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.registry.lock().closed
    }

    /// Number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.lock().entries.len()
    }

    /// Returns `true` if no observer is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone + 'static> Default for ObserverSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ObserverSet<T> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<T> core::fmt::Debug for ObserverSet<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let registry = self.registry.lock();
        f.debug_struct("ObserverSet")
            .field("observers", &registry.entries.len())
            .field("closed", &registry.closed)
            .finish()
    }
}
