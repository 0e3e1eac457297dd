// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::sync::Arc;
use tether_core::{Observable, Observer, Subscription};

/// Shared log of emitted values. Clones share the same log.
#[derive(Debug)]
pub struct Recorder<T> {
    values: Arc<Mutex<Vec<T>>>,
}

impl<T: Clone + Send + 'static> Recorder<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// An observer appending to this recorder.
    #[must_use]
    pub fn observer(&self) -> Observer<T> {
        let values = Arc::clone(&self.values);
        Arc::new(move |value: T| values.lock().push(value))
    }

    /// Subscribes to `source`, recording everything it emits.
    pub fn record<O>(&self, source: &O) -> Subscription
    where
        O: Observable<Item = T> + ?Sized,
    {
        source.subscribe_observer(self.observer())
    }

    /// Appends `value` directly.
    pub fn push(&self, value: T) {
        self.values.lock().push(value);
    }

    #[must_use]
    pub fn values(&self) -> Vec<T> {
        self.values.lock().clone()
    }

    /// Returns the recorded values and clears the log.
    pub fn take(&self) -> Vec<T> {
        std::mem::take(&mut *self.values.lock())
    }

    #[must_use]
    pub fn last(&self) -> Option<T> {
        self.values.lock().last().cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.lock().is_empty()
    }
}

impl<T: Clone + Send + 'static> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self {
            values: Arc::clone(&self.values),
        }
    }
}
