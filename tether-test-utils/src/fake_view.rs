// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tether_core::{Observer, ObserverSet, Subscription, ViewProperty};

/// In-memory widget property.
///
/// By default a programmatic [`write`](ViewProperty::write) does not raise a
/// change event, like most toolkits. [`FakeView::echoing`] builds one that
/// does, which is the worst case for two-way bindings.
pub struct FakeView<T> {
    value: Mutex<T>,
    listeners: ObserverSet<()>,
    echo_writes: bool,
    reads: AtomicUsize,
    writes: AtomicUsize,
}

/// A text field's text.
pub type FakeTextField = FakeView<String>;

impl<T: Clone + Send + Sync + 'static> FakeView<T> {
    /// A view showing `initial` whose programmatic writes stay silent.
    #[must_use]
    pub fn new(initial: T) -> Arc<Self> {
        Self::build(initial, false)
    }

    /// A view whose programmatic writes also raise change events.
    #[must_use]
    pub fn echoing(initial: T) -> Arc<Self> {
        Self::build(initial, true)
    }

    fn build(initial: T, echo_writes: bool) -> Arc<Self> {
        Arc::new(Self {
            value: Mutex::new(initial),
            listeners: ObserverSet::new(),
            echo_writes,
            reads: AtomicUsize::new(0),
            writes: AtomicUsize::new(0),
        })
    }

    /// Plays the user: stores `value` and raises a change event.
    pub fn user_edit(&self, value: T) {
        *self.value.lock() = value;
        self.raise_change();
    }

    /// What the view shows, without counting as a read.
    #[must_use]
    pub fn displayed(&self) -> T {
        self.value.lock().clone()
    }

    /// Number of reads made through [`ViewProperty::read`].
    #[must_use]
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Number of programmatic writes made through [`ViewProperty::write`].
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Number of registered change listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn raise_change(&self) {
        // The listener set is never closed.
        let _ = self.listeners.notify(&());
    }
}

impl<T: Clone + Send + Sync + 'static> ViewProperty<T> for FakeView<T> {
    fn read(&self) -> T {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.value.lock().clone()
    }

    fn write(&self, value: T) {
        self.writes.fetch_add(1, Ordering::SeqCst);
        *self.value.lock() = value;
        if self.echo_writes {
            self.raise_change();
        }
    }

    fn on_change(&self, callback: Observer<()>) -> Subscription {
        self.listeners.insert(callback)
    }
}
