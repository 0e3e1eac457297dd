// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Side-table of bound scalars, keyed by view identity.
//!
//! Views belong to the UI toolkit and cannot carry extra fields, so the
//! scalar bound to a view property lives here instead. The first lookup for
//! a key creates the scalar from the view's current value and binds it; later
//! lookups return the same scalar. Removing the key tears the binding down
//! and closes the scalar. Entries whose view has been dropped are pruned the
//! same way on the next [`scalar_for`](BindingTable::scalar_for), `len`,
//! `is_empty` or [`prune`](BindingTable::prune).

use crate::TwoWayBinding;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use tether_core::{Scalar, ViewProperty};

/// Identity of a view held in an `Arc`, usable as a [`BindingTable`] key.
///
/// Two ids are equal only for the same allocation. A bound entry holds the
/// view weakly, which keeps the allocation (not the view) reserved, so its id
/// cannot be reused by another view while the entry exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(usize);

impl ViewId {
    /// The identity of the view behind `view`.
    pub fn of<V: ?Sized>(view: &Arc<V>) -> Self {
        Self(Arc::as_ptr(view).cast::<()>() as usize)
    }
}

/// One bound scalar per key.
pub struct BindingTable<K, T> {
    entries: Mutex<HashMap<K, TwoWayBinding<T>>>,
}

impl<K, T> BindingTable<K, T>
where
    K: Eq + Hash,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the scalar bound to `key`, binding a new one to `view` on first use.
    ///
    /// `view` is only consulted when the entry is created.
    pub fn scalar_for<V>(&self, key: K, view: &Arc<V>) -> Scalar<T>
    where
        V: ViewProperty<T>,
    {
        self.prune();
        if let Some(binding) = self.entries.lock().get(&key) {
            return binding.scalar().clone();
        }

        // Built without the table lock: binding calls into the view.
        let created = TwoWayBinding::from_view(view);
        let (scalar, loser) = {
            let mut entries = self.entries.lock();
            match entries.get(&key) {
                Some(existing) => (existing.scalar().clone(), Some(created)),
                None => {
                    let scalar = created.scalar().clone();
                    entries.insert(key, created);
                    (scalar, None)
                }
            }
        };
        if loser.is_some() {
            trace!("concurrent lookup already bound this key");
        }
        drop(loser);
        scalar
    }

    /// The scalar bound to `key`, if any.
    pub fn get(&self, key: &K) -> Option<Scalar<T>> {
        self.entries.lock().get(key).map(|binding| binding.scalar().clone())
    }

    /// Tears down the binding for `key` and closes its scalar.
    ///
    /// Returns `false` if nothing was bound.
    pub fn remove(&self, key: &K) -> bool {
        let removed = self.entries.lock().remove(key);
        match removed {
            Some(binding) => {
                binding.unbind().close();
                true
            }
            None => false,
        }
    }

    /// Returns `true` if `key` has an entry, live or not yet pruned.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.lock().contains_key(key)
    }

    /// Number of entries whose view is still alive.
    pub fn len(&self) -> usize {
        self.prune();
        self.entries.lock().len()
    }

    /// Returns `true` if no live view is bound.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tears down every entry whose view has been dropped, closing its scalar.
    ///
    /// Returns the number of entries removed.
    pub fn prune(&self) -> usize {
        let dead: Vec<(K, TwoWayBinding<T>)> = {
            let mut entries = self.entries.lock();
            if entries.values().all(TwoWayBinding::is_view_alive) {
                return 0;
            }
            let (dead, live): (Vec<_>, Vec<_>) = core::mem::take(&mut *entries)
                .into_iter()
                .partition(|(_, binding)| !binding.is_view_alive());
            *entries = live.into_iter().collect();
            dead
        };
        if !dead.is_empty() {
            debug!("binding table pruned {} entries of dropped views", dead.len());
        }
        let pruned = dead.len();
        for (_, binding) in dead {
            binding.unbind().close();
        }
        pruned
    }

    /// Removes every entry, closing every scalar.
    pub fn clear(&self) {
        let drained: Vec<_> = self.entries.lock().drain().map(|(_, binding)| binding).collect();
        debug!("binding table cleared, {} bindings removed", drained.len());
        for binding in drained {
            binding.unbind().close();
        }
    }
}

impl<K, T> Default for BindingTable<K, T>
where
    K: Eq + Hash,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T> std::fmt::Debug for BindingTable<K, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindingTable")
            .field("entries", &self.entries.lock().len())
            .finish()
    }
}
