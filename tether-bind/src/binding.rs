// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::{Arc, Weak};
use tether_core::{Change, DisposeBag, DisposeIn, Scalar, UpdateSource, ViewProperty};

/// Keeps a view property and a scalar in sync in both directions.
///
/// - A change event from the view stores the view's value in the scalar,
///   tagged [`UpdateSource::View`], unless the scalar already holds it.
/// - A [`UpdateSource::Model`] change of the scalar is written to the view.
///   `View` changes are never written back.
///
/// The binding holds the view weakly. Dropping the binding, or calling
/// [`unbind`](Self::unbind), ends both directions.
pub struct TwoWayBinding<T> {
    scalar: Scalar<T>,
    view: Weak<dyn ViewProperty<T>>,
    subscriptions: DisposeBag,
}

impl<T> TwoWayBinding<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    /// Binds `view` to `scalar`. Neither side's current value is copied.
    pub fn bind<V>(view: &Arc<V>, scalar: Scalar<T>) -> Self
    where
        V: ViewProperty<T>,
    {
        let subscriptions = DisposeBag::new();

        let source = Arc::downgrade(view);
        let target = scalar.downgrade();
        view.on_change(Arc::new(move |_: ()| {
            let (Some(view), Some(scalar)) = (source.upgrade(), target.upgrade()) else {
                return;
            };
            let value = view.read();
            // A view that reports its own programmatic writes lands here with
            // the value the scalar just pushed.
            if scalar.with(|current| *current == value) {
                return;
            }
            match scalar.set_from(UpdateSource::View, value) {
                Ok(()) => {}
                Err(error) if error.is_closed() => trace!("view change after the scalar was closed"),
                Err(_error) => warn!("view change not stored: {}", _error),
            }
        }))
        .dispose_in(&subscriptions);

        let sink = Arc::downgrade(view);
        scalar
            .observe_changes(move |change: Change<T>| {
                if change.is_from_view() {
                    return;
                }
                if let Some(view) = sink.upgrade() {
                    view.write(change.value);
                }
            })
            .dispose_in(&subscriptions);

        debug!("two-way binding established");
        let view: Weak<dyn ViewProperty<T>> = Arc::<V>::downgrade(view);
        Self {
            scalar,
            view,
            subscriptions,
        }
    }

    /// Creates a scalar holding the view's current value and binds the two.
    pub fn from_view<V>(view: &Arc<V>) -> Self
    where
        V: ViewProperty<T>,
    {
        Self::bind(view, Scalar::new(view.read()))
    }

    /// The bound scalar.
    pub fn scalar(&self) -> &Scalar<T> {
        &self.scalar
    }

    /// Returns `false` once the bound view has been dropped.
    pub fn is_view_alive(&self) -> bool {
        self.view.strong_count() > 0
    }

    /// Ends both directions of the binding and returns the scalar.
    pub fn unbind(self) -> Scalar<T> {
        self.subscriptions.dispose();
        debug!("two-way binding removed");
        self.scalar
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for TwoWayBinding<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwoWayBinding")
            .field("scalar", &self.scalar)
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}
