// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Where a change to a [`Scalar`](crate::Scalar) originated.
///
/// Two-way bindings use the tag to avoid writing a view's own change back
/// into the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UpdateSource {
    /// Set programmatically, by application code.
    #[default]
    Model,
    /// Set in response to the bound view changing.
    View,
}

/// A value together with the origin of the change that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change<T> {
    /// The new value.
    pub value: T,
    /// Who set it.
    pub source: UpdateSource,
}

impl<T> Change<T> {
    /// Pairs `value` with `source`.
    pub const fn new(value: T, source: UpdateSource) -> Self {
        Self { value, source }
    }

    /// Returns `true` if the change came from application code.
    pub fn is_from_model(&self) -> bool {
        self.source == UpdateSource::Model
    }

    /// Returns `true` if the change came from the bound view.
    pub fn is_from_view(&self) -> bool {
        self.source == UpdateSource::View
    }

    /// Drops the source tag.
    pub fn into_value(self) -> T {
        self.value
    }
}
