// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Observer, Subscription};

/// One property of a view owned by a UI toolkit, such as a text field's text.
///
/// This is the whole surface tether needs from a toolkit: read the current
/// value, write a new one, and hear that *something* changed. Change events
/// carry no payload; listeners re-read the property.
pub trait ViewProperty<T>: Send + Sync + 'static {
    /// The value currently displayed.
    fn read(&self) -> T;

    /// Displays `value`. Implementations may or may not raise a change event.
    fn write(&self, value: T);

    /// Registers `callback` for user-originated changes.
    fn on_change(&self, callback: Observer<()>) -> Subscription;
}
