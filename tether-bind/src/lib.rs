// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Two-way bindings between [`Scalar`](tether_core::Scalar)s and view properties.
//!
//! A UI toolkit exposes each bindable widget property as a
//! [`ViewProperty`]. [`TwoWayBinding`] keeps one property and one scalar in
//! sync in both directions without feedback loops, and [`BindingTable`]
//! caches one bound scalar per view so repeated lookups hand back the same
//! container.
//!
//! ```
//! use tether_bind::{BindingTable, ViewId};
//! use tether_core::ViewProperty;
//! use tether_test_utils::FakeTextField;
//!
//! let field = FakeTextField::new("hello".to_string());
//! let table = BindingTable::new();
//!
//! let text = table.scalar_for(ViewId::of(&field), &field);
//! assert_eq!(text.get(), "hello");
//!
//! field.user_edit("hello, world".to_string());
//! assert_eq!(text.get(), "hello, world");
//!
//! text.set("bye".to_string()).unwrap();
//! assert_eq!(field.read(), "bye");
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

pub mod binding;
pub mod table;

pub use self::binding::TwoWayBinding;
pub use self::table::{BindingTable, ViewId};
pub use tether_core::ViewProperty;
