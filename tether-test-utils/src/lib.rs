// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for tether.
//!
//! This crate is meant for development and testing only.
//!
//! # Key Types
//!
//! ## `Recorder<T>`
//!
//! Collects everything an observable emits:
//!
//! ```rust
//! use tether_core::Scalar;
//! use tether_test_utils::Recorder;
//!
//! let scalar = Scalar::new(0);
//! let recorder = Recorder::new();
//! let _sub = recorder.record(&scalar);
//!
//! scalar.set(1).unwrap();
//! scalar.set(2).unwrap();
//! assert_eq!(recorder.values(), vec![1, 2]);
//! ```
//!
//! ## `FakeView<T>` / `FakeTextField`
//!
//! An in-memory [`ViewProperty`](tether_core::ViewProperty) that counts reads
//! and writes, and lets a test play the user with [`FakeView::user_edit`].
//!
//! ## `FakeSearchService`
//!
//! A search backend whose requests stay pending until the test completes
//! them, in any order.

pub mod fake_view;
pub mod helpers;
pub mod recorder;
pub mod search;

pub use fake_view::{FakeTextField, FakeView};
pub use helpers::{assert_no_element_emitted, expect_next_value};
pub use recorder::Recorder;
pub use search::{results_for, FakeSearchService, SearchError, SearchResults};
