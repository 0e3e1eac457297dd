// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Tether
//!
//! Observable scalars, push-based combinators and two-way bindings for
//! UI-style code.
//!
//! ## Overview
//!
//! - [`Scalar<T>`](Scalar) holds a value and synchronously notifies its
//!   observers, in registration order, every time it is set.
//! - Operators (`filter`, `map`, `distinct`, `throttle`, `switch_to_latest`, ...)
//!   turn one observable into another.
//! - [`Promise<T, E>`](Promise) is a single-assignment asynchronous result
//!   that operators can flatten.
//! - [`TwoWayBinding`] and [`BindingTable`] keep scalars and widget properties
//!   in sync without feedback loops, using [`UpdateSource`] tags.
//!
//! Every registration returns a [`Subscription`]; dropping it unregisters.
//!
//! ## Quick Start
//!
//! A search box that waits for the user to pause, skips repeated queries and
//! only shows results for the latest one:
//!
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use tether::prelude::*;
//! use tether::{Promise, Scalar, VirtualScheduler};
//! use std::sync::Mutex;
//!
//! fn search(query: &str) -> Promise<Vec<String>, String> {
//!     Promise::value(vec![format!("{query} in the docs")])
//! }
//!
//! let scheduler = VirtualScheduler::new();
//! let query = Scalar::new(String::new());
//! let shown = Arc::new(Mutex::new(Vec::new()));
//!
//! let sink = Arc::clone(&shown);
//! let _sub = query
//!     .clone()
//!     .filter(|q: &String| q.len() > 2)
//!     .throttle(Duration::from_millis(300), scheduler.clone())
//!     .distinct()
//!     .map(|q: String| search(&q))
//!     .switch_to_latest()
//!     .on_success(move |results: Vec<String>| *sink.lock().unwrap() = results);
//!
//! query.set("rus".to_string()).unwrap();
//! query.set("rust".to_string()).unwrap();
//! scheduler.advance(Duration::from_millis(300));
//!
//! assert_eq!(*shown.lock().unwrap(), vec!["rust in the docs"]);
//! ```

pub use tether_bind::{BindingTable, TwoWayBinding, ViewId};
pub use tether_core::{
    BoxObservable, Change, DisposeBag, DisposeIn, Observable, Observer, ObserverSet, Promise,
    PromiseFuture, Resolver, Result, Scalar, Subscription, TetherError, UpdateSource,
    ViewProperty, WeakScalar,
};
pub use tether_runtime::{Scheduler, Task, VirtualInstant, VirtualScheduler};

#[cfg(feature = "runtime-tokio")]
pub use tether_runtime::TokioScheduler;

pub use tether_stream::ObservableStream;

/// Prelude module for convenient imports
pub mod prelude {
    pub use tether_core::{DisposeIn, Observable, ViewProperty};
    pub use tether_runtime::Scheduler;
    pub use tether_stream::prelude::*;
    pub use tether_time::prelude::*;
}
