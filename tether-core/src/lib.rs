// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core reactive primitives for tether.
//!
//! - [`Scalar`]: a mutable value that synchronously notifies observers.
//! - [`Observable`]: the push-based trait every source and operator implements.
//! - [`Subscription`] / [`DisposeBag`]: unsubscribe capabilities.
//! - [`Promise`]: single-assignment asynchronous result.
//! - [`UpdateSource`] / [`Change`]: origin tags used to break binding feedback loops.
//! - [`ViewProperty`]: the seam to a UI toolkit's widget properties.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

pub mod error;
pub mod observable;
pub mod observer_set;
pub mod promise;
pub mod scalar;
pub mod subscription;
pub mod update_source;
pub mod view;

pub use self::error::{Result, TetherError};
pub use self::observable::{BoxObservable, Observable, Observer};
pub use self::observer_set::ObserverSet;
pub use self::promise::{Promise, PromiseFuture, Resolver};
pub use self::scalar::{Changes, Scalar, WeakScalar};
pub use self::subscription::{DisposeBag, DisposeIn, Subscription};
pub use self::update_source::{Change, UpdateSource};
pub use self::view::ViewProperty;
