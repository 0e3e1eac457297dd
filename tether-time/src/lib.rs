// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Time-based operators for tether observables.
//!
//! Every operator here takes a [`Scheduler`](tether_runtime::Scheduler)
//! explicitly. Production code passes a
//! [`TokioScheduler`](tether_runtime::TokioScheduler); tests pass a
//! [`VirtualScheduler`](tether_runtime::VirtualScheduler) and move time by hand.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

pub mod deliver_on;
pub mod prelude;
pub mod throttle;

pub use self::deliver_on::{DeliverOn, DeliverOnExt};
pub use self::throttle::{Throttle, ThrottleExt};
