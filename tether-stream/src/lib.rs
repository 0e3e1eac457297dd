// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Push-based combinators for tether observables.
//!
//! Every operator is an extension trait over [`Observable`](tether_core::Observable)
//! returning a lazy operator value. Nothing is subscribed until a terminal
//! such as [`observe`](ObserveExt::observe) is called, and each subscription
//! gets fresh operator state. Values travel synchronously on the emitting
//! thread and keep their upstream order; only `distinct`, `filter`,
//! `filter_map`, `skip` and `switch_to_latest` ever drop values.
//!
//! Time-based operators (`throttle`, `deliver_on`) live in `tether-time`.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

pub mod distinct;
pub mod filter;
pub mod into_stream;
pub mod map;
pub mod observe;
pub mod prelude;
pub mod skip;
pub mod switch_to_latest;

pub use self::distinct::{Distinct, DistinctBy, DistinctExt};
pub use self::filter::{Filter, FilterExt};
pub use self::into_stream::{IntoStreamExt, ObservableStream};
pub use self::map::{FilterMap, Map, MapExt};
pub use self::observe::{ObserveExt, ResultExt};
pub use self::skip::{Skip, SkipExt};
pub use self::switch_to_latest::{SwitchToLatest, SwitchToLatestExt};
