// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub use crate::distinct::DistinctExt;
pub use crate::filter::FilterExt;
pub use crate::into_stream::IntoStreamExt;
pub use crate::map::MapExt;
pub use crate::observe::{ObserveExt, ResultExt};
pub use crate::skip::SkipExt;
pub use crate::switch_to_latest::SwitchToLatestExt;
pub use tether_core::Observable;
