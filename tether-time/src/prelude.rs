// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub use crate::deliver_on::DeliverOnExt;
pub use crate::throttle::ThrottleExt;
pub use tether_runtime::Scheduler;
