// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types with validation.
//!
//! Wire strings are decoded into these types at the boundary. Once a value
//! exists it is known to be valid, so the updater and the registry never
//! re-check it.

mod action;
mod device_id;
mod power;

pub use action::Action;
pub use device_id::DeviceId;
pub use power::PowerStatus;
