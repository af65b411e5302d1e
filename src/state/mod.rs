// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device records and state transitions.
//!
//! [`Device`] is the record held by the registry. [`DeviceState`] is the
//! snapshot handed back to callers after a dispatch, and [`StateChange`]
//! describes a single transition between two statuses.
//!
//! # Examples
//!
//! ```
//! use homecmd::state::{Device, StateChange};
//! use homecmd::types::{Action, DeviceId, PowerStatus};
//!
//! let device = Device::new(DeviceId::new("lamp-1").unwrap(), "Desk lamp", PowerStatus::Off);
//!
//! let change = StateChange::for_action(device.status(), Action::TurnOn);
//! assert!(!change.is_noop());
//!
//! let device = change.apply_to(device);
//! assert_eq!(device.status(), PowerStatus::On);
//! ```

mod device;
mod device_state;
mod state_change;

pub use device::Device;
pub use device_state::DeviceState;
pub use state_change::StateChange;
