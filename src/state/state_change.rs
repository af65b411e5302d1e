// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State change representation.
//!
//! Every device follows the same two-state machine:
//!
//! - `TURN_ON`: any status goes to `ON`
//! - `TURN_OFF`: any status goes to `OFF`
//!
//! There is no terminal state. A change whose previous and current status
//! are equal is a no-op at the state level, but it is still a valid,
//! accepted change.

use serde::{Deserialize, Serialize};

use crate::types::{Action, PowerStatus};

use super::Device;

/// A single transition between two statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateChange {
    /// Status before the transition.
    pub previous: PowerStatus,
    /// Status after the transition.
    pub current: PowerStatus,
}

impl StateChange {
    /// Creates a change between two statuses.
    #[must_use]
    pub const fn new(previous: PowerStatus, current: PowerStatus) -> Self {
        Self { previous, current }
    }

    /// Computes the change `action` causes on a device currently in `current`.
    #[must_use]
    pub const fn for_action(current: PowerStatus, action: Action) -> Self {
        Self::new(current, action.target_status())
    }

    /// Returns `true` if the status does not change.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.previous == self.current
    }

    /// Applies the change to a device record.
    #[must_use]
    pub fn apply_to(&self, device: Device) -> Device {
        device.with_status(self.current)
    }
}
