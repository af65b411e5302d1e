// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Control actions accepted by the dispatcher.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

use super::PowerStatus;

/// A requested state transition.
///
/// Each action drives the device to a fixed target status regardless of
/// the current one, so there is no toggle.
///
/// # Examples
///
/// ```
/// use homecmd::types::{Action, PowerStatus};
///
/// let action: Action = "TURN_ON".parse().unwrap();
/// assert_eq!(action.target_status(), PowerStatus::On);
///
/// assert!("TOGGLE".parse::<Action>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Switch the device on.
    TurnOn,
    /// Switch the device off.
    TurnOff,
}

impl Action {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TurnOn => "TURN_ON",
            Self::TurnOff => "TURN_OFF",
        }
    }

    /// Returns the status a device ends up in after this action.
    #[must_use]
    pub const fn target_status(&self) -> PowerStatus {
        match self {
            Self::TurnOn => PowerStatus::On,
            Self::TurnOff => PowerStatus::Off,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TURN_ON" => Ok(Self::TurnOn),
            "TURN_OFF" => Ok(Self::TurnOff),
            _ => Err(ValueError::InvalidAction(s.to_string())),
        }
    }
}

impl From<PowerStatus> for Action {
    fn from(status: PowerStatus) -> Self {
        match status {
            PowerStatus::On => Self::TurnOn,
            PowerStatus::Off => Self::TurnOff,
        }
    }
}
