// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command intent.

use serde::{Deserialize, Serialize};

use crate::types::{Action, DeviceId};

/// A request to change one device's status, as received from a caller.
///
/// Both fields hold the raw text; the dispatcher validates them. An intent
/// lives for a single dispatch and is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandIntent {
    /// Identifier of the target device.
    pub device_id: String,
    /// Requested action, `TURN_ON` or `TURN_OFF`.
    pub action: String,
}

impl CommandIntent {
    /// Creates an intent from raw text.
    #[must_use]
    pub fn new(device_id: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
            action: action.into(),
        }
    }

    /// Creates an intent from already validated values.
    #[must_use]
    pub fn typed(device_id: &DeviceId, action: Action) -> Self {
        Self::new(device_id.as_str(), action.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_uses_wire_names() {
        let intent = CommandIntent::typed(&DeviceId::new("lamp-1").unwrap(), Action::TurnOff);
        assert_eq!(intent, CommandIntent::new("lamp-1", "TURN_OFF"));
    }

    #[test]
    fn deserializes_camel_case() {
        let intent: CommandIntent =
            serde_json::from_str(r#"{"deviceId":"lamp-1","action":"TURN_ON"}"#).unwrap();
        assert_eq!(intent.device_id, "lamp-1");
        assert_eq!(intent.action, "TURN_ON");
    }
}
