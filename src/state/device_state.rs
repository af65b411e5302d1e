// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state returned to callers.

use serde::{Deserialize, Serialize};

use crate::types::{DeviceId, PowerStatus};

use super::Device;

/// Snapshot of a device after a successful dispatch.
///
/// # Examples
///
/// ```
/// use homecmd::state::{Device, DeviceState};
/// use homecmd::types::{DeviceId, PowerStatus};
///
/// let device = Device::new(DeviceId::new("fan").unwrap(), "Ceiling fan", PowerStatus::On);
/// let state = DeviceState::from(&device);
/// assert!(state.is_on());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceState {
    /// The device identifier.
    pub device_id: DeviceId,
    /// The device display name.
    pub name: String,
    /// The status after the dispatch.
    pub status: PowerStatus,
}

impl DeviceState {
    /// Returns `true` if the device is on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.status.is_on()
    }
}

impl From<&Device> for DeviceState {
    fn from(device: &Device) -> Self {
        Self {
            device_id: device.id().clone(),
            name: device.name().to_string(),
            status: device.status(),
        }
    }
}

impl From<Device> for DeviceState {
    fn from(device: Device) -> Self {
        Self::from(&device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_device() {
        let device = Device::new(DeviceId::new("lamp-1").unwrap(), "Lamp", PowerStatus::Off);
        let state = DeviceState::from(device);
        assert_eq!(state.device_id.as_str(), "lamp-1");
        assert_eq!(state.name, "Lamp");
        assert_eq!(state.status, PowerStatus::Off);
        assert!(!state.is_on());
    }

    #[test]
    fn serializes_with_device_id_key() {
        let state = DeviceState {
            device_id: DeviceId::new("lamp-1").unwrap(),
            name: "Lamp".to_string(),
            status: PowerStatus::On,
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["deviceId"], "lamp-1");
        assert_eq!(json["status"], "ON");
    }
}
