// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device record.

use serde::{Deserialize, Serialize};

use crate::types::{DeviceId, PowerStatus};

/// A registered device as stored by the registry.
///
/// The identifier is fixed at construction. The status can only be
/// replaced by producing a new record with [`with_status`](Self::with_status),
/// which is what registry implementations do inside `set_status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    id: DeviceId,
    name: String,
    status: PowerStatus,
}

impl Device {
    /// Creates a device record.
    #[must_use]
    pub fn new(id: DeviceId, name: impl Into<String>, status: PowerStatus) -> Self {
        Self {
            id,
            name: name.into(),
            status,
        }
    }

    /// Returns the device identifier.
    #[must_use]
    pub fn id(&self) -> &DeviceId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current status.
    #[must_use]
    pub fn status(&self) -> PowerStatus {
        self.status
    }

    /// Returns a copy of this record with the status replaced.
    #[must_use]
    pub fn with_status(mut self, status: PowerStatus) -> Self {
        self.status = status;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lamp() -> Device {
        Device::new(DeviceId::new("lamp-1").unwrap(), "Desk lamp", PowerStatus::Off)
    }

    #[test]
    fn accessors() {
        let device = lamp();
        assert_eq!(device.id().as_str(), "lamp-1");
        assert_eq!(device.name(), "Desk lamp");
        assert_eq!(device.status(), PowerStatus::Off);
    }

    #[test]
    fn with_status_keeps_identity() {
        let device = lamp().with_status(PowerStatus::On);
        assert_eq!(device.id().as_str(), "lamp-1");
        assert_eq!(device.name(), "Desk lamp");
        assert_eq!(device.status(), PowerStatus::On);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(lamp()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "lamp-1", "name": "Desk lamp", "status": "OFF" })
        );
    }
}
