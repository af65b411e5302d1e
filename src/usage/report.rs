// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-device aggregation of usage log entries.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::{Action, DeviceId};

use super::UsageLogEntry;

/// Command counts and activity window for one device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceUsage {
    /// Number of `TURN_ON` commands.
    pub turn_on_count: usize,
    /// Number of `TURN_OFF` commands.
    pub turn_off_count: usize,
    /// Timestamp of the earliest command.
    pub first_command: DateTime<Utc>,
    /// Timestamp of the latest command.
    pub last_command: DateTime<Utc>,
    /// Action of the latest command.
    pub last_action: Action,
}

impl DeviceUsage {
    fn start(entry: &UsageLogEntry) -> Self {
        let mut usage = Self {
            turn_on_count: 0,
            turn_off_count: 0,
            first_command: entry.timestamp(),
            last_command: entry.timestamp(),
            last_action: entry.action(),
        };
        usage.count(entry.action());
        usage
    }

    fn record(&mut self, entry: &UsageLogEntry) {
        self.count(entry.action());
        if entry.timestamp() < self.first_command {
            self.first_command = entry.timestamp();
        }
        // Ties go to the later entry, matching the log's insertion order.
        if entry.timestamp() >= self.last_command {
            self.last_command = entry.timestamp();
            self.last_action = entry.action();
        }
    }

    fn count(&mut self, action: Action) {
        match action {
            Action::TurnOn => self.turn_on_count += 1,
            Action::TurnOff => self.turn_off_count += 1,
        }
    }

    /// Returns the total number of commands for the device.
    #[must_use]
    pub fn total(&self) -> usize {
        self.turn_on_count + self.turn_off_count
    }
}

/// Usage aggregated per device, keyed in identifier order.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use homecmd::types::{Action, DeviceId};
/// use homecmd::usage::{UsageLogEntry, UsageReport};
///
/// let lamp = DeviceId::new("lamp-1").unwrap();
/// let entries = vec![
///     UsageLogEntry::new(lamp.clone(), Action::TurnOn, Utc::now()),
///     UsageLogEntry::new(lamp.clone(), Action::TurnOff, Utc::now()),
/// ];
///
/// let report = UsageReport::from_entries(&entries);
/// assert_eq!(report.device(&lamp).unwrap().total(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UsageReport {
    devices: BTreeMap<DeviceId, DeviceUsage>,
}

impl UsageReport {
    /// Builds a report from log entries.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a UsageLogEntry>) -> Self {
        let mut devices: BTreeMap<DeviceId, DeviceUsage> = BTreeMap::new();
        for entry in entries {
            match devices.get_mut(entry.device_id()) {
                Some(usage) => usage.record(entry),
                None => {
                    devices.insert(entry.device_id().clone(), DeviceUsage::start(entry));
                }
            }
        }
        Self { devices }
    }

    /// Returns the usage for one device.
    #[must_use]
    pub fn device(&self, device_id: &DeviceId) -> Option<&DeviceUsage> {
        self.devices.get(device_id)
    }

    /// Iterates over all devices with at least one command.
    pub fn devices(&self) -> impl Iterator<Item = (&DeviceId, &DeviceUsage)> {
        self.devices.iter()
    }

    /// Returns the number of commands across all devices.
    #[must_use]
    pub fn total_commands(&self) -> usize {
        self.devices.values().map(DeviceUsage::total).sum()
    }

    /// Returns `true` if the report covers no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}
