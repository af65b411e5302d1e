// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Usage log: the append-only audit trail of accepted commands.
//!
//! Every accepted command produces one [`UsageLogEntry`], including commands
//! that leave the device status unchanged. Entries are never mutated or
//! removed. The log is an audit record, not the source of truth for device
//! status; that is the registry.
//!
//! # Reading the log
//!
//! [`UsageLog::entries`] returns a snapshot ordered by timestamp, with ties
//! kept in insertion order. Calling it again restarts from the beginning.
//! [`UsageReport`] aggregates a snapshot per device.

mod memory;
mod report;

pub use memory::MemoryUsageLog;
pub use report::{DeviceUsage, UsageReport};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::types::{Action, DeviceId};

/// One accepted command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageLogEntry {
    device_id: DeviceId,
    action: Action,
    timestamp: DateTime<Utc>,
}

impl UsageLogEntry {
    /// Creates an entry.
    #[must_use]
    pub fn new(device_id: DeviceId, action: Action, timestamp: DateTime<Utc>) -> Self {
        Self {
            device_id,
            action,
            timestamp,
        }
    }

    /// Returns the device the command targeted.
    #[must_use]
    pub fn device_id(&self) -> &DeviceId {
        &self.device_id
    }

    /// Returns the action taken.
    #[must_use]
    pub fn action(&self) -> Action {
        self.action
    }

    /// Returns when the command was applied.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Storage contract for the usage log.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsageLog: Send + Sync {
    /// Appends an entry.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` if the backing store is down.
    async fn append(&self, entry: UsageLogEntry) -> Result<(), StorageError>;

    /// Returns every entry, ordered by timestamp then insertion order.
    async fn entries(&self) -> Result<Vec<UsageLogEntry>, StorageError>;

    /// Returns the entries for one device, in the same order as [`entries`](Self::entries).
    async fn entries_for(&self, device_id: &DeviceId) -> Result<Vec<UsageLogEntry>, StorageError> {
        Ok(self
            .entries()
            .await?
            .into_iter()
            .filter(|entry| entry.device_id() == device_id)
            .collect())
    }
}
