// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state updater.

use std::fmt;
use std::sync::Arc;

use crate::clock::Clock;
use crate::error::{Error, Result};
use crate::registry::DeviceRegistry;
use crate::state::{Device, StateChange};
use crate::types::{Action, DeviceId};
use crate::usage::{UsageLog, UsageLogEntry};

use super::device_locks::DeviceLocks;

/// Everything a successful [`StateUpdater::apply_command`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedCommand {
    /// The device record after the registry update.
    pub device: Device,
    /// Status before and after the command.
    pub change: StateChange,
    /// The entry appended to the usage log.
    pub entry: UsageLogEntry,
}

/// Applies validated transitions to single devices.
///
/// Each application runs these steps while holding the device's lock:
///
/// 1. Resolve the device in the registry, failing with
///    [`Error::DeviceNotFound`] if it is not registered.
/// 2. Compute the target status from the action.
/// 3. Write the target status to the registry, even when the device is
///    already in it.
/// 4. Append a [`UsageLogEntry`] stamped by the clock.
///
/// The registry is the source of truth. If step 4 fails, the status written
/// in step 3 stays in place and the caller gets [`Error::Storage`].
pub struct StateUpdater {
    registry: Arc<dyn DeviceRegistry>,
    usage_log: Arc<dyn UsageLog>,
    clock: Arc<dyn Clock>,
    locks: DeviceLocks,
}

impl StateUpdater {
    /// Creates an updater over the given collaborators.
    #[must_use]
    pub fn new(
        registry: Arc<dyn DeviceRegistry>,
        usage_log: Arc<dyn UsageLog>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            registry,
            usage_log,
            clock,
            locks: DeviceLocks::new(),
        }
    }

    /// Applies `action` to the device and returns the appended log entry.
    ///
    /// # Errors
    ///
    /// Returns `Error::DeviceNotFound` if the device is not registered, or
    /// `Error::Storage` if the registry or the usage log fails.
    pub async fn apply(&self, device_id: &DeviceId, action: Action) -> Result<UsageLogEntry> {
        self.apply_command(device_id, action)
            .await
            .map(|applied| applied.entry)
    }

    /// Applies `action` to the device and returns the full outcome.
    ///
    /// # Errors
    ///
    /// Same as [`apply`](Self::apply).
    pub async fn apply_command(&self, device_id: &DeviceId, action: Action) -> Result<AppliedCommand> {
        let _guard = self.locks.lock(device_id).await;

        let current = self
            .registry
            .get(device_id)
            .await?
            .ok_or_else(|| Error::DeviceNotFound(device_id.clone()))?;

        let change = StateChange::for_action(current.status(), action);
        if change.is_noop() {
            tracing::debug!(%device_id, %action, status = %change.current, "Device already in target status");
        }

        // The device can only vanish here if the backend deletes records on its own.
        let device = self
            .registry
            .set_status(device_id, change.current)
            .await?
            .ok_or_else(|| Error::DeviceNotFound(device_id.clone()))?;

        let entry = UsageLogEntry::new(device_id.clone(), action, self.clock.now());
        if let Err(err) = self.usage_log.append(entry.clone()).await {
            tracing::warn!(
                %device_id,
                %action,
                status = %device.status(),
                error = %err,
                "Status updated but usage log append failed"
            );
            return Err(err.into());
        }

        tracing::info!(
            %device_id,
            %action,
            from = %change.previous,
            to = %change.current,
            "Applied command"
        );

        Ok(AppliedCommand {
            device,
            change,
            entry,
        })
    }

    /// Returns the device registry.
    #[must_use]
    pub fn registry(&self) -> &Arc<dyn DeviceRegistry> {
        &self.registry
    }

    /// Returns the usage log.
    #[must_use]
    pub fn usage_log(&self) -> &Arc<dyn UsageLog> {
        &self.usage_log
    }
}

impl fmt::Debug for StateUpdater {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateUpdater")
            .field("clock", &self.clock)
            .field("locks", &self.locks)
            .finish_non_exhaustive()
    }
}
