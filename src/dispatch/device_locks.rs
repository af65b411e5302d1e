// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-device lock table.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::types::DeviceId;

/// Hands out one async lock per device identifier.
///
/// An entry exists only while some caller holds or waits for the lock, so
/// lookups of unknown identifiers do not grow the table.
#[derive(Debug, Default)]
pub(crate) struct DeviceLocks {
    locks: Mutex<HashMap<DeviceId, Arc<AsyncMutex<()>>>>,
}

impl DeviceLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits until no other caller holds the lock for `device_id`.
    pub async fn lock(&self, device_id: &DeviceId) -> DeviceGuard<'_> {
        let lock = {
            let mut locks = self.locks.lock();
            Arc::clone(locks.entry(device_id.clone()).or_default())
        };

        DeviceGuard {
            table: self,
            device_id: device_id.clone(),
            guard: Some(lock.lock_owned().await),
        }
    }

    /// Returns the number of devices with a held or awaited lock.
    pub fn active(&self) -> usize {
        self.locks.lock().len()
    }
}

/// Exclusive access to one device until dropped.
pub(crate) struct DeviceGuard<'a> {
    table: &'a DeviceLocks,
    device_id: DeviceId,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for DeviceGuard<'_> {
    fn drop(&mut self) {
        // Release first so the strong count only reflects the table and waiters.
        self.guard.take();

        let mut locks = self.table.locks.lock();
        if let Some(lock) = locks.get(&self.device_id)
            && Arc::strong_count(lock) == 1
        {
            locks.remove(&self.device_id);
        }
    }
}
