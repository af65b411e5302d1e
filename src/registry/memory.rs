// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory device registry.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::state::Device;
use crate::types::{DeviceId, PowerStatus};

use super::DeviceRegistry;

/// Device registry held in process memory.
///
/// The outer map only changes on registration. Each record sits in its own
/// cell with its own lock, so status updates on different devices never
/// contend and an update to one device is atomic.
///
/// # Examples
///
/// ```
/// use homecmd::registry::{DeviceRegistry, MemoryRegistry};
/// use homecmd::state::Device;
/// use homecmd::types::{DeviceId, PowerStatus};
///
/// # async fn example() -> Result<(), homecmd::error::StorageError> {
/// let registry = MemoryRegistry::new();
/// let id = DeviceId::new("lamp-1").unwrap();
/// registry.register(Device::new(id.clone(), "Desk lamp", PowerStatus::Off)).await?;
///
/// let device = registry.set_status(&id, PowerStatus::On).await?.unwrap();
/// assert_eq!(device.status(), PowerStatus::On);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    devices: RwLock<HashMap<DeviceId, Arc<Mutex<Device>>>>,
}

impl MemoryRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a device.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::AlreadyRegistered` if the identifier is taken.
    pub async fn register(&self, device: Device) -> Result<(), StorageError> {
        let mut devices = self.devices.write().await;
        if devices.contains_key(device.id()) {
            return Err(StorageError::AlreadyRegistered(device.id().clone()));
        }

        tracing::debug!(device_id = %device.id(), status = %device.status(), "Registering device");
        devices.insert(device.id().clone(), Arc::new(Mutex::new(device)));
        Ok(())
    }

    /// Returns the identifiers of all registered devices, sorted.
    pub async fn device_ids(&self) -> Vec<DeviceId> {
        let mut ids: Vec<_> = self.devices.read().await.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Returns the number of registered devices.
    pub async fn len(&self) -> usize {
        self.devices.read().await.len()
    }

    /// Returns `true` if no device is registered.
    pub async fn is_empty(&self) -> bool {
        self.devices.read().await.is_empty()
    }

    async fn cell(&self, device_id: &DeviceId) -> Option<Arc<Mutex<Device>>> {
        self.devices.read().await.get(device_id).map(Arc::clone)
    }
}

#[async_trait]
impl DeviceRegistry for MemoryRegistry {
    async fn get(&self, device_id: &DeviceId) -> Result<Option<Device>, StorageError> {
        Ok(self
            .cell(device_id)
            .await
            .map(|cell| cell.lock().clone()))
    }

    async fn set_status(
        &self,
        device_id: &DeviceId,
        status: PowerStatus,
    ) -> Result<Option<Device>, StorageError> {
        let Some(cell) = self.cell(device_id).await else {
            return Ok(None);
        };

        let mut device = cell.lock();
        *device = device.clone().with_status(status);
        Ok(Some(device.clone()))
    }
}
