// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device registry: the current known state of every device.
//!
//! The [`DeviceRegistry`] trait is the contract the updater depends on.
//! Backends (a key-value store, a relational table) implement it;
//! [`MemoryRegistry`] is the in-process implementation.

mod memory;

pub use memory::MemoryRegistry;

use async_trait::async_trait;

use crate::error::StorageError;
use crate::state::Device;
use crate::types::{DeviceId, PowerStatus};

/// Storage contract for device records.
///
/// Both operations return `Ok(None)` when no device is registered under
/// the identifier. `Err` is reserved for backend failures.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeviceRegistry: Send + Sync {
    /// Looks up a device.
    async fn get(&self, device_id: &DeviceId) -> Result<Option<Device>, StorageError>;

    /// Replaces the status of a device and returns the updated record.
    ///
    /// The update must be atomic for the given device.
    async fn set_status(
        &self,
        device_id: &DeviceId,
        status: PowerStatus,
    ) -> Result<Option<Device>, StorageError>;
}
