// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory usage log.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::error::StorageError;

use super::{UsageLog, UsageLogEntry};

/// Usage log held in process memory.
///
/// Entries are stored in insertion order; reads sort a copy by timestamp
/// with a stable sort, so equal timestamps keep insertion order.
#[derive(Debug, Default)]
pub struct MemoryUsageLog {
    entries: RwLock<Vec<UsageLogEntry>>,
}

impl MemoryUsageLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty log with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(Vec::with_capacity(capacity)),
        }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns `true` if nothing has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[async_trait]
impl UsageLog for MemoryUsageLog {
    async fn append(&self, entry: UsageLogEntry) -> Result<(), StorageError> {
        self.entries.write().push(entry);
        Ok(())
    }

    async fn entries(&self) -> Result<Vec<UsageLogEntry>, StorageError> {
        let mut entries = self.entries.read().clone();
        entries.sort_by_key(UsageLogEntry::timestamp);
        Ok(entries)
    }
}
