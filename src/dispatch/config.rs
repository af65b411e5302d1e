// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dispatcher configuration and builder.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};
use crate::error::BuildError;
use crate::event::{DEFAULT_CHANNEL_CAPACITY, EventBus};
use crate::registry::DeviceRegistry;
use crate::usage::UsageLog;

use super::{CommandDispatcher, StateUpdater};

/// Tunable settings for a [`CommandDispatcher`].
///
/// # Examples
///
/// ```
/// use homecmd::dispatch::DispatcherConfig;
///
/// let config: DispatcherConfig = serde_json::from_str(r#"{"eventCapacity": 64}"#).unwrap();
/// assert_eq!(config.event_capacity, 64);
///
/// // Missing fields fall back to defaults
/// let config: DispatcherConfig = serde_json::from_str("{}").unwrap();
/// assert_eq!(config, DispatcherConfig::default());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DispatcherConfig {
    /// Number of events buffered per subscriber before it starts lagging.
    pub event_capacity: usize,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            event_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl DispatcherConfig {
    /// Sets the event capacity.
    #[must_use]
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }
}

/// Builder for [`CommandDispatcher`].
///
/// The registry and the usage log are required. The clock defaults to
/// [`SystemClock`] and the configuration to [`DispatcherConfig::default`].
#[derive(Default)]
pub struct DispatcherBuilder {
    registry: Option<Arc<dyn DeviceRegistry>>,
    usage_log: Option<Arc<dyn UsageLog>>,
    clock: Option<Arc<dyn Clock>>,
    config: DispatcherConfig,
}

impl DispatcherBuilder {
    /// Creates a builder with nothing set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the device registry.
    #[must_use]
    pub fn with_registry(mut self, registry: Arc<dyn DeviceRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Sets the usage log.
    #[must_use]
    pub fn with_usage_log(mut self, usage_log: Arc<dyn UsageLog>) -> Self {
        self.usage_log = Some(usage_log);
        self
    }

    /// Sets the clock used to timestamp log entries.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Replaces the whole configuration.
    #[must_use]
    pub fn with_config(mut self, config: DispatcherConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the event bus capacity.
    #[must_use]
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.config.event_capacity = capacity;
        self
    }

    /// Builds the dispatcher.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::MissingRegistry` or `BuildError::MissingUsageLog`
    /// if a required collaborator was not set, and
    /// `BuildError::ZeroEventCapacity` if the event capacity is zero.
    pub fn build(self) -> Result<CommandDispatcher, BuildError> {
        let registry = self.registry.ok_or(BuildError::MissingRegistry)?;
        let usage_log = self.usage_log.ok_or(BuildError::MissingUsageLog)?;
        if self.config.event_capacity == 0 {
            return Err(BuildError::ZeroEventCapacity);
        }
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));

        tracing::debug!(event_capacity = self.config.event_capacity, "Building command dispatcher");

        Ok(CommandDispatcher::from_parts(
            StateUpdater::new(registry, usage_log, clock),
            EventBus::with_capacity(self.config.event_capacity),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::MemoryRegistry;
    use crate::usage::MemoryUsageLog;

    #[test]
    fn default_config() {
        assert_eq!(DispatcherConfig::default().event_capacity, 256);
        assert_eq!(
            DispatcherConfig::default().with_event_capacity(8).event_capacity,
            8
        );
    }

    #[test]
    fn build_requires_registry() {
        let err = DispatcherBuilder::new()
            .with_usage_log(Arc::new(MemoryUsageLog::new()))
            .build()
            .unwrap_err();
        assert_eq!(err, BuildError::MissingRegistry);
    }

    #[test]
    fn build_requires_usage_log() {
        let err = DispatcherBuilder::new()
            .with_registry(Arc::new(MemoryRegistry::new()))
            .build()
            .unwrap_err();
        assert_eq!(err, BuildError::MissingUsageLog);
    }

    #[test]
    fn build_rejects_zero_capacity() {
        let err = DispatcherBuilder::new()
            .with_registry(Arc::new(MemoryRegistry::new()))
            .with_usage_log(Arc::new(MemoryUsageLog::new()))
            .with_event_capacity(0)
            .build()
            .unwrap_err();
        assert_eq!(err, BuildError::ZeroEventCapacity);
    }

    #[test]
    fn build_with_defaults() {
        let dispatcher = DispatcherBuilder::new()
            .with_registry(Arc::new(MemoryRegistry::new()))
            .with_usage_log(Arc::new(MemoryUsageLog::new()))
            .with_config(DispatcherConfig::default())
            .build();
        assert!(dispatcher.is_ok());
    }
}
