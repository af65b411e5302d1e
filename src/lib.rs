// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `homecmd` - Command dispatch core for smart-home device control.
//!
//! This library turns control intents ("switch `lamp-1` on") into device
//! status changes and an audit trail of accepted commands.
//!
//! # Components
//!
//! - **Device registry**: current status of every device ([`registry`])
//! - **Usage log**: append-only record of accepted commands ([`usage`])
//! - **State updater**: applies one transition, registry first, then log
//! - **Command dispatcher**: validates intents and reports results ([`dispatch`])
//! - **Request adapter**: JSON in, JSON out ([`request`])
//!
//! Storage backends are injected as trait objects; the crate ships
//! in-memory implementations.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//!
//! use homecmd::{CommandDispatcher, CommandIntent, Device, DeviceId, PowerStatus};
//! use homecmd::registry::MemoryRegistry;
//! use homecmd::usage::{MemoryUsageLog, UsageLog};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = Arc::new(MemoryRegistry::new());
//! registry
//!     .register(Device::new(DeviceId::new("lamp-1")?, "Desk lamp", PowerStatus::Off))
//!     .await?;
//! let usage_log = Arc::new(MemoryUsageLog::new());
//!
//! let dispatcher = CommandDispatcher::builder()
//!     .with_registry(registry)
//!     .with_usage_log(usage_log.clone())
//!     .build()?;
//!
//! let state = dispatcher.dispatch(&CommandIntent::new("lamp-1", "TURN_ON")).await?;
//! assert_eq!(state.status, PowerStatus::On);
//!
//! // Repeating the command keeps the status but is logged again
//! dispatcher.dispatch(&CommandIntent::new("lamp-1", "TURN_ON")).await?;
//! assert_eq!(usage_log.entries().await?.len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Dispatch failures are reported as [`DispatchError`]:
//!
//! - `InvalidAction`: the action is not `TURN_ON` or `TURN_OFF`; nothing is touched
//! - `InvalidDeviceId`: the device identifier is empty after trimming
//! - `DeviceNotFound`: the device is not registered; nothing is logged
//! - `CommandFailed`: a storage backend failed; the caller may retry

pub mod clock;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod registry;
pub mod request;
pub mod state;
pub mod types;
pub mod usage;

pub use clock::{Clock, ManualClock, SystemClock};
pub use dispatch::{
    AppliedCommand, CommandDispatcher, CommandIntent, DispatcherBuilder, DispatcherConfig,
    StateUpdater,
};
pub use error::{BuildError, DispatchError, Error, Result, StorageError, ValueError};
pub use event::{CommandId, DispatchEvent, EventBus};
pub use registry::{DeviceRegistry, MemoryRegistry};
pub use state::{Device, DeviceState, StateChange};
pub use types::{Action, DeviceId, PowerStatus};
pub use usage::{MemoryUsageLog, UsageLog, UsageLogEntry, UsageReport};
