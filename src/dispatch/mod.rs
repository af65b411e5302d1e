// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command dispatch and device state updates.
//!
//! # Overview
//!
//! - [`CommandIntent`] - A device identifier and an action, as received
//! - [`CommandDispatcher`] - Validates intents and reports caller-visible results
//! - [`StateUpdater`] - Applies one transition: registry update, then log append
//! - [`DispatcherBuilder`] - Wires the dispatcher to its collaborators
//!
//! # Ordering
//!
//! Dispatches for different devices run independently. Dispatches for the
//! same device are serialized: each one performs its registry update and
//! usage log append before the next one starts. Which of several concurrent
//! callers goes first is unspecified.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use homecmd::dispatch::{CommandDispatcher, CommandIntent};
//! use homecmd::registry::MemoryRegistry;
//! use homecmd::state::Device;
//! use homecmd::types::{DeviceId, PowerStatus};
//! use homecmd::usage::MemoryUsageLog;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = Arc::new(MemoryRegistry::new());
//! registry
//!     .register(Device::new(DeviceId::new("lamp-1")?, "Desk lamp", PowerStatus::Off))
//!     .await?;
//!
//! let dispatcher = CommandDispatcher::builder()
//!     .with_registry(registry)
//!     .with_usage_log(Arc::new(MemoryUsageLog::new()))
//!     .build()?;
//!
//! let state = dispatcher.dispatch(&CommandIntent::new("lamp-1", "TURN_ON")).await?;
//! assert_eq!(state.status, PowerStatus::On);
//! # Ok(())
//! # }
//! ```

mod config;
mod device_locks;
mod dispatcher;
mod intent;
mod updater;

pub use config::{DispatcherBuilder, DispatcherConfig};
pub use dispatcher::CommandDispatcher;
pub use intent::CommandIntent;
pub use updater::{AppliedCommand, StateUpdater};
