// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event system for dispatch outcomes.
//!
//! The dispatcher publishes a [`DispatchEvent`] for every dispatch it
//! processes. The [`EventBus`] uses tokio's broadcast channel, so any number
//! of in-process observers (an analytics consumer, a UI) can subscribe.
//! Publishing never blocks and never fails a dispatch.
//!
//! # Examples
//!
//! ```
//! use homecmd::event::{CommandId, DispatchEvent, EventBus};
//!
//! let bus = EventBus::new();
//! let mut rx = bus.subscribe();
//!
//! bus.publish(DispatchEvent::rejected(CommandId::new(), "lamp-1", "device not found"));
//! ```

mod command_id;
mod dispatch_event;
mod event_bus;

pub use command_id::CommandId;
pub use dispatch_event::DispatchEvent;
pub use event_bus::{DEFAULT_CHANNEL_CAPACITY, EventBus};
