// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dispatch event types.

use serde::Serialize;

use crate::state::StateChange;
use crate::usage::UsageLogEntry;

use super::CommandId;

/// Events emitted by the command dispatcher.
///
/// # Examples
///
/// ```
/// use homecmd::event::{CommandId, DispatchEvent};
///
/// let event = DispatchEvent::rejected(CommandId::new(), "lamp-9", "device not found");
/// assert!(event.is_rejection());
/// assert_eq!(event.device_id(), "lamp-9");
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DispatchEvent {
    /// A command was applied and recorded.
    ///
    /// Emitted for no-op commands too; check [`StateChange::is_noop`].
    #[serde(rename_all = "camelCase")]
    StateChanged {
        /// The dispatch that produced the change.
        command_id: CommandId,
        /// Status before and after.
        change: StateChange,
        /// The usage log entry that was appended.
        entry: UsageLogEntry,
    },

    /// A command was rejected or failed.
    #[serde(rename_all = "camelCase")]
    CommandRejected {
        /// The dispatch that failed.
        command_id: CommandId,
        /// The device identifier as received, which may not be valid.
        device_id: String,
        /// Human-readable failure reason.
        reason: String,
    },
}

impl DispatchEvent {
    /// Creates a state changed event.
    #[must_use]
    pub fn state_changed(command_id: CommandId, change: StateChange, entry: UsageLogEntry) -> Self {
        Self::StateChanged {
            command_id,
            change,
            entry,
        }
    }

    /// Creates a rejection event.
    #[must_use]
    pub fn rejected(
        command_id: CommandId,
        device_id: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::CommandRejected {
            command_id,
            device_id: device_id.into(),
            reason: reason.into(),
        }
    }

    /// Returns the command identifier associated with this event.
    #[must_use]
    pub fn command_id(&self) -> CommandId {
        match self {
            Self::StateChanged { command_id, .. } | Self::CommandRejected { command_id, .. } => {
                *command_id
            }
        }
    }

    /// Returns the device identifier text associated with this event.
    #[must_use]
    pub fn device_id(&self) -> &str {
        match self {
            Self::StateChanged { entry, .. } => entry.device_id().as_str(),
            Self::CommandRejected { device_id, .. } => device_id,
        }
    }

    /// Returns `true` if this is a state change event.
    #[must_use]
    pub fn is_state_change(&self) -> bool {
        matches!(self, Self::StateChanged { .. })
    }

    /// Returns `true` if this is a rejection event.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::CommandRejected { .. })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::types::{Action, DeviceId, PowerStatus};

    #[test]
    fn state_changed_accessors() {
        let command_id = CommandId::new();
        let entry = UsageLogEntry::new(DeviceId::new("lamp-1").unwrap(), Action::TurnOn, Utc::now());
        let event = DispatchEvent::state_changed(
            command_id,
            StateChange::new(PowerStatus::Off, PowerStatus::On),
            entry,
        );

        assert_eq!(event.command_id(), command_id);
        assert_eq!(event.device_id(), "lamp-1");
        assert!(event.is_state_change());
        assert!(!event.is_rejection());
    }

    #[test]
    fn rejection_serializes_with_tag() {
        let event = DispatchEvent::rejected(CommandId::new(), "lamp-9", "device not found");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "commandRejected");
        assert_eq!(json["deviceId"], "lamp-9");
        assert_eq!(json["reason"], "device not found");
    }
}
