// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command dispatcher.

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::clock::Clock;
use crate::error::{DispatchError, Error};
use crate::event::{CommandId, DispatchEvent, EventBus};
use crate::registry::DeviceRegistry;
use crate::state::DeviceState;
use crate::types::{Action, DeviceId};
use crate::usage::{UsageLog, UsageReport};

use super::{CommandIntent, DispatcherBuilder, StateUpdater};

/// Entry point for control commands.
///
/// The dispatcher validates a [`CommandIntent`], hands it to the
/// [`StateUpdater`] and maps the outcome to a [`DeviceState`] or a
/// [`DispatchError`]. It never retries; a failed dispatch is reported and
/// the caller may resubmit.
///
/// Every dispatch, successful or not, is published on the event bus.
#[derive(Debug)]
pub struct CommandDispatcher {
    updater: StateUpdater,
    event_bus: EventBus,
}

impl CommandDispatcher {
    /// Creates a dispatcher with default configuration.
    #[must_use]
    pub fn new(
        registry: Arc<dyn DeviceRegistry>,
        usage_log: Arc<dyn UsageLog>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self::from_parts(StateUpdater::new(registry, usage_log, clock), EventBus::new())
    }

    /// Returns a builder.
    #[must_use]
    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::new()
    }

    pub(crate) fn from_parts(updater: StateUpdater, event_bus: EventBus) -> Self {
        Self { updater, event_bus }
    }

    /// Subscribes to dispatch events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<DispatchEvent> {
        self.event_bus.subscribe()
    }

    /// Returns the underlying state updater.
    #[must_use]
    pub fn updater(&self) -> &StateUpdater {
        &self.updater
    }

    /// Dispatches one command.
    ///
    /// The action is validated first, so a malformed intent never reaches
    /// the registry or the usage log.
    ///
    /// # Errors
    ///
    /// - `DispatchError::InvalidAction` if the action is not `TURN_ON` or `TURN_OFF`
    /// - `DispatchError::InvalidDeviceId` if the device identifier is empty
    /// - `DispatchError::DeviceNotFound` if no such device is registered
    /// - `DispatchError::CommandFailed` if a storage collaborator failed
    pub async fn dispatch(&self, intent: &CommandIntent) -> Result<DeviceState, DispatchError> {
        let command_id = CommandId::new();
        tracing::debug!(
            %command_id,
            device_id = %intent.device_id,
            action = %intent.action,
            "Dispatching command"
        );

        let result = self.execute(command_id, intent).await;

        if let Err(err) = &result {
            tracing::warn!(
                %command_id,
                device_id = %intent.device_id,
                action = %intent.action,
                kind = err.kind(),
                error = %err,
                "Command rejected"
            );
            self.event_bus.publish(DispatchEvent::rejected(
                command_id,
                intent.device_id.clone(),
                err.to_string(),
            ));
        }

        result
    }

    async fn execute(
        &self,
        command_id: CommandId,
        intent: &CommandIntent,
    ) -> Result<DeviceState, DispatchError> {
        let action: Action = intent
            .action
            .parse()
            .map_err(|_| DispatchError::InvalidAction(intent.action.clone()))?;
        let device_id =
            DeviceId::new(&intent.device_id).map_err(|_| DispatchError::InvalidDeviceId)?;

        let applied = self.updater.apply_command(&device_id, action).await?;

        let state = DeviceState::from(&applied.device);
        self.event_bus.publish(DispatchEvent::state_changed(
            command_id,
            applied.change,
            applied.entry,
        ));
        Ok(state)
    }

    /// Aggregates the usage log per device.
    ///
    /// # Errors
    ///
    /// Returns `Error::Storage` if the usage log cannot be read.
    pub async fn usage_report(&self) -> Result<UsageReport, Error> {
        let entries = self.updater.usage_log().entries().await?;
        Ok(UsageReport::from_entries(&entries))
    }
}
