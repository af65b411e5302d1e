// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON request adapter.
//!
//! This is the boundary between a request-handling layer (an HTTP handler,
//! a message consumer) and the dispatcher. It decodes an inbound command
//! into a [`CommandIntent`] and encodes the outcome into a [`CommandReply`].
//! No transport is implied; the caller moves the bytes.
//!
//! # Wire format
//!
//! Request:
//!
//! ```json
//! { "deviceId": "lamp-1", "action": "TURN_ON" }
//! ```
//!
//! Successful reply:
//!
//! ```json
//! { "status": "ok", "device": { "deviceId": "lamp-1", "name": "Desk lamp", "status": "ON" } }
//! ```
//!
//! Failed reply:
//!
//! ```json
//! { "status": "device_not_found", "message": "device not found: lamp-1" }
//! ```

use serde::{Deserialize, Serialize};

use crate::dispatch::{CommandDispatcher, CommandIntent};
use crate::error::DispatchError;
use crate::state::DeviceState;

/// Reply status for a request body that could not be decoded.
pub const BAD_REQUEST: &str = "bad_request";

/// Reply status for a successful dispatch.
pub const OK: &str = "ok";

/// Inbound command as it appears on the wire.
///
/// Missing fields decode as empty strings so that the dispatcher, not the
/// decoder, decides what is invalid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommandRequest {
    /// Target device identifier.
    pub device_id: String,
    /// Requested action.
    pub action: String,
}

impl From<CommandRequest> for CommandIntent {
    fn from(request: CommandRequest) -> Self {
        Self::new(request.device_id, request.action)
    }
}

/// Outbound reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandReply {
    /// `ok` or the error kind.
    pub status: String,
    /// Device state after a successful dispatch.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub device: Option<DeviceState>,
    /// Failure description.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
}

impl CommandReply {
    /// Creates a success reply.
    #[must_use]
    pub fn ok(device: DeviceState) -> Self {
        Self {
            status: OK.to_string(),
            device: Some(device),
            message: None,
        }
    }

    /// Creates a failure reply.
    #[must_use]
    pub fn error(status: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            device: None,
            message: Some(message.into()),
        }
    }

    /// Returns `true` if the dispatch succeeded.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == OK
    }
}

impl From<Result<DeviceState, DispatchError>> for CommandReply {
    fn from(result: Result<DeviceState, DispatchError>) -> Self {
        match result {
            Ok(state) => Self::ok(state),
            Err(err) => Self::error(err.kind(), err.to_string()),
        }
    }
}

/// Decodes a JSON request.
///
/// # Errors
///
/// Returns the `serde_json` error if the body is not a JSON object of the
/// expected shape.
pub fn decode(body: &str) -> Result<CommandIntent, serde_json::Error> {
    serde_json::from_str::<CommandRequest>(body).map(Into::into)
}

/// Encodes a reply as JSON.
#[must_use]
pub fn encode(reply: &CommandReply) -> String {
    // A struct of strings and enums always serializes
    serde_json::to_string(reply).unwrap_or_else(|_| format!(r#"{{"status":"{BAD_REQUEST}"}}"#))
}

/// Decodes a JSON request, dispatches it and encodes the reply.
pub async fn handle_json(dispatcher: &CommandDispatcher, body: &str) -> String {
    let reply = match decode(body) {
        Ok(intent) => CommandReply::from(dispatcher.dispatch(&intent).await),
        Err(err) => {
            tracing::debug!(error = %err, "Undecodable command request");
            CommandReply::error(BAD_REQUEST, err.to_string())
        }
    };
    encode(&reply)
}
