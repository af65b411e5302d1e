// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `homecmd` library.
//!
//! This module provides the error hierarchy used across the crate: value
//! validation, storage collaborators, the state updater, and the
//! caller-visible dispatch result.

use thiserror::Error;

use crate::types::DeviceId;

/// The main error type for the state updater and its collaborators.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// A storage collaborator (registry or usage log) failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// No device is registered under the identifier.
    #[error("device not found: {0}")]
    DeviceNotFound(DeviceId),
}

/// Errors related to value validation.
///
/// These errors occur when decoding wire strings into typed values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The action string is not one of `TURN_ON`, `TURN_OFF`.
    #[error("invalid action: {0}")]
    InvalidAction(String),

    /// The status string is not one of `ON`, `OFF`.
    #[error("invalid power status: {0}")]
    InvalidPowerStatus(String),

    /// A device identifier was empty or whitespace only.
    #[error("device identifier must not be empty")]
    EmptyDeviceId,
}

/// Errors reported by the device registry or usage log backends.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The backing store could not be reached or rejected the operation.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// A device with the same identifier is already registered.
    #[error("device already registered: {0}")]
    AlreadyRegistered(DeviceId),
}

/// Caller-visible outcome of a failed dispatch.
///
/// The dispatcher collapses updater failures into these kinds: the caller
/// only needs to know whether the device was missing, the intent was
/// malformed, or the command could not be carried out.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The requested device is not registered.
    #[error("device not found: {0}")]
    DeviceNotFound(DeviceId),

    /// The action is not a recognized command.
    #[error("invalid action: {0}")]
    InvalidAction(String),

    /// The device identifier is empty.
    #[error("invalid device identifier")]
    InvalidDeviceId,

    /// The command was accepted but could not be carried out.
    #[error("command failed: {0}")]
    CommandFailed(#[source] Error),
}

impl DispatchError {
    /// Returns the stable, machine-readable kind of this error.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::DeviceNotFound(_) => "device_not_found",
            Self::InvalidAction(_) => "invalid_action",
            Self::InvalidDeviceId => "invalid_device_id",
            Self::CommandFailed(_) => "command_failed",
        }
    }
}

impl From<Error> for DispatchError {
    fn from(err: Error) -> Self {
        match err {
            Error::DeviceNotFound(id) => Self::DeviceNotFound(id),
            other => Self::CommandFailed(other),
        }
    }
}

/// Errors raised while assembling a dispatcher.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// No device registry was supplied.
    #[error("a device registry is required")]
    MissingRegistry,

    /// No usage log was supplied.
    #[error("a usage log is required")]
    MissingUsageLog,

    /// The event bus needs room for at least one event.
    #[error("event capacity must be greater than zero")]
    ZeroEventCapacity,
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::InvalidAction("TOGGLE".to_string());
        assert_eq!(err.to_string(), "invalid action: TOGGLE");
    }

    #[test]
    fn error_from_storage_error() {
        let storage = StorageError::Unavailable("disk full".to_string());
        let err: Error = storage.into();
        assert!(matches!(err, Error::Storage(StorageError::Unavailable(_))));
    }

    #[test]
    fn device_not_found_maps_to_dispatch_device_not_found() {
        let id = DeviceId::new("lamp-1").unwrap();
        let err: DispatchError = Error::DeviceNotFound(id.clone()).into();
        assert!(matches!(err, DispatchError::DeviceNotFound(ref d) if *d == id));
        assert_eq!(err.kind(), "device_not_found");
    }

    #[test]
    fn storage_failure_maps_to_command_failed() {
        let err: DispatchError =
            Error::Storage(StorageError::Unavailable("timeout".to_string())).into();
        assert!(matches!(err, DispatchError::CommandFailed(Error::Storage(_))));
        assert_eq!(
            err.to_string(),
            "command failed: storage error: storage unavailable: timeout"
        );
    }

    #[test]
    fn build_error_display() {
        assert_eq!(
            BuildError::MissingUsageLog.to_string(),
            "a usage log is required"
        );
    }
}
