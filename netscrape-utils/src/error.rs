//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use tracing::{error, warn};

// Parser errors.
#[derive(Debug)]
pub enum Error {
    // Nothing was extracted from the command output
    EmptyOutput,
    // The extracted record doesn't conform to its schema
    SchemaMismatch(SchemaError),
    // Caller input
    MissingArgument(&'static str),
    UnknownCommand(String),
    // Device collaborator
    DeviceError(DeviceError),
}

// Schema validation errors.
#[derive(Debug)]
pub enum SchemaError {
    MissingKey(String),
    InvalidValue(String, String),
    Serialize(serde_json::Error),
}

// Device command execution errors.
#[derive(Debug)]
pub enum DeviceError {
    CommandRejected(String, String),
    Io(std::io::Error),
}

// ===== impl Error =====

impl Error {
    pub fn log(&self) {
        match self {
            Error::EmptyOutput => {
                warn!("{}", self);
            }
            Error::SchemaMismatch(error) => {
                error.log();
            }
            Error::MissingArgument(name) => {
                warn!(%name, "{}", self);
            }
            Error::UnknownCommand(command) => {
                warn!(%command, "{}", self);
            }
            Error::DeviceError(error) => {
                error.log();
            }
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyOutput => {
                write!(f, "parser output is empty")
            }
            Error::SchemaMismatch(error) => error.fmt(f),
            Error::MissingArgument(name) => {
                write!(f, "missing required argument: {name}")
            }
            Error::UnknownCommand(..) => {
                write!(f, "no parser found for command")
            }
            Error::DeviceError(error) => error.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::SchemaMismatch(error) => Some(error),
            Error::DeviceError(error) => Some(error),
            _ => None,
        }
    }
}

impl From<SchemaError> for Error {
    fn from(error: SchemaError) -> Error {
        Error::SchemaMismatch(error)
    }
}

impl From<DeviceError> for Error {
    fn from(error: DeviceError) -> Error {
        Error::DeviceError(error)
    }
}

// ===== impl SchemaError =====

impl SchemaError {
    pub(crate) fn log(&self) {
        match self {
            SchemaError::MissingKey(path) => {
                warn!(%path, "{}", self);
            }
            SchemaError::InvalidValue(path, value) => {
                warn!(%path, %value, "{}", self);
            }
            SchemaError::Serialize(error) => {
                error!(%error, "{}", self);
            }
        }
    }
}

impl std::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaError::MissingKey(path) => {
                write!(f, "schema mismatch: missing key '{path}'")
            }
            SchemaError::InvalidValue(path, _) => {
                write!(f, "schema mismatch: invalid value at '{path}'")
            }
            SchemaError::Serialize(..) => {
                write!(f, "schema mismatch: failed to serialize record")
            }
        }
    }
}

impl std::error::Error for SchemaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SchemaError::Serialize(error) => Some(error),
            _ => None,
        }
    }
}

// ===== impl DeviceError =====

impl DeviceError {
    pub(crate) fn log(&self) {
        match self {
            DeviceError::CommandRejected(command, reason) => {
                error!(%command, %reason, "{}", self);
            }
            DeviceError::Io(error) => {
                error!(%error, "{}", self);
            }
        }
    }
}

impl std::fmt::Display for DeviceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceError::CommandRejected(..) => {
                write!(f, "device rejected command")
            }
            DeviceError::Io(..) => {
                write!(f, "failed to read command output")
            }
        }
    }
}

impl std::error::Error for DeviceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeviceError::Io(error) => Some(error),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DeviceError {
    fn from(error: std::io::Error) -> DeviceError {
        DeviceError::Io(error)
    }
}
