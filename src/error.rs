// Copyright 2025 Lablup Inc. and Jeongkyu Shin
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Unified error types for gluster-rest.
//!
//! Every failure a request can hit falls into one of four classes:
//! validation, execution, decode, or local I/O. The [`ErrorKind`] returned
//! by [`Error::kind`] tells them apart in logs, while the `Display` text is
//! what ends up in the `errors` field of the response envelope.

use std::fmt;

use thiserror::Error;

/// The main error type for gluster-rest operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The request was rejected before any command was built.
    ///
    /// Covers malformed JSON bodies, missing mandatory fields and
    /// options outside their enumerated set.
    #[error("{0}")]
    InvalidRequest(String),

    /// The external command ran but exited unsuccessfully.
    ///
    /// The captured output is surfaced verbatim as the error detail.
    #[error("{}", failure_detail(.output, .status))]
    CommandFailed {
        command: String,
        status: Option<i32>,
        output: String,
    },

    /// The external command could not be started at all.
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command succeeded but its output could not be decoded.
    #[error("failed to decode command output: {0}")]
    Decode(String),

    /// A local file or filesystem call failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Coarse classification used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Execution,
    Decode,
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Execution => "execution",
            ErrorKind::Decode => "decode",
            ErrorKind::Io => "io",
        };
        f.write_str(name)
    }
}

impl Error {
    pub fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidRequest(message.into())
    }

    /// Build a [`Error::CommandFailed`] from a finished process.
    pub fn command_failed(command: &str, status: Option<i32>, output: String) -> Self {
        Error::CommandFailed {
            command: command.to_string(),
            status,
            output,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidRequest(_) => ErrorKind::Validation,
            Error::CommandFailed { .. } | Error::Spawn { .. } => ErrorKind::Execution,
            Error::Decode(_) => ErrorKind::Decode,
            Error::Io(_) => ErrorKind::Io,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::InvalidRequest(value.to_string())
    }
}

impl From<quick_xml::DeError> for Error {
    fn from(value: quick_xml::DeError) -> Self {
        Error::Decode(value.to_string())
    }
}

fn failure_detail(output: &str, status: &Option<i32>) -> String {
    if !output.trim().is_empty() {
        return output.to_string();
    }
    match status {
        Some(code) => format!("command exited with status {code}"),
        None => "command terminated by signal".to_string(),
    }
}

/// A specialized Result type for gluster-rest operations.
pub type Result<T> = std::result::Result<T, Error>;
