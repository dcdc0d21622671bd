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

//! The `{result, errors, ...payload}` response envelope.
//!
//! The payload's fields are flattened into the envelope object, so a peer
//! listing serializes as `{"result":"OK","hosts":[...]}`. A failed envelope
//! never carries a payload.

use serde::Serialize;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "ERROR")]
    Error,
}

/// Payload of operations that only report success or failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NoPayload {}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T = NoPayload> {
    pub result: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<String>,
    #[serde(flatten)]
    pub payload: Option<T>,
}

impl<T> Envelope<T> {
    pub fn ok(payload: T) -> Self {
        Self {
            result: Outcome::Ok,
            errors: None,
            payload: Some(payload),
        }
    }

    /// Success without a payload. Tool output, when there is any, is echoed
    /// in `errors` the way existing clients expect it.
    pub fn acknowledged(output: impl Into<String>) -> Self {
        let output = output.into();
        Self {
            result: Outcome::Ok,
            errors: (!output.is_empty()).then_some(output),
            payload: None,
        }
    }

    pub fn failed(error: &Error) -> Self {
        Self {
            result: Outcome::Error,
            errors: Some(error.to_string()),
            payload: None,
        }
    }

    pub fn from_result(result: Result<T>) -> Self {
        match result {
            Ok(payload) => Self::ok(payload),
            Err(e) => Self::failed(&e),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.result == Outcome::Ok
    }
}
