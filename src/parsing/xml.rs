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

//! Decoding of the tool's `--xml` output mode.
//!
//! Every document is a `<cliOutput>` root whose children map onto one of the
//! report types in [`crate::model`]. Elements the report does not name are
//! ignored, and missing elements fall back to their defaults, so a newer tool
//! that adds fields still decodes.

use std::fmt::Display;
use std::str::FromStr;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};

use crate::error::{Error, Result};

/// Decode captured tool output into a report type.
pub fn decode_cli_output<T: DeserializeOwned>(output: &str) -> Result<T> {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return Err(Error::Decode("empty output".to_string()));
    }
    Ok(quick_xml::de::from_str(trimmed)?)
}

/// Numeric element that may be empty (`<opRet/>`); empty reads as zero.
pub fn number_or_zero<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
    T::Err: Display,
{
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(T::default());
    }
    raw.parse::<T>().map_err(D::Error::custom)
}

pub fn is_zero<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}
