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

//! Inbound request bodies.
//!
//! Every field defaults to empty so that a missing key reaches validation
//! (and gets the operation's own message) instead of failing JSON decode.
//! Flags such as `force` are strings on the wire; only the literal `"true"`
//! enables them.

use serde::{Deserialize, Serialize};

/// Body of the peer probe/detach operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeerRequest {
    pub hostname: String,
}

/// Body of every operation that only names a volume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeRequest {
    pub volname: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeCreateRequest {
    pub volname: String,
    /// Layout keyword such as `replica` or `disperse`; empty for distribute.
    #[serde(rename = "type")]
    pub volume_type: String,
    pub transport: String,
    /// Replica or disperse count that follows the layout keyword.
    pub count: String,
    pub redundancy: String,
    pub bricks: Vec<String>,
    pub force: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddBrickRequest {
    pub volname: String,
    pub bricks: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoveBrickRequest {
    pub volname: String,
    pub bricks: Vec<String>,
    /// `start`, `stop`, `status`, `commit` or empty.
    pub options: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RebalanceRequest {
    pub volname: String,
    pub options: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MountRequest {
    pub volname: String,
    #[serde(rename = "type")]
    pub fs_type: String,
    pub mount: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MountDeleteRequest {
    pub volname: String,
    #[serde(rename = "type")]
    pub fs_type: String,
    pub mount: String,
    pub force: String,
}

/// Whether a wire flag is switched on.
pub fn flag_enabled(value: &str) -> bool {
    value == "true"
}
