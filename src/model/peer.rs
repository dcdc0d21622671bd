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

use serde::{Deserialize, Serialize};

use crate::parsing::xml::number_or_zero;

/// One row of the pool listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerInfo {
    pub uuid: String,
    pub hostname: String,
    pub state: String,
    /// Set on the row the tool printed as `localhost`.
    pub localhost: bool,
}

/// Payload of the pool listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PeerList {
    pub hosts: Vec<PeerInfo>,
}

/// `peer status --xml` document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeerStatusReport {
    #[serde(rename(deserialize = "peerStatus", serialize = "peerstatus"))]
    pub peer_status: PeerStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeerStatus {
    #[serde(rename(deserialize = "peer", serialize = "peers"))]
    pub peers: Vec<Peer>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Peer {
    pub uuid: String,
    pub hostname: String,
    #[serde(deserialize_with = "number_or_zero")]
    pub connected: i32,
    #[serde(deserialize_with = "number_or_zero")]
    pub state: i32,
    #[serde(rename(deserialize = "stateStr", serialize = "status"))]
    pub state_str: String,
}
