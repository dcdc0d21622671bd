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

//! Volume reports decoded from `volume info --xml` and `volume status --xml`.
//!
//! Values are kept as the literal strings the tool printed. The outward
//! JSON names differ from the markup names, and both are carried on the
//! same field through split renames.

use serde::{Deserialize, Deserializer, Serialize};

use crate::parsing::xml::number_or_zero;

/// `volume info --xml` document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeInfoReport {
    #[serde(rename(deserialize = "volInfo", serialize = "VolInfo"))]
    pub vol_info: VolInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolInfo {
    #[serde(rename(deserialize = "volumes", serialize = "Volumes"))]
    pub volumes: Volumes,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Volumes {
    #[serde(rename(deserialize = "volume", serialize = "Volume"))]
    pub volume: Vec<Volume>,
    #[serde(
        rename(deserialize = "count", serialize = "Count"),
        deserialize_with = "number_or_zero"
    )]
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Volume {
    pub name: String,
    pub id: String,
    pub status: String,
    #[serde(rename(deserialize = "statusStr", serialize = "status_str"))]
    pub status_str: String,
    #[serde(rename = "type")]
    pub volume_type: String,
    #[serde(rename(deserialize = "typeStr", serialize = "type_str"))]
    pub type_str: String,
    #[serde(rename(deserialize = "brickCount", serialize = "brick_count"))]
    pub brick_count: String,
    #[serde(rename(deserialize = "replicaCount", serialize = "replica_count"))]
    pub replica_count: String,
    #[serde(rename(deserialize = "disperseCount", serialize = "disperse_count"))]
    pub disperse_count: String,
    #[serde(rename(deserialize = "redundancyCount", serialize = "redundancy_count"))]
    pub redundancy_count: String,
    #[serde(rename(deserialize = "transport", serialize = "transports"))]
    pub transport: String,
    /// In the order the tool listed them.
    #[serde(deserialize_with = "unwrap_bricks")]
    pub bricks: Vec<Brick>,
    #[serde(deserialize_with = "unwrap_options")]
    pub options: Vec<VolumeOption>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brick {
    #[serde(rename(deserialize = "name", serialize = "brick"))]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeOption {
    pub name: String,
    pub value: String,
}

// `<bricks><brick>..</brick></bricks>` flattened to the brick list.
fn unwrap_bricks<'de, D>(deserializer: D) -> Result<Vec<Brick>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Default, Deserialize)]
    #[serde(default)]
    struct BrickList {
        brick: Vec<Brick>,
    }

    Ok(BrickList::deserialize(deserializer)?.brick)
}

// `<options><option>..</option></options>` flattened to the option list.
fn unwrap_options<'de, D>(deserializer: D) -> Result<Vec<VolumeOption>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Default, Deserialize)]
    #[serde(default)]
    struct OptionList {
        option: Vec<VolumeOption>,
    }

    Ok(OptionList::deserialize(deserializer)?.option)
}

/// `volume status --xml` document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeStatusReport {
    #[serde(rename(deserialize = "volStatus", serialize = "vol_status"))]
    pub vol_status: VolStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolStatus {
    pub volumes: VolumesInStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumesInStatus {
    pub volume: Vec<VolumeInStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeInStatus {
    #[serde(rename(deserialize = "volName", serialize = "vol_name"))]
    pub vol_name: String,
    #[serde(rename(deserialize = "nodeCount", serialize = "node_count"))]
    pub node_count: String,
    pub node: Vec<NodeInStatus>,
}

/// A brick process or daemon line in the status report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeInStatus {
    pub hostname: String,
    pub path: String,
    #[serde(rename(deserialize = "peerid", serialize = "peer_id"))]
    pub peer_id: String,
    pub status: String,
    pub port: String,
    pub ports: Ports,
    pub pid: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ports {
    pub tcp: String,
    pub rdma: String,
}
