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

//! Progress reports of the long-running volume tasks: rebalance and
//! remove-brick.
//!
//! The aggregate block is copied from the tool as-is; nothing here sums the
//! per-node counters.

use serde::{Deserialize, Serialize};

use crate::parsing::xml::{is_zero, number_or_zero};

/// `volume rebalance <vol> <op> --xml` document.
///
/// Zero counters and empty strings are left out of the JSON form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RebalanceReport {
    #[serde(
        rename(deserialize = "opRet", serialize = "op_ret"),
        deserialize_with = "number_or_zero",
        skip_serializing_if = "is_zero"
    )]
    pub op_ret: i32,
    #[serde(
        rename(deserialize = "opErrno"),
        deserialize_with = "number_or_zero",
        skip_serializing
    )]
    pub op_errno: i32,
    #[serde(
        rename(deserialize = "opErrstr", serialize = "op_errstr"),
        skip_serializing_if = "String::is_empty"
    )]
    pub op_errstr: String,
    #[serde(rename(deserialize = "volRebalance", serialize = "vol_rebalance"))]
    pub vol_rebalance: VolRebalance,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolRebalance {
    #[serde(
        rename(deserialize = "task-id", serialize = "task_id"),
        skip_serializing_if = "String::is_empty"
    )]
    pub task_id: String,
    #[serde(deserialize_with = "number_or_zero", skip_serializing_if = "is_zero")]
    pub op: i32,
    #[serde(
        rename(deserialize = "nodeCount", serialize = "node_count"),
        deserialize_with = "number_or_zero",
        skip_serializing_if = "is_zero"
    )]
    pub node_count: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub node: Vec<RebalanceNode>,
    pub aggregate: RebalanceAggregate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RebalanceNode {
    #[serde(
        rename(deserialize = "nodeName", serialize = "node_name"),
        skip_serializing_if = "String::is_empty"
    )]
    pub node_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(deserialize_with = "number_or_zero", skip_serializing_if = "is_zero")]
    pub files: u64,
    #[serde(deserialize_with = "number_or_zero", skip_serializing_if = "is_zero")]
    pub size: u64,
    #[serde(deserialize_with = "number_or_zero", skip_serializing_if = "is_zero")]
    pub lookups: u64,
    #[serde(deserialize_with = "number_or_zero", skip_serializing_if = "is_zero")]
    pub failures: u64,
    #[serde(deserialize_with = "number_or_zero", skip_serializing_if = "is_zero")]
    pub skipped: u64,
    #[serde(deserialize_with = "number_or_zero", skip_serializing_if = "is_zero")]
    pub status: i32,
    #[serde(
        rename(deserialize = "statusStr", serialize = "status_str"),
        skip_serializing_if = "String::is_empty"
    )]
    pub status_str: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub runtime: String,
}

/// Cluster-wide totals as reported by the tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RebalanceAggregate {
    #[serde(deserialize_with = "number_or_zero", skip_serializing_if = "is_zero")]
    pub files: u64,
    #[serde(deserialize_with = "number_or_zero", skip_serializing_if = "is_zero")]
    pub size: u64,
    #[serde(deserialize_with = "number_or_zero", skip_serializing_if = "is_zero")]
    pub lookups: u64,
    #[serde(deserialize_with = "number_or_zero", skip_serializing_if = "is_zero")]
    pub failures: u64,
    #[serde(deserialize_with = "number_or_zero", skip_serializing_if = "is_zero")]
    pub skipped: u64,
    #[serde(deserialize_with = "number_or_zero", skip_serializing_if = "is_zero")]
    pub status: i32,
    #[serde(
        rename(deserialize = "statusStr", serialize = "status_str"),
        skip_serializing_if = "String::is_empty"
    )]
    pub status_str: String,
    /// Seconds as printed by the tool, e.g. `12.00`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub runtime: String,
}

impl RebalanceReport {
    /// Most specific failure text the document carries, if any.
    pub fn error_detail(&self) -> Option<&str> {
        let detail = self.op_errstr.trim();
        (!detail.is_empty()).then_some(detail)
    }
}

/// `volume remove-brick <vol> <bricks> status --xml` document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoveBrickStatusReport {
    #[serde(rename(deserialize = "volRemoveBrick", serialize = "volremovebrick"))]
    pub vol_remove_brick: VolRemoveBrick,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolRemoveBrick {
    #[serde(rename(deserialize = "task-id", serialize = "taskid"))]
    pub task_id: String,
    #[serde(rename(deserialize = "node", serialize = "nodes"))]
    pub nodes: Vec<RemoveBrickNode>,
    pub aggregate: RemoveBrickAggregate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoveBrickNode {
    #[serde(rename(deserialize = "nodeName", serialize = "nodename"))]
    pub node_name: String,
    pub files: String,
    pub size: String,
    pub failures: String,
    pub skipped: String,
    #[serde(rename(deserialize = "statusStr", serialize = "statusstr"))]
    pub status_str: String,
    pub runtime: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoveBrickAggregate {
    pub files: String,
    pub size: String,
    pub failures: String,
    pub skipped: String,
    #[serde(rename(deserialize = "statusStr", serialize = "statusstr"))]
    pub status_str: String,
    pub runtime: String,
}
