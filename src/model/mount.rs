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

//! Mount table records and the usage figures attached to them.

use serde::Serialize;

use crate::parsing::common::{source_volume, block_size_to_string, round_hundredths};

/// Raw counters returned by a filesystem statistics call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockStats {
    pub blocks: u64,
    pub blocks_free: u64,
    pub blocks_available: u64,
    /// Fragment size the block counts are expressed in.
    pub block_size: u64,
}

/// Usage of one mounted filesystem, in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UsageStats {
    pub total: u64,
    pub free: u64,
    pub available: u64,
    /// `total - available`, so reserved blocks count as used.
    pub used: u64,
    /// `(1 - available / total) * 100`, rounded to two decimals.
    pub use_percent: f64,
}

impl UsageStats {
    pub fn from_block_stats(stats: &BlockStats) -> Self {
        let bs = stats.block_size;
        let use_percent = if stats.blocks == 0 {
            0.0
        } else {
            round_hundredths(
                (1.0 - stats.blocks_available as f64 / stats.blocks as f64) * 100.0,
            )
        };

        Self {
            total: stats.blocks.saturating_mul(bs),
            free: stats.blocks_free.saturating_mul(bs),
            available: stats.blocks_available.saturating_mul(bs),
            used: stats
                .blocks
                .saturating_sub(stats.blocks_available)
                .saturating_mul(bs),
            use_percent,
        }
    }
}

/// One line of the mount table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MountEntry {
    pub source: String,
    pub mount_point: String,
    pub fs_type: String,
    pub options: String,
    pub dump_frequency: i32,
    pub pass_number: i32,
    /// `None` when the statistics call failed.
    pub usage: Option<UsageStats>,
}

impl MountEntry {
    /// Total capacity in bytes, zero when no usage is known.
    pub fn capacity(&self) -> u64 {
        self.usage.map_or(0, |usage| usage.total)
    }
}

/// Outward row of the mount listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MountSummary {
    pub filesystem: String,
    #[serde(rename = "type")]
    pub fs_type: String,
    pub size: String,
    pub used: String,
    pub avail: String,
    pub use_percent: String,
    pub mount_point: String,
}

impl MountSummary {
    pub fn from_entry(entry: &MountEntry) -> Self {
        let usage = entry.usage.unwrap_or_default();
        Self {
            filesystem: source_volume(&entry.source).to_string(),
            fs_type: entry.fs_type.clone(),
            size: block_size_to_string(usage.total),
            used: block_size_to_string(usage.used),
            avail: block_size_to_string(usage.available),
            use_percent: format!("{:.1}%", usage.use_percent),
            mount_point: entry.mount_point.clone(),
        }
    }
}

/// Payload of the mount listing. `data` is always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MountList {
    pub data: Vec<MountSummary>,
}
