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


//! The gluster-rest prelude.
//!
//! Re-exports what an embedding program needs to drive cluster operations
//! without the HTTP server:
//!
//! ```rust,no_run
//! use gluster_rest::prelude::*;
//!
//! let service = ClusterService::from_config(ServiceConfig::default());
//! let envelope = service.volume_info(&VolumeRequest {
//!     volname: "gv0".to_string(),
//! });
//! if let Some(report) = envelope.payload {
//!     for volume in &report.vol_info.volumes.volume {
//!         println!("{}: {}", volume.name, volume.status_str);
//!     }
//! }
//! ```

// Service entry point and response envelope
pub use crate::service::{ClusterService, Envelope, NoPayload, Outcome};

// Error types
pub use crate::error::{Error, ErrorKind, Result};

// Configuration
pub use crate::common::config::{AppConfig, ServerConfig, ServiceConfig};

// Command construction and execution
pub use crate::command::{
    CommandBuilder, CommandExecutor, CommandLine, CommandOutput, RebalanceAction,
    RemoveBrickAction, ShellExecutor,
};

// Filesystem probe
pub use crate::storage::{create_fs_probe, FsProbe, StatvfsProbe};

// Requests and reports
pub use crate::model::{
    AddBrickRequest, BlockStats, MountDeleteRequest, MountEntry, MountList, MountRequest,
    MountSummary, Peer, PeerInfo, PeerList, PeerRequest, PeerStatusReport, RebalanceReport,
    RebalanceRequest, RemoveBrickRequest, RemoveBrickStatusReport, UsageStats, Volume,
    VolumeCreateRequest, VolumeInfoReport, VolumeRequest, VolumeStatusReport,
};
