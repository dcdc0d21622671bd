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

//! Request bodies and the typed results of each operation.
//!
//! Nothing in here outlives the request it was built for.

pub mod mount;
pub mod peer;
pub mod request;
pub mod task;
pub mod volume;

pub use mount::{BlockStats, MountEntry, MountList, MountSummary, UsageStats};
pub use peer::{Peer, PeerInfo, PeerList, PeerStatusReport};
pub use request::{
    AddBrickRequest, MountDeleteRequest, MountRequest, PeerRequest, RebalanceRequest,
    RemoveBrickRequest, VolumeCreateRequest, VolumeRequest,
};
pub use task::{RebalanceReport, RemoveBrickStatusReport};
pub use volume::{Volume, VolumeInfoReport, VolumeStatusReport};
