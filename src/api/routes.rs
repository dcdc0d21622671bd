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


use axum::routing::{get, post};
use axum::Router;

use super::handlers::{self, SharedState};

/// Attach every cluster route to `router`.
pub fn register(router: Router<SharedState>) -> Router<SharedState> {
    router
        .route("/gluster/peer/add", post(handlers::peer_add))
        .route("/gluster/peer/delete", post(handlers::peer_delete))
        .route("/gluster/peer/list", get(handlers::peer_list))
        .route("/gluster/peer/status", get(handlers::peer_status))
        .route("/gluster/volume/create", post(handlers::volume_create))
        .route("/gluster/volume/start", post(handlers::volume_start))
        .route("/gluster/volume/stop", post(handlers::volume_stop))
        .route("/gluster/volume/delete", post(handlers::volume_delete))
        .route("/gluster/volume/info", post(handlers::volume_info))
        .route("/gluster/volume/status", post(handlers::volume_status))
        .route("/gluster/volume/health", post(handlers::volume_heal))
        .route("/gluster/volume/rebalance", post(handlers::volume_rebalance))
        .route("/gluster/volume/brick/add", post(handlers::brick_add))
        .route("/gluster/volume/brick/remove", post(handlers::brick_remove))
        .route("/gluster/mount/add", post(handlers::mount_add))
        .route("/gluster/mount/delete", post(handlers::mount_delete))
        .route("/gluster/mount/list", post(handlers::mount_list))
}
