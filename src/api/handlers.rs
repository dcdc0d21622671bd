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

use axum::body::{to_bytes, Body};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crate::common::config::AppConfig;
use crate::error::Error;
use crate::model::{
    AddBrickRequest, MountDeleteRequest, MountRequest, PeerRequest, RebalanceRequest,
    RemoveBrickRequest, VolumeCreateRequest, VolumeRequest,
};
use crate::service::{ClusterService, Envelope};

pub type SharedState = Arc<ClusterService>;

/// What a handler answers when the request body cannot be used.
///
/// Each operation keeps the behavior its clients already rely on, so this
/// is chosen per route rather than globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectPolicy {
    /// Unreadable or undecodable bodies get an ERROR envelope.
    Envelope,
    /// Unreadable bodies get HTTP 500; undecodable JSON an ERROR envelope.
    ServerErrorOnRead,
    /// Both get HTTP 500 with an empty body.
    ServerError,
}

async fn read_request<T: DeserializeOwned>(
    body: Body,
    policy: RejectPolicy,
) -> Result<T, Response> {
    let bytes = match to_bytes(body, AppConfig::MAX_REQUEST_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("failed to read request body: {e}");
            return Err(match policy {
                RejectPolicy::Envelope => rejected(&Error::invalid(e.to_string())),
                RejectPolicy::ServerErrorOnRead | RejectPolicy::ServerError => {
                    StatusCode::INTERNAL_SERVER_ERROR.into_response()
                }
            });
        }
    };

    serde_json::from_slice(&bytes).map_err(|e| {
        let err = Error::from(e);
        tracing::error!("failed to decode request body: {err}");
        match policy {
            RejectPolicy::ServerError => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
            RejectPolicy::Envelope | RejectPolicy::ServerErrorOnRead => rejected(&err),
        }
    })
}

fn rejected(error: &Error) -> Response {
    let envelope: Envelope = Envelope::failed(error);
    Json(envelope).into_response()
}

/// Run a service operation on the blocking pool and serialize its envelope.
async fn dispatch<T, F>(state: SharedState, operation: F) -> Response
where
    T: Serialize + Send + 'static,
    F: FnOnce(&ClusterService) -> Envelope<T> + Send + 'static,
{
    match tokio::task::spawn_blocking(move || operation(&state)).await {
        Ok(envelope) => Json(envelope).into_response(),
        Err(e) => {
            tracing::error!("operation task failed: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

macro_rules! body_handler {
    ($name:ident, $request:ty, $policy:expr, $method:ident) => {
        pub async fn $name(State(state): State<SharedState>, body: Body) -> Response {
            let req: $request = match read_request(body, $policy).await {
                Ok(req) => req,
                Err(response) => return response,
            };
            dispatch(state, move |service| service.$method(&req)).await
        }
    };
}

// peer
body_handler!(peer_add, PeerRequest, RejectPolicy::ServerErrorOnRead, peer_add);
body_handler!(peer_delete, PeerRequest, RejectPolicy::ServerErrorOnRead, peer_delete);

pub async fn peer_list(State(state): State<SharedState>) -> Response {
    dispatch(state, |service| service.peer_list()).await
}

pub async fn peer_status(State(state): State<SharedState>) -> Response {
    dispatch(state, |service| service.peer_status()).await
}

// volume
body_handler!(volume_create, VolumeCreateRequest, RejectPolicy::Envelope, volume_create);
body_handler!(volume_start, VolumeRequest, RejectPolicy::Envelope, volume_start);
body_handler!(volume_stop, VolumeRequest, RejectPolicy::Envelope, volume_stop);
body_handler!(volume_delete, VolumeRequest, RejectPolicy::Envelope, volume_delete);
body_handler!(volume_info, VolumeRequest, RejectPolicy::Envelope, volume_info);
body_handler!(volume_status, VolumeRequest, RejectPolicy::Envelope, volume_status);
body_handler!(volume_heal, VolumeRequest, RejectPolicy::Envelope, volume_heal);
body_handler!(volume_rebalance, RebalanceRequest, RejectPolicy::Envelope, volume_rebalance);

// brick
body_handler!(brick_add, AddBrickRequest, RejectPolicy::Envelope, brick_add);
body_handler!(brick_remove, RemoveBrickRequest, RejectPolicy::ServerError, brick_remove);

// mount
body_handler!(mount_add, MountRequest, RejectPolicy::Envelope, mount_add);
body_handler!(mount_delete, MountDeleteRequest, RejectPolicy::Envelope, mount_delete);

/// The body is decoded only to reject non-JSON input; its fields are unused.
pub async fn mount_list(State(state): State<SharedState>, body: Body) -> Response {
    if let Err(response) = read_request::<MountRequest>(body, RejectPolicy::Envelope).await {
        return response;
    }
    dispatch(state, |service| service.mount_list()).await
}
