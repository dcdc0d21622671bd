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


use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, StatusCode};
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::handlers::SharedState;
use crate::api::routes;
use crate::cli::ApiArgs;
use crate::error::Result;
use crate::service::ClusterService;

/// Build the application router with CORS, tracing and the request deadline.
pub fn build_router(state: SharedState, request_timeout: Duration) -> Router {
    routes::register(Router::new())
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::HEAD,
                    Method::OPTIONS,
                    Method::DELETE,
                ])
                .allow_headers([
                    HeaderName::from_static("x-requested-with"),
                    CONTENT_TYPE,
                    AUTHORIZATION,
                ]),
        )
        .layer(TraceLayer::new_for_http())
}

/// Serve `router` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}

/// Run the REST server until Ctrl-C or SIGTERM.
pub async fn run_api_mode(args: &ApiArgs) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gluster_rest=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let service_config = args.service.to_config();
    let server_config = args.server_config();
    tracing::info!(
        tool = %service_config.tool,
        shell = %service_config.shell,
        mount_table = %service_config.mount_table.display(),
        "starting API mode"
    );

    let state: SharedState = Arc::new(ClusterService::from_config(service_config));
    let app = build_router(state, server_config.request_timeout);

    let address = server_config.listen_address();
    let listener = match TcpListener::bind(&address).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to bind TCP listener on {address}: {e}");
            return Err(e.into());
        }
    };
    match listener.local_addr() {
        Ok(local) => tracing::info!("API server listening on {local}"),
        Err(_) => tracing::info!("API server listening on {address}"),
    }

    if let Err(e) = serve(listener, app, shutdown_signal()).await {
        tracing::error!("TCP server error: {e}");
        return Err(e.into());
    }
    tracing::info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
