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


//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use gluster_rest::api::{build_router, serve};
use gluster_rest::prelude::*;
use tokio::net::TcpListener;

/// Replays queued outputs in order and records every command line.
#[derive(Default)]
pub struct ScriptedExecutor {
    replies: Mutex<VecDeque<CommandOutput>>,
    seen: Mutex<Vec<String>>,
}

impl ScriptedExecutor {
    pub fn reply(&self, status: i32, output: &str) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(CommandOutput::new(Some(status), output));
        self
    }

    pub fn commands(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl CommandExecutor for ScriptedExecutor {
    fn execute(&self, command: &CommandLine) -> Result<CommandOutput> {
        self.seen.lock().unwrap().push(command.to_string());
        Ok(self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| CommandOutput::new(Some(0), "")))
    }
}

/// Every mount point reports the same block counts.
pub struct UniformProbe(pub BlockStats);

impl FsProbe for UniformProbe {
    fn stat(&self, _mount_point: &Path) -> io::Result<BlockStats> {
        Ok(self.0)
    }
}

pub fn scripted_service(config: ServiceConfig) -> (ClusterService, Arc<ScriptedExecutor>) {
    let executor = Arc::new(ScriptedExecutor::default());
    let probe = Arc::new(UniformProbe(BlockStats {
        blocks: 1000,
        blocks_free: 750,
        blocks_available: 750,
        block_size: 4096,
    }));
    let service = ClusterService::new(config, executor.clone(), probe);
    (service, executor)
}

/// Serve `service` on an ephemeral local port and return its base URL.
pub async fn spawn_server(service: ClusterService) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    let router = build_router(Arc::new(service), Duration::from_secs(10));
    tokio::spawn(serve(listener, router, std::future::pending()));
    format!("http://{address}")
}
