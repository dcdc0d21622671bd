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


use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::common::config::{AppConfig, ServerConfig, ServiceConfig};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the REST server. (default)
    Api(ApiArgs),
    /// Print the mounted cluster volumes as JSON and exit.
    Mounts(MountsArgs),
}

/// Settings shared by every mode that talks to the cluster.
#[derive(Args, Clone, Debug)]
pub struct ServiceArgs {
    /// Name or path of the gluster binary.
    #[arg(long, default_value = AppConfig::DEFAULT_TOOL)]
    pub gluster_bin: String,
    /// Shell used to run command lines. Must understand here-strings.
    #[arg(long, default_value = AppConfig::DEFAULT_SHELL)]
    pub shell: String,
    /// Mount table to scan for cluster mounts.
    #[arg(long, default_value = AppConfig::MOUNT_TABLE_PATH)]
    pub mtab: PathBuf,
    /// Filesystem type of cluster client mounts in the mount table.
    #[arg(long, default_value = AppConfig::CLIENT_FS_TYPE)]
    pub mount_type: String,
}

impl ServiceArgs {
    pub fn to_config(&self) -> ServiceConfig {
        ServiceConfig {
            tool: self.gluster_bin.clone(),
            shell: self.shell.clone(),
            mount_table: self.mtab.clone(),
            client_fs_type: self.mount_type.clone(),
        }
    }
}

impl Default for ServiceArgs {
    fn default() -> Self {
        let config = ServiceConfig::default();
        Self {
            gluster_bin: config.tool,
            shell: config.shell,
            mtab: config.mount_table,
            mount_type: config.client_fs_type,
        }
    }
}

#[derive(Parser, Clone, Debug)]
pub struct ApiArgs {
    /// The port to listen on for the API server.
    #[arg(short, long, default_value_t = AppConfig::DEFAULT_PORT)]
    pub port: u16,
    /// The address to bind the API server to.
    #[arg(short, long, default_value = AppConfig::DEFAULT_BIND_ADDRESS)]
    pub bind: String,
    /// Request deadline in seconds.
    #[arg(short, long, default_value_t = AppConfig::REQUEST_TIMEOUT_SECS)]
    pub timeout: u64,
    #[command(flatten)]
    pub service: ServiceArgs,
}

impl ApiArgs {
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind: self.bind.clone(),
            port: self.port,
            request_timeout: Duration::from_secs(self.timeout),
        }
    }
}

// Used when no subcommand is given.
impl Default for ApiArgs {
    fn default() -> Self {
        let server = ServerConfig::default();
        Self {
            port: server.port,
            bind: server.bind,
            timeout: server.request_timeout.as_secs(),
            service: ServiceArgs::default(),
        }
    }
}

#[derive(Parser, Clone, Debug)]
pub struct MountsArgs {
    #[command(flatten)]
    pub service: ServiceArgs,
}
