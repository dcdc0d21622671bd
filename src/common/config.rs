use std::path::PathBuf;
use std::time::Duration;

/// Application configuration constants
pub struct AppConfig;

impl AppConfig {
    // HTTP Server
    pub const DEFAULT_BIND_ADDRESS: &'static str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 7030;
    pub const REQUEST_TIMEOUT_SECS: u64 = 300;
    pub const MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024;

    // External Tool
    pub const DEFAULT_TOOL: &'static str = "gluster";
    pub const DEFAULT_SHELL: &'static str = "bash"; // here-strings (<<<) need bash

    // Mount Table
    pub const MOUNT_TABLE_PATH: &'static str = "/etc/mtab";
    pub const CLIENT_FS_TYPE: &'static str = "fuse.glusterfs";
    pub const DEFAULT_MOUNT_FS_TYPE: &'static str = "glusterfs";

    // Size Units
    pub const SIZE_KB: u64 = 1024;
    pub const SIZE_MB: u64 = 1024 * 1024;
    pub const SIZE_GB: u64 = 1024 * 1024 * 1024;
    pub const SIZE_TB: u64 = 1024 * 1024 * 1024 * 1024;
    pub const SIZE_PB: u64 = 1024 * 1024 * 1024 * 1024 * 1024;
}

/// Runtime configuration of the command/response layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Name or path of the cluster management binary.
    pub tool: String,
    /// Shell used to run each command line (`<shell> -c <line>`).
    pub shell: String,
    pub mount_table: PathBuf,
    /// Filesystem type reported by the mount table for cluster mounts.
    pub client_fs_type: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            tool: AppConfig::DEFAULT_TOOL.to_string(),
            shell: AppConfig::DEFAULT_SHELL.to_string(),
            mount_table: PathBuf::from(AppConfig::MOUNT_TABLE_PATH),
            client_fs_type: AppConfig::CLIENT_FS_TYPE.to_string(),
        }
    }
}

/// Listener settings for the HTTP front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
    pub request_timeout: Duration,
}

impl ServerConfig {
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: AppConfig::DEFAULT_BIND_ADDRESS.to_string(),
            port: AppConfig::DEFAULT_PORT,
            request_timeout: Duration::from_secs(AppConfig::REQUEST_TIMEOUT_SECS),
        }
    }
}
