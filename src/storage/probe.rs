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

//! Filesystem probe trait and implementations.
//!
//! This module provides the [`FsProbe`] trait for reading live block counts
//! of a mounted filesystem and a [`StatvfsProbe`] implementation backed by
//! `statvfs(3)`.

use std::io;
use std::path::Path;
use std::sync::Arc;

use crate::model::{BlockStats, MountEntry, UsageStats};

/// Trait for reading filesystem block statistics.
///
/// Implementations must be thread-safe (`Send + Sync`) to allow
/// concurrent access from multiple request handlers.
///
/// # Example
///
/// ```rust,no_run
/// use gluster_rest::storage::{create_fs_probe, FsProbe};
///
/// let probe = create_fs_probe();
/// if let Ok(stats) = probe.stat("/mnt/gv0".as_ref()) {
///     println!("{} of {} blocks available", stats.blocks_available, stats.blocks);
/// }
/// ```
pub trait FsProbe: Send + Sync {
    /// Read the block counts of the filesystem mounted at `mount_point`.
    fn stat(&self, mount_point: &Path) -> io::Result<BlockStats>;

    /// Best-effort usage of a mount table entry; `None` when the probe fails.
    fn usage(&self, entry: &MountEntry) -> Option<UsageStats> {
        match self.stat(Path::new(&entry.mount_point)) {
            Ok(stats) => Some(UsageStats::from_block_stats(&stats)),
            Err(e) => {
                tracing::debug!(mount_point = %entry.mount_point, error = %e, "filesystem probe failed");
                None
            }
        }
    }
}

/// Probe using the `statvfs` system call.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatvfsProbe;

impl StatvfsProbe {
    pub fn new() -> Self {
        Self
    }
}

impl FsProbe for StatvfsProbe {
    #[cfg(unix)]
    #[allow(clippy::unnecessary_cast)]
    fn stat(&self, mount_point: &Path) -> io::Result<BlockStats> {
        use std::ffi::CString;
        use std::os::unix::ffi::OsStrExt;

        let c_path = CString::new(mount_point.as_os_str().as_bytes())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        // SAFETY: `c_path` is a valid NUL-terminated string and `stat` is a
        // properly sized out-parameter that lives across the call.
        let mut stat: libc::statvfs = unsafe { std::mem::zeroed() };
        let rc = unsafe { libc::statvfs(c_path.as_ptr(), &mut stat) };
        if rc != 0 {
            return Err(io::Error::last_os_error());
        }

        Ok(BlockStats {
            blocks: stat.f_blocks as u64,
            blocks_free: stat.f_bfree as u64,
            blocks_available: stat.f_bavail as u64,
            block_size: stat.f_frsize as u64,
        })
    }

    #[cfg(not(unix))]
    fn stat(&self, _mount_point: &Path) -> io::Result<BlockStats> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "filesystem statistics are only available on unix",
        ))
    }
}

/// Create the probe for the current platform.
pub fn create_fs_probe() -> Arc<dyn FsProbe> {
    Arc::new(StatvfsProbe::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProbe(io::Result<BlockStats>);

    impl FsProbe for FixedProbe {
        fn stat(&self, _mount_point: &Path) -> io::Result<BlockStats> {
            match &self.0 {
                Ok(stats) => Ok(*stats),
                Err(e) => Err(io::Error::new(e.kind(), e.to_string())),
            }
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_statvfs_on_temp_dir() {
        let dir = tempfile::tempdir().unwrap();
        let stats = StatvfsProbe::new().stat(dir.path()).unwrap();
        assert!(stats.block_size > 0);
        assert!(stats.blocks_available <= stats.blocks);
    }

    #[test]
    fn test_statvfs_missing_path() {
        let result = StatvfsProbe::new().stat(Path::new("/nonexistent/gluster/mount"));
        assert!(result.is_err());
    }

    #[test]
    fn test_usage_from_probe() {
        let probe = FixedProbe(Ok(BlockStats {
            blocks: 100,
            blocks_free: 90,
            blocks_available: 80,
            block_size: 1,
        }));
        let entry = MountEntry {
            mount_point: "/mnt/gv0".to_string(),
            ..Default::default()
        };
        let usage = probe.usage(&entry).unwrap();
        assert_eq!(usage.used, 20);
        assert_eq!(usage.use_percent, 20.0);
    }

    #[test]
    fn test_usage_is_none_when_probe_fails() {
        let probe = FixedProbe(Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "denied",
        )));
        assert!(probe.usage(&MountEntry::default()).is_none());
    }
}
