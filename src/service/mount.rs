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

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;

use super::{acknowledge, respond, ClusterService, Envelope};
use crate::error::Result;
use crate::model::{MountDeleteRequest, MountEntry, MountList, MountRequest, MountSummary};
use crate::parsing::mtab::scan_mount_table;

impl ClusterService {
    /// Create the mount point (best effort) and mount the volume on it.
    pub fn mount_add(&self, req: &MountRequest) -> Envelope {
        acknowledge("mount add", self.mount_volume(req).map(|()| String::new()))
    }

    /// Unmount and remove the mount point directory (best effort).
    pub fn mount_delete(&self, req: &MountDeleteRequest) -> Envelope {
        acknowledge("mount delete", self.unmount_volume(req).map(|()| String::new()))
    }

    /// Cluster filesystems currently mounted on this host, with usage.
    pub fn mount_list(&self) -> Envelope<MountList> {
        respond("mount list", self.list_mounts())
    }

    fn mount_volume(&self, req: &MountRequest) -> Result<()> {
        let mkdir = self.builder.make_mount_dir(req)?;
        let mount = self.builder.mount(req)?;

        self.run_best_effort(&mkdir);
        self.run(&mount)?;
        Ok(())
    }

    fn unmount_volume(&self, req: &MountDeleteRequest) -> Result<()> {
        let umount = self.builder.unmount(req)?;
        let rmdir = self.builder.remove_mount_dir(req)?;

        self.run(&umount)?;
        self.run_best_effort(&rmdir);
        Ok(())
    }

    fn list_mounts(&self) -> Result<MountList> {
        let file = File::open(&self.config.mount_table)?;
        let entries = scan_mount_table(BufReader::new(file), &self.config.client_fs_type)?;

        // Keyed by source; a later line for the same source wins.
        let mut mounts: BTreeMap<String, MountEntry> = BTreeMap::new();
        for mut entry in entries {
            entry.usage = self.probe.usage(&entry);
            if entry.capacity() > 0 {
                mounts.insert(entry.source.clone(), entry);
            } else {
                tracing::debug!(mount_point = %entry.mount_point, "skipping mount without capacity");
            }
        }

        Ok(MountList {
            data: mounts.values().map(MountSummary::from_entry).collect(),
        })
    }
}
