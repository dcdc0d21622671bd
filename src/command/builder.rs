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

// Command line construction for the gluster CLI and the mount helpers.
//
// Every builder validates its request first and only then formats the line,
// so a rejected request never yields a command. The exact spacing of each
// line (including doubled and trailing blanks) is what the deployed tool has
// always been fed and is kept byte-for-byte.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::model::request::{
    flag_enabled, AddBrickRequest, MountDeleteRequest, MountRequest, PeerRequest,
    RebalanceRequest, RemoveBrickRequest, VolumeCreateRequest, VolumeRequest,
};

pub const PEER_PARAMETER_INVALID: &str = "parameter is not valid";
pub const VOLUME_NAME_EMPTY: &str = "Volume Name cannot be empty";
pub const REBALANCE_OPTION_ILLEGAL: &str = "Volume Options illegal";
pub const REMOVE_BRICK_OPTION_ILLEGAL: &str = "Remove-brick options illegal";
pub const BRICK_LIST_EMPTY: &str = "Brick list cannot be empty";
pub const MOUNT_POINT_EMPTY: &str = "Mount point cannot be empty";

const SAFE_PUNCTUATION: &str = "-_./:,@=+%";
const DEFAULT_TRANSPORT: &str = "tcp";
const DEFAULT_MOUNT_FS_TYPE: &str = crate::common::config::AppConfig::DEFAULT_MOUNT_FS_TYPE;

/// A fully built shell command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine(String);

impl CommandLine {
    pub fn new(line: impl Into<String>) -> Self {
        Self(line.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sub-actions accepted by the rebalance operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebalanceAction {
    Start,
    Stop,
    Status,
}

impl RebalanceAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RebalanceAction::Start => "start",
            RebalanceAction::Stop => "stop",
            RebalanceAction::Status => "status",
        }
    }
}

impl FromStr for RebalanceAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "start" => Ok(RebalanceAction::Start),
            "stop" => Ok(RebalanceAction::Stop),
            "status" => Ok(RebalanceAction::Status),
            _ => Err(Error::invalid(REBALANCE_OPTION_ILLEGAL)),
        }
    }
}

/// Sub-actions accepted by the remove-brick operation.
///
/// `Immediate` is the empty option: the bricks are dropped right away
/// without data migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveBrickAction {
    Immediate,
    Start,
    Stop,
    Status,
    Commit,
}

impl RemoveBrickAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RemoveBrickAction::Immediate => "",
            RemoveBrickAction::Start => "start",
            RemoveBrickAction::Stop => "stop",
            RemoveBrickAction::Status => "status",
            RemoveBrickAction::Commit => "commit",
        }
    }
}

impl FromStr for RemoveBrickAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "" => Ok(RemoveBrickAction::Immediate),
            "start" => Ok(RemoveBrickAction::Start),
            "stop" => Ok(RemoveBrickAction::Stop),
            "status" => Ok(RemoveBrickAction::Status),
            "commit" => Ok(RemoveBrickAction::Commit),
            _ => Err(Error::invalid(REMOVE_BRICK_OPTION_ILLEGAL)),
        }
    }
}

/// Builds command lines for one configured management binary.
#[derive(Debug, Clone)]
pub struct CommandBuilder {
    tool: String,
}

impl CommandBuilder {
    pub fn new(tool: impl Into<String>) -> Self {
        Self { tool: tool.into() }
    }

    pub fn tool(&self) -> &str {
        &self.tool
    }

    pub fn peer_probe(&self, req: &PeerRequest) -> Result<CommandLine> {
        let host = require(&req.hostname, PEER_PARAMETER_INVALID)?;
        Ok(self.line(format!("peer probe {host} ")))
    }

    pub fn peer_detach(&self, req: &PeerRequest) -> Result<CommandLine> {
        let host = require(&req.hostname, PEER_PARAMETER_INVALID)?;
        Ok(self.line(format!("peer detach {host} <<<y")))
    }

    /// Pool listing with the header row already stripped.
    pub fn pool_list(&self) -> CommandLine {
        self.line("pool list<<<y|awk NR!=1".to_string())
    }

    pub fn peer_status(&self) -> CommandLine {
        self.line("peer status --xml".to_string())
    }

    /// Resolves the name the `localhost` pool row stands for.
    pub fn local_hostname(&self) -> CommandLine {
        CommandLine::new("hostname")
    }

    pub fn volume_create(&self, req: &VolumeCreateRequest) -> Result<CommandLine> {
        let volname = require(&req.volname, VOLUME_NAME_EMPTY)?;
        let volume_type = optional(&req.volume_type)?;
        let count = numeric(&req.count)?;
        let redundancy = match numeric(&req.redundancy)? {
            "" => String::new(),
            value => format!("redundancy {value} "),
        };
        let transport = match optional(&req.transport)? {
            "" => DEFAULT_TRANSPORT,
            value => value,
        };
        let bricks = join_bricks_reversed(&req.bricks)?;
        let force = flag_enabled(&req.force);

        let mut line = format!(
            "volume create {volname} {volume_type} {count} {redundancy}transport {transport} {bricks} {}",
            if force { "force" } else { "" }
        );
        if force {
            line.push_str(" <<<y");
        }
        Ok(self.line(line))
    }

    pub fn volume_start(&self, req: &VolumeRequest) -> Result<CommandLine> {
        let volname = require(&req.volname, VOLUME_NAME_EMPTY)?;
        Ok(self.line(format!("volume start {volname}")))
    }

    pub fn volume_stop(&self, req: &VolumeRequest) -> Result<CommandLine> {
        let volname = require(&req.volname, VOLUME_NAME_EMPTY)?;
        Ok(self.line(format!("volume stop {volname} force <<< y ")))
    }

    pub fn volume_delete(&self, req: &VolumeRequest) -> Result<CommandLine> {
        let volname = require(&req.volname, VOLUME_NAME_EMPTY)?;
        Ok(self.line(format!("volume delete {volname} <<<y")))
    }

    pub fn volume_info(&self, req: &VolumeRequest) -> Result<CommandLine> {
        let volname = require(&req.volname, VOLUME_NAME_EMPTY)?;
        Ok(self.line(format!("volume info {volname} --xml")))
    }

    pub fn volume_status(&self, req: &VolumeRequest) -> Result<CommandLine> {
        let volname = require(&req.volname, VOLUME_NAME_EMPTY)?;
        Ok(self.line(format!("volume status {volname} --xml")))
    }

    pub fn volume_heal(&self, req: &VolumeRequest) -> Result<CommandLine> {
        let volname = require(&req.volname, VOLUME_NAME_EMPTY)?;
        Ok(self.line(format!("volume heal {volname} full")))
    }

    pub fn volume_rebalance(&self, req: &RebalanceRequest) -> Result<CommandLine> {
        let volname = require(&req.volname, VOLUME_NAME_EMPTY)?;
        let action: RebalanceAction = req.options.parse()?;
        Ok(self.line(format!(
            "volume rebalance {volname} {} --xml",
            action.as_str()
        )))
    }

    pub fn add_brick(&self, req: &AddBrickRequest) -> Result<CommandLine> {
        let volname = require(&req.volname, VOLUME_NAME_EMPTY)?;
        let bricks = join_bricks_prefixed(&req.bricks)?;
        Ok(self.line(format!("volume add-brick {volname} {bricks} force<<<y")))
    }

    /// Remove-brick for every action except `status`.
    pub fn remove_brick(&self, req: &RemoveBrickRequest) -> Result<CommandLine> {
        let volname = require(&req.volname, VOLUME_NAME_EMPTY)?;
        let action: RemoveBrickAction = req.options.parse()?;
        let bricks = join_bricks_reversed(&req.bricks)?;
        Ok(self.line(format!(
            "volume remove-brick {volname} {bricks} {} force<<< y",
            action.as_str()
        )))
    }

    pub fn remove_brick_status(&self, req: &RemoveBrickRequest) -> Result<CommandLine> {
        let volname = require(&req.volname, VOLUME_NAME_EMPTY)?;
        let bricks = join_bricks_reversed(&req.bricks)?;
        Ok(self.line(format!(
            "volume remove-brick {volname} {bricks} {} --xml",
            RemoveBrickAction::Status.as_str()
        )))
    }

    pub fn make_mount_dir(&self, req: &MountRequest) -> Result<CommandLine> {
        let mount = require(&req.mount, MOUNT_POINT_EMPTY)?;
        Ok(CommandLine::new(format!("mkdir -p {mount}")))
    }

    pub fn mount(&self, req: &MountRequest) -> Result<CommandLine> {
        let mount = require(&req.mount, MOUNT_POINT_EMPTY)?;
        let volname = require(&req.volname, VOLUME_NAME_EMPTY)?;
        let fs_type = match optional(&req.fs_type)? {
            "" => DEFAULT_MOUNT_FS_TYPE,
            value => value,
        };
        Ok(CommandLine::new(format!(
            "mount -t {fs_type} localhost:{volname} {mount}"
        )))
    }

    pub fn unmount(&self, req: &MountDeleteRequest) -> Result<CommandLine> {
        let mount = require(&req.mount, MOUNT_POINT_EMPTY)?;
        if flag_enabled(&req.force) {
            Ok(CommandLine::new(format!("umount -fl {mount}")))
        } else {
            Ok(CommandLine::new(format!("umount {mount}")))
        }
    }

    pub fn remove_mount_dir(&self, req: &MountDeleteRequest) -> Result<CommandLine> {
        let mount = require(&req.mount, MOUNT_POINT_EMPTY)?;
        Ok(CommandLine::new(format!("rm -fr {mount}")))
    }

    fn line(&self, args: String) -> CommandLine {
        CommandLine(format!("{} {args}", self.tool))
    }
}

/// Validate a mandatory argument.
fn require<'a>(value: &'a str, message: &str) -> Result<&'a str> {
    if value.is_empty() {
        return Err(Error::invalid(message));
    }
    shell_safe(value)
}

/// Validate an argument that may be left empty.
fn optional(value: &str) -> Result<&str> {
    if value.is_empty() {
        return Ok(value);
    }
    shell_safe(value)
}

fn numeric(value: &str) -> Result<&str> {
    if value.chars().all(|c| c.is_ascii_digit()) {
        Ok(value)
    } else {
        Err(Error::invalid(format!("expected a number, got: {value}")))
    }
}

fn shell_safe(value: &str) -> Result<&str> {
    if value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || SAFE_PUNCTUATION.contains(c))
    {
        Ok(value)
    } else {
        Err(Error::invalid(format!(
            "parameter contains unsupported characters: {value}"
        )))
    }
}

/// Join bricks by prepending each one, yielding `"bN .. b2 b1 "`.
fn join_bricks_reversed(bricks: &[String]) -> Result<String> {
    if bricks.is_empty() {
        return Err(Error::invalid(BRICK_LIST_EMPTY));
    }
    let mut joined = String::new();
    for brick in bricks {
        let brick = require(brick, BRICK_LIST_EMPTY)?;
        joined = format!("{brick} {joined}");
    }
    Ok(joined)
}

/// Join bricks in request order, each preceded by a space.
fn join_bricks_prefixed(bricks: &[String]) -> Result<String> {
    if bricks.is_empty() {
        return Err(Error::invalid(BRICK_LIST_EMPTY));
    }
    let mut joined = String::new();
    for brick in bricks {
        let brick = require(brick, BRICK_LIST_EMPTY)?;
        joined.push(' ');
        joined.push_str(brick);
    }
    Ok(joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> CommandBuilder {
        CommandBuilder::new("gluster")
    }

    fn volume(name: &str) -> VolumeRequest {
        VolumeRequest {
            volname: name.to_string(),
        }
    }

    fn bricks(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_peer_commands() {
        let req = PeerRequest {
            hostname: "10.2.174.237".to_string(),
        };
        assert_eq!(
            builder().peer_probe(&req).unwrap().as_str(),
            "gluster peer probe 10.2.174.237 "
        );
        assert_eq!(
            builder().peer_detach(&req).unwrap().as_str(),
            "gluster peer detach 10.2.174.237 <<<y"
        );
        assert_eq!(
            builder().pool_list().as_str(),
            "gluster pool list<<<y|awk NR!=1"
        );
        assert_eq!(builder().peer_status().as_str(), "gluster peer status --xml");
    }

    #[test]
    fn test_peer_requires_hostname() {
        let err = builder().peer_probe(&PeerRequest::default()).unwrap_err();
        assert_eq!(err.to_string(), PEER_PARAMETER_INVALID);
    }

    #[test]
    fn test_volume_create_reverses_bricks() {
        let req = VolumeCreateRequest {
            volname: "gv0".to_string(),
            volume_type: "replica".to_string(),
            count: "2".to_string(),
            transport: "tcp".to_string(),
            bricks: bricks(&["n1:/data/b1", "n2:/data/b1"]),
            ..Default::default()
        };
        assert_eq!(
            builder().volume_create(&req).unwrap().as_str(),
            "gluster volume create gv0 replica 2 transport tcp n2:/data/b1 n1:/data/b1  "
        );
    }

    #[test]
    fn test_volume_create_forced_with_redundancy() {
        let req = VolumeCreateRequest {
            volname: "ec0".to_string(),
            volume_type: "disperse".to_string(),
            count: "3".to_string(),
            redundancy: "1".to_string(),
            bricks: bricks(&["a:/b", "b:/b", "c:/b"]),
            force: "true".to_string(),
            ..Default::default()
        };
        assert_eq!(
            builder().volume_create(&req).unwrap().as_str(),
            "gluster volume create ec0 disperse 3 redundancy 1 transport tcp c:/b b:/b a:/b  force <<<y"
        );
    }

    #[test]
    fn test_volume_create_force_must_be_literal_true() {
        let req = VolumeCreateRequest {
            volname: "gv0".to_string(),
            bricks: bricks(&["n1:/b"]),
            force: "yes".to_string(),
            ..Default::default()
        };
        let line = builder().volume_create(&req).unwrap();
        assert!(!line.as_str().contains("force"));
        assert!(!line.as_str().contains("<<<"));
    }

    #[test]
    fn test_volume_create_validation() {
        let err = builder()
            .volume_create(&VolumeCreateRequest {
                bricks: bricks(&["n1:/b"]),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err.to_string(), VOLUME_NAME_EMPTY);

        let err = builder()
            .volume_create(&VolumeCreateRequest {
                volname: "gv0".to_string(),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err.to_string(), BRICK_LIST_EMPTY);

        let err = builder()
            .volume_create(&VolumeCreateRequest {
                volname: "gv0".to_string(),
                count: "two".to_string(),
                bricks: bricks(&["n1:/b"]),
                ..Default::default()
            })
            .unwrap_err();
        assert!(err.to_string().contains("two"));
    }

    #[test]
    fn test_volume_lifecycle_commands() {
        let req = volume("gv0");
        let b = builder();
        assert_eq!(b.volume_start(&req).unwrap().as_str(), "gluster volume start gv0");
        assert_eq!(
            b.volume_stop(&req).unwrap().as_str(),
            "gluster volume stop gv0 force <<< y "
        );
        assert_eq!(
            b.volume_delete(&req).unwrap().as_str(),
            "gluster volume delete gv0 <<<y"
        );
        assert_eq!(
            b.volume_info(&req).unwrap().as_str(),
            "gluster volume info gv0 --xml"
        );
        assert_eq!(
            b.volume_status(&req).unwrap().as_str(),
            "gluster volume status gv0 --xml"
        );
        assert_eq!(
            b.volume_heal(&req).unwrap().as_str(),
            "gluster volume heal gv0 full"
        );
    }

    #[test]
    fn test_every_volume_operation_requires_name() {
        let b = builder();
        let empty = volume("");
        for result in [
            b.volume_start(&empty),
            b.volume_stop(&empty),
            b.volume_delete(&empty),
            b.volume_info(&empty),
            b.volume_status(&empty),
            b.volume_heal(&empty),
        ] {
            assert_eq!(result.unwrap_err().to_string(), VOLUME_NAME_EMPTY);
        }
    }

    #[test]
    fn test_rebalance_actions() {
        for action in ["start", "stop", "status"] {
            let req = RebalanceRequest {
                volname: "gv0".to_string(),
                options: action.to_string(),
            };
            assert_eq!(
                builder().volume_rebalance(&req).unwrap().as_str(),
                format!("gluster volume rebalance gv0 {action} --xml")
            );
        }

        let req = RebalanceRequest {
            volname: "gv0".to_string(),
            options: "fix-layout".to_string(),
        };
        let err = builder().volume_rebalance(&req).unwrap_err();
        assert_eq!(err.to_string(), REBALANCE_OPTION_ILLEGAL);
    }

    #[test]
    fn test_brick_commands() {
        let add = AddBrickRequest {
            volname: "gv0".to_string(),
            bricks: bricks(&["n3:/b", "n4:/b"]),
        };
        assert_eq!(
            builder().add_brick(&add).unwrap().as_str(),
            "gluster volume add-brick gv0  n3:/b n4:/b force<<<y"
        );

        let remove = RemoveBrickRequest {
            volname: "gv0".to_string(),
            bricks: bricks(&["n3:/b", "n4:/b"]),
            options: "start".to_string(),
        };
        assert_eq!(
            builder().remove_brick(&remove).unwrap().as_str(),
            "gluster volume remove-brick gv0 n4:/b n3:/b  start force<<< y"
        );
        assert_eq!(
            builder().remove_brick_status(&remove).unwrap().as_str(),
            "gluster volume remove-brick gv0 n4:/b n3:/b  status --xml"
        );
    }

    #[test]
    fn test_remove_brick_rejects_unknown_option() {
        let remove = RemoveBrickRequest {
            volname: "gv0".to_string(),
            bricks: bricks(&["n3:/b"]),
            options: "migrate".to_string(),
        };
        let err = builder().remove_brick(&remove).unwrap_err();
        assert_eq!(err.to_string(), REMOVE_BRICK_OPTION_ILLEGAL);
    }

    #[test]
    fn test_mount_commands() {
        let add = MountRequest {
            volname: "gv0".to_string(),
            fs_type: String::new(),
            mount: "/mnt/gv0".to_string(),
        };
        assert_eq!(
            builder().make_mount_dir(&add).unwrap().as_str(),
            "mkdir -p /mnt/gv0"
        );
        assert_eq!(
            builder().mount(&add).unwrap().as_str(),
            "mount -t glusterfs localhost:gv0 /mnt/gv0"
        );

        let mut delete = MountDeleteRequest {
            mount: "/mnt/gv0".to_string(),
            ..Default::default()
        };
        assert_eq!(builder().unmount(&delete).unwrap().as_str(), "umount /mnt/gv0");
        delete.force = "true".to_string();
        assert_eq!(
            builder().unmount(&delete).unwrap().as_str(),
            "umount -fl /mnt/gv0"
        );
        assert_eq!(
            builder().remove_mount_dir(&delete).unwrap().as_str(),
            "rm -fr /mnt/gv0"
        );
    }

    #[test]
    fn test_mount_delete_requires_mount_point() {
        let err = builder()
            .remove_mount_dir(&MountDeleteRequest::default())
            .unwrap_err();
        assert_eq!(err.to_string(), MOUNT_POINT_EMPTY);
    }

    #[test]
    fn test_shell_metacharacters_are_rejected() {
        for hostname in ["10.0.0.1; rm -rf /", "$(id)", "a b", "host`x`", "h|cat"] {
            let req = PeerRequest {
                hostname: hostname.to_string(),
            };
            let err = builder().peer_probe(&req).unwrap_err();
            assert!(
                err.to_string().starts_with("parameter contains unsupported characters"),
                "{hostname} should be rejected"
            );
        }
    }

    #[test]
    fn test_custom_tool_path() {
        let b = CommandBuilder::new("/usr/sbin/gluster");
        assert_eq!(b.tool(), "/usr/sbin/gluster");
        assert_eq!(b.peer_status().as_str(), "/usr/sbin/gluster peer status --xml");
    }
}
