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

// Parser for the fstab-style mount table (`/etc/mtab`, `/proc/mounts`).
//
// Each record is `SOURCE MOUNT_POINT TYPE OPTIONS DUMP PASS`. Lines that do
// not carry all six fields, or whose last two are not integers, are skipped.

use std::io::BufRead;

use crate::error::Result;
use crate::model::MountEntry;
use crate::parsing::common::parse_number;

/// Parse a single mount table line.
pub fn parse_mount_line(line: &str) -> Option<MountEntry> {
    let mut fields = line.split_whitespace();
    let source = fields.next()?;
    let mount_point = fields.next()?;
    let fs_type = fields.next()?;
    let options = fields.next()?;
    let dump_frequency = parse_number(fields.next()?)?;
    let pass_number = parse_number(fields.next()?)?;

    Some(MountEntry {
        source: source.to_string(),
        mount_point: mount_point.to_string(),
        fs_type: fs_type.to_string(),
        options: options.to_string(),
        dump_frequency,
        pass_number,
        usage: None,
    })
}

/// Scan a mount table and keep the records of one filesystem type, in
/// table order. Usage is left unset.
pub fn scan_mount_table<R: BufRead>(mut reader: R, fs_type: &str) -> Result<Vec<MountEntry>> {
    let mut entries = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        match parse_mount_line(&line) {
            Some(entry) if entry.fs_type == fs_type => entries.push(entry),
            _ => continue,
        }
    }

    Ok(entries)
}
