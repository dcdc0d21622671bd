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

// Parser for the headerless `pool list` table.
//
// Each row is `UUID HOSTNAME STATE`. The first row that does not split into
// exactly three fields ends the table.

use crate::error::Result;
use crate::model::PeerInfo;

const LOCALHOST: &str = "localhost";

/// Parse pool rows, asking `resolve_local` for the real name of the
/// `localhost` row. A resolver failure fails the whole listing.
pub fn parse_pool_list<F>(output: &str, mut resolve_local: F) -> Result<Vec<PeerInfo>>
where
    F: FnMut() -> Result<String>,
{
    let mut peers = Vec::new();

    for line in output.trim().lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [uuid, hostname, state] = fields[..] else {
            break;
        };

        let peer = if hostname == LOCALHOST {
            PeerInfo {
                uuid: uuid.to_string(),
                hostname: resolve_local()?,
                state: state.to_string(),
                localhost: true,
            }
        } else {
            PeerInfo {
                uuid: uuid.to_string(),
                hostname: hostname.to_string(),
                state: state.to_string(),
                localhost: false,
            }
        };
        peers.push(peer);
    }

    Ok(peers)
}

/// Strip the first line break from `hostname` output.
pub fn clean_hostname(output: &str) -> String {
    output.replacen('\n', "", 1)
}
