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

use super::{acknowledge, respond, ClusterService, Envelope};
use crate::error::Result;
use crate::model::{PeerList, PeerRequest, PeerStatusReport};
use crate::parsing::pool::{clean_hostname, parse_pool_list};
use crate::parsing::xml::decode_cli_output;

impl ClusterService {
    pub fn peer_add(&self, req: &PeerRequest) -> Envelope {
        let result = self
            .builder
            .peer_probe(req)
            .and_then(|command| self.run(&command));
        acknowledge("peer add", result)
    }

    pub fn peer_delete(&self, req: &PeerRequest) -> Envelope {
        let result = self
            .builder
            .peer_detach(req)
            .and_then(|command| self.run(&command));
        acknowledge("peer delete", result)
    }

    pub fn peer_list(&self) -> Envelope<PeerList> {
        respond("peer list", self.list_pool())
    }

    pub fn peer_status(&self) -> Envelope<PeerStatusReport> {
        let result = self
            .run(&self.builder.peer_status())
            .and_then(|output| decode_cli_output(&output));
        respond("peer status", result)
    }

    fn list_pool(&self) -> Result<PeerList> {
        let output = self.run(&self.builder.pool_list())?;
        let hosts = parse_pool_list(&output, || self.local_hostname())?;
        Ok(PeerList { hosts })
    }

    fn local_hostname(&self) -> Result<String> {
        let output = self.run(&self.builder.local_hostname())?;
        Ok(clean_hostname(&output))
    }
}
