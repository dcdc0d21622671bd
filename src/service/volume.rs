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
use crate::error::{Error, Result};
use crate::model::{
    RebalanceReport, RebalanceRequest, VolumeCreateRequest, VolumeInfoReport, VolumeRequest,
    VolumeStatusReport,
};
use crate::parsing::xml::decode_cli_output;

impl ClusterService {
    /// Create a volume and start it. A failed start does not fail the create.
    pub fn volume_create(&self, req: &VolumeCreateRequest) -> Envelope {
        acknowledge("volume create", self.create_volume(req))
    }

    pub fn volume_start(&self, req: &VolumeRequest) -> Envelope {
        let result = self
            .builder
            .volume_start(req)
            .and_then(|command| self.run(&command));
        acknowledge("volume start", result)
    }

    pub fn volume_stop(&self, req: &VolumeRequest) -> Envelope {
        let result = self
            .builder
            .volume_stop(req)
            .and_then(|command| self.run(&command));
        acknowledge("volume stop", result)
    }

    /// Stop (ignoring the outcome) and delete a volume.
    pub fn volume_delete(&self, req: &VolumeRequest) -> Envelope {
        acknowledge("volume delete", self.delete_volume(req))
    }

    pub fn volume_info(&self, req: &VolumeRequest) -> Envelope<VolumeInfoReport> {
        let result = self
            .builder
            .volume_info(req)
            .and_then(|command| self.run(&command))
            .and_then(|output| decode_cli_output(&output));
        respond("volume info", result)
    }

    pub fn volume_status(&self, req: &VolumeRequest) -> Envelope<VolumeStatusReport> {
        let result = self
            .builder
            .volume_status(req)
            .and_then(|command| self.run(&command))
            .and_then(|output| decode_cli_output(&output));
        respond("volume status", result)
    }

    /// Trigger a full self-heal.
    pub fn volume_heal(&self, req: &VolumeRequest) -> Envelope {
        let result = self
            .builder
            .volume_heal(req)
            .and_then(|command| self.run(&command));
        acknowledge("volume heal", result)
    }

    pub fn volume_rebalance(&self, req: &RebalanceRequest) -> Envelope<RebalanceReport> {
        respond("volume rebalance", self.rebalance(req))
    }

    fn create_volume(&self, req: &VolumeCreateRequest) -> Result<String> {
        let create = self.builder.volume_create(req)?;
        let start = self.builder.volume_start(&VolumeRequest {
            volname: req.volname.clone(),
        })?;

        let output = self.run(&create)?;
        self.run_best_effort(&start);
        Ok(output)
    }

    fn delete_volume(&self, req: &VolumeRequest) -> Result<String> {
        let stop = self.builder.volume_stop(req)?;
        let delete = self.builder.volume_delete(req)?;

        self.run_best_effort(&stop);
        self.run(&delete)
    }

    // The tool prints its XML document on failure too, so the output is
    // decoded before the exit status is looked at.
    fn rebalance(&self, req: &RebalanceRequest) -> Result<RebalanceReport> {
        let command = self.builder.volume_rebalance(req)?;
        let output = self.execute(&command)?;
        let decoded = decode_cli_output::<RebalanceReport>(&output.output);

        if output.success() {
            return decoded;
        }

        let detail = match &decoded {
            Ok(report) => report.error_detail().map(str::to_string),
            Err(_) => None,
        }
        .unwrap_or(output.output);

        Err(Error::command_failed(command.as_str(), output.status, detail))
    }
}
