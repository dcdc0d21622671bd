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
use crate::command::RemoveBrickAction;
use crate::error::Result;
use crate::model::{AddBrickRequest, RemoveBrickRequest, RemoveBrickStatusReport};
use crate::parsing::xml::decode_cli_output;

impl ClusterService {
    pub fn brick_add(&self, req: &AddBrickRequest) -> Envelope {
        let result = self
            .builder
            .add_brick(req)
            .and_then(|command| self.run(&command));
        acknowledge("brick add", result)
    }

    /// Remove bricks, or report migration progress when `options` is
    /// `status`. Only the status form carries a payload.
    pub fn brick_remove(&self, req: &RemoveBrickRequest) -> Envelope<RemoveBrickStatusReport> {
        let result = req
            .options
            .parse::<RemoveBrickAction>()
            .and_then(|action| match action {
                RemoveBrickAction::Status => self.remove_brick_status(req).map(Some),
                _ => self.remove_brick(req).map(|()| None),
            });

        match result {
            Ok(Some(report)) => Envelope::ok(report),
            Ok(None) => Envelope::acknowledged(""),
            Err(e) => respond("brick remove", Err(e)),
        }
    }

    fn remove_brick(&self, req: &RemoveBrickRequest) -> Result<()> {
        let command = self.builder.remove_brick(req)?;
        self.run(&command)?;
        Ok(())
    }

    fn remove_brick_status(&self, req: &RemoveBrickRequest) -> Result<RemoveBrickStatusReport> {
        let command = self.builder.remove_brick_status(req)?;
        let output = self.run(&command)?;
        decode_cli_output(&output)
    }
}
