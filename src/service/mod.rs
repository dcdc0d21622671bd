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

//! Request processing: validate, build, execute, parse, assemble.
//!
//! [`ClusterService`] owns the collaborators every operation needs and holds
//! no per-request state, so one instance is shared by all handlers. Its
//! operations are blocking; the HTTP layer runs them on the blocking pool.
//! Operations are grouped by subject in the submodules.

pub mod brick;
pub mod envelope;
pub mod mount;
pub mod peer;
pub mod volume;

use std::sync::Arc;

use crate::command::{CommandBuilder, CommandExecutor, CommandLine, CommandOutput, ShellExecutor};
use crate::common::config::ServiceConfig;
use crate::error::{Error, Result};
use crate::storage::{create_fs_probe, FsProbe};

pub use envelope::{Envelope, NoPayload, Outcome};

pub struct ClusterService {
    builder: CommandBuilder,
    executor: Arc<dyn CommandExecutor>,
    probe: Arc<dyn FsProbe>,
    config: ServiceConfig,
}

impl ClusterService {
    pub fn new(
        config: ServiceConfig,
        executor: Arc<dyn CommandExecutor>,
        probe: Arc<dyn FsProbe>,
    ) -> Self {
        Self {
            builder: CommandBuilder::new(config.tool.clone()),
            executor,
            probe,
            config,
        }
    }

    /// Service running commands through the configured shell and probing
    /// the local filesystems.
    pub fn from_config(config: ServiceConfig) -> Self {
        let executor = Arc::new(ShellExecutor::new(config.shell.clone()));
        Self::new(config, executor, create_fs_probe())
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Run a command and keep its output whatever the exit status.
    fn execute(&self, command: &CommandLine) -> Result<CommandOutput> {
        tracing::info!(command = %command, "executing");
        let output = self.executor.execute(command)?;
        tracing::debug!(command = %command, status = ?output.status, output = %output.output, "command finished");
        Ok(output)
    }

    /// Run a command, failing on a non-zero exit.
    fn run(&self, command: &CommandLine) -> Result<String> {
        self.execute(command)?.into_result(command)
    }

    /// Run a command whose failure does not affect the operation.
    fn run_best_effort(&self, command: &CommandLine) {
        if let Err(e) = self.run(command) {
            tracing::warn!(command = %command, error = %e, "ignoring failed command");
        }
    }
}

/// Wrap an operation result, logging the failure class.
fn respond<T>(operation: &str, result: Result<T>) -> Envelope<T> {
    if let Err(e) = &result {
        log_failure(operation, e);
    }
    Envelope::from_result(result)
}

/// Wrap a mutating operation that echoes the tool's output on success.
fn acknowledge(operation: &str, result: Result<String>) -> Envelope {
    match result {
        Ok(output) => Envelope::acknowledged(output),
        Err(e) => {
            log_failure(operation, &e);
            Envelope::failed(&e)
        }
    }
}

fn log_failure(operation: &str, error: &Error) {
    tracing::error!(operation, kind = %error.kind(), error = %error, "operation failed");
}
