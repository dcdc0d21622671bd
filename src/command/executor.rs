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

// Shell execution of built command lines.
//
// - One `<shell> -c <line>` child per command, no retries and no timeout
// - stdout followed by stderr, UTF-8 (lossy) decoded; lines interleaved
//   across the two streams are not kept in emission order
// - Spawn failures are errors; exit status is left to the caller

use std::process::Command;

use crate::command::builder::CommandLine;
use crate::error::{Error, Result};

/// Captured result of one finished command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the child was killed by a signal.
    pub status: Option<i32>,
    /// Combined output.
    pub output: String,
}

impl CommandOutput {
    pub fn new(status: Option<i32>, output: impl Into<String>) -> Self {
        Self {
            status,
            output: output.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// The output on a zero exit, [`Error::CommandFailed`] otherwise.
    pub fn into_result(self, command: &CommandLine) -> Result<String> {
        if self.success() {
            Ok(self.output)
        } else {
            Err(Error::command_failed(
                command.as_str(),
                self.status,
                self.output,
            ))
        }
    }
}

/// Runs command lines on behalf of the service.
///
/// Implementations must be thread-safe (`Send + Sync`); one executor is
/// shared by every request.
pub trait CommandExecutor: Send + Sync {
    /// Run `command` to completion. Only a failure to start the command is
    /// an `Err`; a non-zero exit comes back as a [`CommandOutput`].
    fn execute(&self, command: &CommandLine) -> Result<CommandOutput>;

    /// Run `command` and fail on a non-zero exit.
    fn run(&self, command: &CommandLine) -> Result<String> {
        self.execute(command)?.into_result(command)
    }
}

/// Executor that hands each line to a local shell.
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    shell: String,
}

impl ShellExecutor {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    pub fn shell(&self) -> &str {
        &self.shell
    }
}

impl CommandExecutor for ShellExecutor {
    fn execute(&self, command: &CommandLine) -> Result<CommandOutput> {
        let output = Command::new(&self.shell)
            .arg("-c")
            .arg(command.as_str())
            .output()
            .map_err(|source| Error::Spawn {
                command: command.to_string(),
                source,
            })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(CommandOutput::new(output.status.code(), combined))
    }
}
