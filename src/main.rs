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


use std::process::ExitCode;

use clap::Parser;
use gluster_rest::api::run_api_mode;
use gluster_rest::cli::{ApiArgs, Cli, Commands, MountsArgs};
use gluster_rest::service::ClusterService;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Api(args)) => serve(&args).await,
        Some(Commands::Mounts(args)) => print_mounts(&args),
        None => serve(&ApiArgs::default()).await,
    }
}

async fn serve(args: &ApiArgs) -> ExitCode {
    match run_api_mode(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_mounts(args: &MountsArgs) -> ExitCode {
    let service = ClusterService::from_config(args.service.to_config());
    let envelope = service.mount_list();

    match serde_json::to_string_pretty(&envelope) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: failed to encode mount listing: {e}");
            return ExitCode::FAILURE;
        }
    }

    if envelope.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
