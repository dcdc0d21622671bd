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


//! REST control plane for GlusterFS clusters.
//!
//! Requests are validated and turned into `gluster` command lines
//! ([`command`]), run through a shell, and the tool's XML or tabular output
//! is decoded ([`parsing`], [`model`]) into the JSON envelope returned by
//! the HTTP layer ([`api`]). [`service::ClusterService`] ties the pieces
//! together and is usable without the HTTP server.

pub mod api;
pub mod cli;
pub mod command;
pub mod error;
pub mod model;
pub mod parsing;
pub mod prelude;
pub mod service;
pub mod storage;

pub mod common {
    pub mod config;
}

pub use error::{Error, ErrorKind, Result};
