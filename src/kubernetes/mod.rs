// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation and the JSON request primitives every resource helper goes through.

pub mod client;
pub mod request;

pub use client::create_cluster_client;
pub use request::{json_merge_patch, json_patch, json_post, json_request, resource_path};
