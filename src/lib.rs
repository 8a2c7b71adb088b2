// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod certificates;
pub mod change_domain;
pub mod config;
pub mod constants;
pub mod countdown;
pub mod error;
pub mod kubernetes;
pub mod paths;
pub mod resources;
pub mod server;
pub mod types;
pub mod validation;

#[cfg(test)]
pub mod test_utils;
