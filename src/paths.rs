// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! URL path and object name utilities

use crate::constants::routes;

/// Join path segments with a single `/`.
///
/// Every segment is trimmed and stripped of surrounding slash runs, except
/// that the first segment keeps its leading slash so absolute paths stay
/// absolute. Empty segments are dropped.
pub fn path_join<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .enumerate()
        .map(|(i, part)| {
            let part = part.as_ref().trim();
            if i == 0 {
                part.trim_end_matches('/')
            } else {
                part.trim_matches('/')
            }
        })
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Name of the copy kept of a route before its host is changed
pub fn backup_route_name(name: &str) -> String {
    format!("{}-copy", name)
}

pub fn api_domain(cluster_domain: &str) -> String {
    format!("api.{}", cluster_domain)
}

pub fn ingress_domain(cluster_domain: &str) -> String {
    format!("apps.{}", cluster_domain)
}

pub fn console_domain(cluster_domain: &str) -> String {
    format!(
        "{}.{}",
        routes::CONSOLE_HOST_PREFIX,
        ingress_domain(cluster_domain)
    )
}

pub fn oauth_domain(cluster_domain: &str) -> String {
    format!("{}.{}", routes::OAUTH, ingress_domain(cluster_domain))
}

/// Host of the setup wizard itself
pub fn wizard_domain(cluster_domain: &str) -> String {
    format!("{}.{}", routes::WIZARD, ingress_domain(cluster_domain))
}

/// Inverse of [`console_domain`]
pub fn cluster_domain_from_console_host(host: &str) -> Option<&str> {
    host.strip_prefix(routes::CONSOLE_HOST_PREFIX)?
        .strip_prefix(".apps.")
        .filter(|domain| !domain.is_empty())
}
