// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Authenticated JSON requests against the cluster API.
//!
//! Paths are relative to the cluster API URL the [`Client`] was built for.
//! Non-2xx responses surface as [`kube::Error::Api`] with the decoded
//! `Status`; nothing here retries.

use crate::error::{Result, SetupError};
use crate::paths::path_join;
use http::header::{HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use http::{Method, Request};
use kube::{Client, Resource};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};

const APPLICATION_JSON: &str = "application/json";
const JSON_PATCH: &str = "application/json-patch+json";
const MERGE_PATCH: &str = "application/merge-patch+json";

/// API path of a named object of kind `K`
pub fn resource_path<K: Resource<DynamicType = ()>>(namespace: Option<&str>, name: &str) -> String {
    path_join(&[K::url_path(&(), namespace).as_str(), name])
}

/// GET a JSON document
#[instrument(skip(client, token))]
pub async fn json_request<T: DeserializeOwned>(client: &Client, path: &str, token: &str) -> Result<T> {
    let request = build_request(Method::GET, path, token, None, Vec::new())?;
    send(client, request).await
}

/// PATCH with an ordered list of RFC 6902 operations
#[instrument(skip(client, patches, token), fields(operations = patches.0.len()))]
pub async fn json_patch<T: DeserializeOwned>(
    client: &Client,
    path: &str,
    patches: &json_patch::Patch,
    token: &str,
) -> Result<T> {
    let body = serde_json::to_vec(patches)?;
    let request = build_request(Method::PATCH, path, token, Some(JSON_PATCH), body)?;
    send(client, request).await
}

/// PATCH with an RFC 7386 merge document
#[instrument(skip(client, patch, token))]
pub async fn json_merge_patch<T: DeserializeOwned, P: Serialize>(
    client: &Client,
    path: &str,
    patch: &P,
    token: &str,
) -> Result<T> {
    let body = serde_json::to_vec(patch)?;
    let request = build_request(Method::PATCH, path, token, Some(MERGE_PATCH), body)?;
    send(client, request).await
}

/// POST a new object
#[instrument(skip(client, object, token))]
pub async fn json_post<T: DeserializeOwned, B: Serialize>(
    client: &Client,
    path: &str,
    object: &B,
    token: &str,
) -> Result<T> {
    let body = serde_json::to_vec(object)?;
    let request = build_request(Method::POST, path, token, Some(APPLICATION_JSON), body)?;
    send(client, request).await
}

async fn send<T: DeserializeOwned>(client: &Client, request: Request<Vec<u8>>) -> Result<T> {
    debug!("{} {}", request.method(), request.uri());
    Ok(client.request::<T>(request).await?)
}

fn bearer(token: &str) -> Result<HeaderValue> {
    if token.trim().is_empty() {
        return Err(SetupError::InvalidToken("token is empty".to_string()));
    }
    let mut value = HeaderValue::from_str(&format!("Bearer {}", token.trim())).map_err(|_| {
        SetupError::InvalidToken("token contains characters not allowed in a header".to_string())
    })?;
    value.set_sensitive(true);
    Ok(value)
}

fn build_request(
    method: Method,
    path: &str,
    token: &str,
    content_type: Option<&'static str>,
    body: Vec<u8>,
) -> Result<Request<Vec<u8>>> {
    let mut builder = Request::builder()
        .method(method)
        .uri(path)
        .header(ACCEPT, APPLICATION_JSON)
        .header(AUTHORIZATION, bearer(token)?);
    if let Some(content_type) = content_type {
        builder = builder.header(CONTENT_TYPE, content_type);
    }
    Ok(builder.body(body)?)
}
