// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! HTTP endpoints of the setup backend.
//!
//! - `GET /`, `GET /ping`: static greeting
//! - `GET /livenessProbe`, `GET /readinessProbe`: ping the cluster API with
//!   the service account token
//! - `POST /changeDomain`: move the cluster to a new domain with the
//!   caller's token
//! - `POST /validateDomain`: check that the API and ingress hosts of a
//!   domain resolve

use crate::change_domain::{change_domain, ChangeDomainOutcome, ChangeDomainReport};
use crate::config::Config;
use crate::constants::LIVENESS_PING_INTERVAL_SECS;
use crate::error::{Result, SetupError};
use crate::paths::{api_domain, ingress_domain};
use crate::resources::ping_api;
use crate::types::{ChangeDomainInput, ResourceSummary};
use crate::validation::{validate_input, DNS_NAME_REGEX};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use kube::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Cookie set by the OAuth login of the frontend
pub const ACCESS_TOKEN_COOKIE: &str = "k8s-access-token-cookie";

#[derive(Clone)]
pub struct AppState {
    pub client: Client,
    pub config: Arc<Config>,
    live: Arc<AtomicBool>,
}

impl AppState {
    pub fn new(client: Client, config: Config) -> Self {
        Self {
            client,
            config: Arc::new(config),
            live: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::SeqCst)
    }

    fn set_live(&self, live: bool) {
        if self.live.swap(live, Ordering::SeqCst) != live {
            warn!("Liveness set to {}", live);
        }
    }

    /// Ping the cluster API with the service account token and record the outcome
    pub async fn ping(&self) -> bool {
        let token = self.config.service_token.as_deref().unwrap_or_default();
        match ping_api(&self.client, token).await {
            Ok(()) => self.set_live(true),
            Err(e) => {
                error!(error = %e, "Cluster API ping failed");
                self.set_live(false);
            }
        }
        self.is_live()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(hello))
        .route("/ping", get(hello))
        .route("/livenessProbe", get(health_check))
        .route("/readinessProbe", get(health_check))
        .route("/changeDomain", post(change_domain_handler))
        .route("/validateDomain", post(validate_domain_handler))
        .with_state(state)
}

/// Keep the liveness flag current between health checks
pub fn start_liveness_ping(state: AppState) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(LIVENESS_PING_INTERVAL_SECS));
        loop {
            interval.tick().await;
            state.ping().await;
        }
    })
}

async fn hello() -> Json<Value> {
    Json(json!({ "message": "Hello from server!" }))
}

async fn health_check(State(state): State<AppState>) -> StatusCode {
    if state.ping().await {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Caller's token from the access token cookie, or else the bearer
/// `Authorization` header
fn request_token(headers: &HeaderMap) -> Option<String> {
    let from_cookie = headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == ACCESS_TOKEN_COOKIE)
        .map(|(_, value)| value.to_string());

    from_cookie
        .or_else(|| {
            headers
                .get(AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.strip_prefix("Bearer "))
                .map(str::to_string)
        })
        .filter(|t| !t.trim().is_empty())
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ChangeDomainResponse {
    cluster_domain: String,
    outcome: ChangeDomainOutcome,
    resources: Vec<ResourceSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<String>,
}

impl From<ChangeDomainReport> for ChangeDomainResponse {
    fn from(report: ChangeDomainReport) -> Self {
        Self {
            resources: report.summaries(),
            cluster_domain: report.cluster_domain,
            outcome: report.outcome,
            warnings: report.warnings,
        }
    }
}

async fn change_domain_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ChangeDomainResponse>> {
    debug!("ChangeDomain endpoint called");
    let token = request_token(&headers)
        .ok_or_else(|| SetupError::InvalidToken("no token in request".to_string()))?;

    let input: ChangeDomainInput = serde_json::from_slice(&body).map_err(|e| {
        error!("Failed to parse input for changeDomain: {}", e);
        SetupError::InvalidInput(e.to_string())
    })?;

    let report = change_domain(&state.client, &token, &state.config.names, &input).await?;
    info!(
        "Domain change to {} finished: {:?}, {} warning(s)",
        report.cluster_domain,
        report.outcome,
        report.warnings.len()
    );
    Ok(Json(report.into()))
}

#[derive(Deserialize, Debug)]
struct ValidateDomainInput {
    domain: Option<String>,
}

#[derive(Serialize, Debug)]
struct ValidateDomainResponse {
    result: bool,
}

/// Whether `host` resolves to at least one address
async fn resolves(host: &str) -> bool {
    match tokio::net::lookup_host((host, 443)).await {
        Ok(mut addrs) => addrs.next().is_some(),
        Err(e) => {
            debug!("Lookup of {} failed: {}", host, e);
            false
        }
    }
}

async fn validate_domain_handler(body: Bytes) -> Result<Json<ValidateDomainResponse>> {
    debug!("ValidateDomain endpoint called");
    let input: ValidateDomainInput = serde_json::from_slice(&body).map_err(|e| {
        error!("Failed to parse input for validateDomain: {}", e);
        SetupError::InvalidInput(e.to_string())
    })?;
    let domain = validate_input(&DNS_NAME_REGEX, input.domain.as_deref())
        .ok_or_else(|| SetupError::InvalidDomain(input.domain.clone().unwrap_or_default()))?;

    for host in [api_domain(domain), ingress_domain(domain)] {
        if !resolves(&host).await {
            info!("Domain {} does not resolve ({})", domain, host);
            return Ok(Json(ValidateDomainResponse { result: false }));
        }
    }
    Ok(Json(ValidateDomainResponse { result: true }))
}
