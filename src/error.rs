// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to create cluster client: {0}")]
    ClientError(String),

    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to build request: {0}")]
    RequestError(#[from] http::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Certificate generation failed: {0}")]
    CertificateError(String),

    #[error("Unknown resource {api_version}/{kind}")]
    UnknownResource { api_version: String, kind: String },

    #[error("Resource is missing field: {0}")]
    MissingField(String),
}

impl SetupError {
    /// HTTP status code reported by the API server, if this error carries one
    pub fn api_status(&self) -> Option<u16> {
        match self {
            SetupError::KubeError(kube::Error::Api(response)) => Some(response.code),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SetupError>;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

impl IntoResponse for SetupError {
    fn into_response(self) -> Response {
        let (status, code, details) = match &self {
            SetupError::InvalidToken(_) => (StatusCode::UNAUTHORIZED, "unauthorized", json!({})),
            SetupError::InvalidDomain(domain) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                json!({ "clusterDomain": domain }),
            ),
            SetupError::InvalidInput(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "validation_error", json!({}))
            }
            // The cluster's own answer is passed through
            SetupError::KubeError(kube::Error::Api(response)) => (
                StatusCode::from_u16(response.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                "cluster_api_error",
                json!({ "reason": response.reason }),
            ),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", json!({})),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message: self.to_string(),
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}
