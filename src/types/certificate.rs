// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::{Result, SetupError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Certificate and private key. PEM once decoded; custom certificates
/// arrive base64-encoded from the wizard.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TlsCertificate {
    #[serde(rename = "tls.crt")]
    pub tls_crt: String,
    #[serde(rename = "tls.key")]
    pub tls_key: String,

    /// File names the certificate was uploaded from, kept for display
    #[serde(rename = "tls.crt.filename", skip_serializing_if = "Option::is_none")]
    pub tls_crt_filename: Option<String>,
    #[serde(rename = "tls.key.filename", skip_serializing_if = "Option::is_none")]
    pub tls_key_filename: Option<String>,
}

impl TlsCertificate {
    pub fn new(tls_crt: impl Into<String>, tls_key: impl Into<String>) -> Self {
        Self {
            tls_crt: tls_crt.into(),
            tls_key: tls_key.into(),
            tls_crt_filename: None,
            tls_key_filename: None,
        }
    }

    /// Whether both the certificate and the key were provided
    pub fn is_complete(&self) -> bool {
        !self.tls_crt.trim().is_empty() && !self.tls_key.trim().is_empty()
    }

    /// Decode a certificate uploaded by the wizard into its PEM form
    pub fn decode_base64(&self) -> Result<TlsCertificate> {
        Ok(TlsCertificate {
            tls_crt: decode_pem("tls.crt", &self.tls_crt)?,
            tls_key: decode_pem("tls.key", &self.tls_key)?,
            tls_crt_filename: self.tls_crt_filename.clone(),
            tls_key_filename: self.tls_key_filename.clone(),
        })
    }
}

fn decode_pem(field: &str, encoded: &str) -> Result<String> {
    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| SetupError::InvalidInput(format!("{} is not valid base64: {}", field, e)))?;
    String::from_utf8(bytes)
        .map_err(|_| SetupError::InvalidInput(format!("{} is not a PEM document", field)))
}

impl fmt::Debug for TlsCertificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TlsCertificate")
            .field("tls_crt", &self.tls_crt)
            .field("tls_key", &"<redacted>")
            .field("tls_crt_filename", &self.tls_crt_filename)
            .field("tls_key_filename", &self.tls_key_filename)
            .finish()
    }
}

/// Request body of the domain change endpoint
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChangeDomainInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_domain: Option<String>,
    /// Base64-encoded certificates keyed by the fully qualified domain they serve
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_certs: BTreeMap<String, TlsCertificate>,
}

impl ChangeDomainInput {
    /// Custom certificates decoded to PEM. Entries missing either half are
    /// skipped; any value that does not decode fails the whole input.
    pub fn decoded_custom_certs(&self) -> Result<BTreeMap<String, TlsCertificate>> {
        self.custom_certs
            .iter()
            .filter(|(_, cert)| cert.is_complete())
            .map(|(domain, cert)| cert.decode_base64().map(|pem| (domain.clone(), pem)))
            .collect()
    }
}
