// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Serving certificates for the cluster endpoints and the TLS secrets holding them.

use crate::constants::CERTIFICATE_VALIDITY_DAYS;
use crate::error::{Result, SetupError};
use crate::resources::create_secret;
use crate::types::TlsCertificate;
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::ByteString;
use kube::{api::ObjectMeta, Client};
use rcgen::{CertificateParams, DistinguishedName, DnType, DnValue, KeyPair};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

const TLS_SECRET_TYPE: &str = "kubernetes.io/tls";

/// Generate a self-signed certificate whose CN and only SAN is `domain`
pub fn generate_certificate(domain: &str) -> Result<TlsCertificate> {
    let mut params = CertificateParams::new(vec![domain.to_string()]).map_err(|e| {
        SetupError::CertificateError(format!("invalid DNS name '{}': {}", domain, e))
    })?;

    let mut dn = DistinguishedName::new();
    dn.push(DnType::CommonName, DnValue::Utf8String(domain.to_string()));
    params.distinguished_name = dn;

    let now = time::OffsetDateTime::now_utc();
    params.not_before = now;
    params.not_after = now + time::Duration::days(CERTIFICATE_VALIDITY_DAYS);

    let key_pair = KeyPair::generate()
        .map_err(|e| SetupError::CertificateError(format!("failed to generate key: {}", e)))?;
    let cert = params.self_signed(&key_pair).map_err(|e| {
        SetupError::CertificateError(format!("failed to sign certificate: {}", e))
    })?;

    Ok(TlsCertificate::new(cert.pem(), key_pair.serialize_pem()))
}

/// A TLS secret as created, with the name the API server assigned
#[derive(Clone, Debug)]
pub struct CreatedSecret {
    pub name: String,
    pub secret: Secret,
}

/// TLS secret manifest with a server-generated name starting with
/// `name_prefix`, holding the PEM `certificate`
pub fn tls_secret(namespace: &str, name_prefix: &str, certificate: &TlsCertificate) -> Secret {
    Secret {
        metadata: ObjectMeta {
            generate_name: Some(name_prefix.to_string()),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        },
        data: Some(BTreeMap::from([
            ("tls.crt".to_string(), ByteString(certificate.tls_crt.clone().into_bytes())),
            ("tls.key".to_string(), ByteString(certificate.tls_key.clone().into_bytes())),
        ])),
        type_: Some(TLS_SECRET_TYPE.to_string()),
        ..Default::default()
    }
}

/// Create the TLS secret serving `domain`, using the PEM `custom`
/// certificate when provided and a freshly generated self-signed one
/// otherwise.
#[instrument(skip(client, token, custom))]
pub async fn create_certificate_secret(
    client: &Client,
    token: &str,
    namespace: &str,
    name_prefix: &str,
    domain: &str,
    custom: Option<&TlsCertificate>,
) -> Result<CreatedSecret> {
    let generated;
    let certificate = match custom {
        Some(certificate) => {
            debug!("Custom certificate provided for domain {}", domain);
            certificate
        }
        None => {
            generated = generate_certificate(domain)?;
            &generated
        }
    };

    let secret = create_secret(client, token, &tls_secret(namespace, name_prefix, certificate)).await?;
    let name = secret
        .metadata
        .name
        .clone()
        .ok_or_else(|| SetupError::MissingField("metadata.name of created secret".to_string()))?;
    info!("TLS secret {}/{} created for {}", namespace, name, domain);
    Ok(CreatedSecret { name, secret })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{secret_json, MockService};
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    const SECRETS: &str = "/api/v1/namespaces/openshift-config/secrets";

    #[test]
    fn test_generate_certificate_pem() {
        let cert = generate_certificate("api.example.com").unwrap();

        assert!(cert.tls_crt.starts_with("-----BEGIN CERTIFICATE-----"));
        assert!(cert.tls_key.contains("PRIVATE KEY-----"));
        assert_eq!(cert.tls_crt_filename, None);
    }

    #[test]
    fn test_generate_certificate_is_unique() {
        let a = generate_certificate("api.example.com").unwrap();
        let b = generate_certificate("api.example.com").unwrap();
        assert_ne!(a.tls_key, b.tls_key);
    }

    #[test]
    fn test_tls_secret_manifest() {
        let secret = tls_secret("openshift-config", "api-secret-", &TlsCertificate::new("C", "K"));

        assert_eq!(secret.metadata.generate_name.as_deref(), Some("api-secret-"));
        assert_eq!(secret.metadata.namespace.as_deref(), Some("openshift-config"));
        assert_eq!(secret.metadata.name, None);
        assert_eq!(secret.type_.as_deref(), Some("kubernetes.io/tls"));
        assert_eq!(secret.string_data, None);
        let data = secret.data.unwrap();
        assert_eq!(data["tls.crt"].0, b"C");
        assert_eq!(data["tls.key"].0, b"K");
    }

    #[tokio::test]
    async fn test_create_certificate_secret_uses_custom_certificate() {
        let mock = MockService::new().on_post(
            SECRETS,
            201,
            &secret_json("console-secret-abcde", "openshift-config"),
        );
        let client = mock.clone().into_client();
        let custom = TlsCertificate::new("CUSTOM-CRT", "CUSTOM-KEY");

        let created = create_certificate_secret(
            &client,
            "t",
            "openshift-config",
            "console-secret-",
            "console-openshift-console.apps.example.com",
            Some(&custom),
        )
        .await
        .unwrap();

        assert_eq!(created.name, "console-secret-abcde");
        assert_eq!(created.secret.metadata.namespace.as_deref(), Some("openshift-config"));
        let body = &mock.requests_for("POST")[0].body;
        // `data` carries base64 on the wire
        assert_eq!(body["data"]["tls.crt"], STANDARD.encode("CUSTOM-CRT"));
        assert_eq!(body["data"]["tls.key"], STANDARD.encode("CUSTOM-KEY"));
        assert!(body.get("stringData").is_none());
        assert_eq!(body["metadata"]["generateName"], "console-secret-");
    }

    #[tokio::test]
    async fn test_create_certificate_secret_generates_when_missing() {
        let mock = MockService::new().on_post(
            SECRETS,
            201,
            &secret_json("api-secret-abcde", "openshift-config"),
        );
        let client = mock.clone().into_client();

        create_certificate_secret(&client, "t", "openshift-config", "api-secret-", "api.example.com", None)
            .await
            .unwrap();

        let body = &mock.requests_for("POST")[0].body;
        let crt = STANDARD
            .decode(body["data"]["tls.crt"].as_str().unwrap())
            .unwrap();
        assert!(crt.starts_with(b"-----BEGIN CERTIFICATE-----"));
    }

    #[tokio::test]
    async fn test_create_certificate_secret_without_name() {
        let mock = MockService::new().on_post(
            SECRETS,
            201,
            &serde_json::json!({
                "apiVersion": "v1",
                "kind": "Secret",
                "metadata": { "namespace": "openshift-config" }
            })
            .to_string(),
        );
        let client = mock.into_client();

        let err = create_certificate_secret(&client, "t", "openshift-config", "api-secret-", "api.example.com", None)
            .await
            .unwrap_err();

        assert!(matches!(err, SetupError::MissingField(_)));
    }
}
