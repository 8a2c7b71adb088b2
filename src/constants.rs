// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Default names of the cluster objects the setup wizard manages.
/// Consumed through [`crate::config::ClusterNames`], never directly by helpers.
/// The identity provider is created by the credentials page and only named here.
pub mod names {
    pub const TLS_SECRET_NAMESPACE: &str = "openshift-config";
    pub const WIZARD_ROUTE_NAME: &str = "ztpfw-ui";
    pub const WIZARD_DEPLOYMENT_NAME: &str = "ztpfw-ui";
    pub const WIZARD_NAMESPACE: &str = "ztpfw-ui";
    pub const OAUTH_CLIENT_NAME: &str = "ztpfwoauth";
    pub const IDENTITY_PROVIDER_NAME: &str = "ztpfw-htpasswd-idp";
    pub const OAUTH_NAMESPACE: &str = "openshift-authentication";
    pub const CONSOLE_NAMESPACE: &str = "openshift-console";
}

/// Host prefixes of the routes served under the ingress domain
pub mod routes {
    pub const CONSOLE: &str = "console";
    pub const CONSOLE_HOST_PREFIX: &str = "console-openshift-console";
    pub const OAUTH: &str = "oauth-openshift";
    pub const WIZARD: &str = "edge-cluster-setup";
}

/// Name prefixes (`generateName`) of the TLS secrets created on domain change
pub mod secret_prefixes {
    pub const API: &str = "api-secret-";
    pub const CONSOLE: &str = "console-secret-";
    pub const OAUTH: &str = "oauth-secret-";
    pub const WIZARD: &str = "ztpfw-secret-";
}

/// Environment variables of the wizard deployment rewritten on domain change
pub mod env {
    pub const FRONTEND_URL: &str = "FRONTEND_URL";
    pub const OAUTH2_REDIRECT_URL: &str = "OAUTH2_REDIRECT_URL";
}

/// Service account token mounted into every pod
pub const SA_TOKEN_FILE: &str = "/var/run/secrets/kubernetes.io/serviceaccount/token";

/// Default listen port of the backend
pub const DEFAULT_BACKEND_PORT: u16 = 3001;

/// Interval of the background API server ping feeding the liveness check
pub const LIVENESS_PING_INTERVAL_SECS: u64 = 30;

/// Validity of generated self-signed certificates
pub const CERTIFICATE_VALIDITY_DAYS: i64 = 3650;

/// Usernames of this length or longer are rejected
pub const MAX_USERNAME_LENGTH: usize = 54;

/// Built-in cluster admin, never available as a wizard username
pub const RESERVED_USERNAME: &str = "kubeadmin";

pub const MIN_PASSWORD_LENGTH: usize = 8;
