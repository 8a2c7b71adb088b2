// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Mirrors of the cluster API objects read or written by the wizard.

pub mod apiserver;
pub mod certificate;
pub mod ingress;
pub mod oauthclient;
pub mod resource;
pub mod route;

pub use apiserver::ApiServer;
pub use certificate::{ChangeDomainInput, TlsCertificate};
pub use ingress::Ingress;
pub use oauthclient::OAuthClient;
pub use resource::{ClusterResource, ResourceSummary};
pub use route::Route;
