// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{namespaces, release};
use crate::error::Result;
use crate::manifest::validate_version;
use crate::types::Component;
use std::path::PathBuf;

/// A single install invocation with every default filled in.
///
/// Built once from the command line and passed by reference through the
/// install pipeline; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRequest {
    pub component: Component,
    pub namespace: String,
    /// Mesh namespace; only defaulted for serving, empty otherwise
    pub istio_namespace: String,
    pub version: String,
    pub kubeconfig: Option<PathBuf>,
}

impl InstallRequest {
    /// Parse the component name, fill defaults for everything left unset and
    /// reject versions that are neither `latest` nor semantic versions.
    pub fn new(
        component: &str,
        namespace: Option<String>,
        istio_namespace: Option<String>,
        version: Option<String>,
        kubeconfig: Option<PathBuf>,
    ) -> Result<Self> {
        let component: Component = component.parse()?;

        let namespace = non_empty(namespace)
            .unwrap_or_else(|| component.default_namespace().to_string());
        let version = non_empty(version).unwrap_or_else(|| release::LATEST.to_string());
        validate_version(&version)?;
        let istio_namespace = match non_empty(istio_namespace) {
            Some(ns) => ns,
            None if component == Component::Serving => namespaces::ISTIO.to_string(),
            None => String::new(),
        };

        Ok(InstallRequest {
            component,
            namespace,
            istio_namespace,
            version,
            kubeconfig,
        })
    }

    /// The operator install a component install falls back on when the
    /// operator is missing from the cluster.
    pub fn operator_prerequisite(&self) -> Self {
        InstallRequest {
            component: Component::Operator,
            namespace: namespaces::OPERATOR.to_string(),
            istio_namespace: String::new(),
            version: release::LATEST.to_string(),
            kubeconfig: self.kubeconfig.clone(),
        }
    }

    /// Whether a mesh namespace other than the stock one was requested
    pub fn has_custom_istio_namespace(&self) -> bool {
        !self.istio_namespace.is_empty() && self.istio_namespace != namespaces::ISTIO
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
