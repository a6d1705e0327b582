// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Overlay fragment selection and the values document fed to the overlay engine

use crate::config::InstallRequest;
use crate::constants::LOCAL_GATEWAY_SERVICE;
use crate::error::{InstallError, Result};
use crate::types::Component;
use std::fmt;
use std::path::{Path, PathBuf};

const OVERLAY_DIR: &str = "overlay";

/// Path of the overlay fragment for `request`, relative to `root`.
pub fn overlay_path(request: &InstallRequest, root: &Path) -> PathBuf {
    let file = match request.component {
        Component::Operator => "operator.yaml",
        Component::Serving if request.has_custom_istio_namespace() => "ks_istio_ns.yaml",
        Component::Serving => "ks.yaml",
        Component::Eventing => "ke.yaml",
    };
    root.join(OVERLAY_DIR).join(file)
}

/// Read the overlay fragment for `request`.
pub fn overlay_content(request: &InstallRequest, root: &Path) -> Result<String> {
    let path = overlay_path(request, root);
    std::fs::read_to_string(&path).map_err(|e| {
        InstallError::ConfigError(format!("Cannot read overlay {}: {}", path.display(), e))
    })
}

/// Parameters handed to the overlay engine as a data-values document.
///
/// `Display` is the one place the text form is defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValuesDocument {
    pub name: Option<String>,
    pub namespace: String,
    pub version: Option<String>,
    pub local_gateway: Option<String>,
}

impl ValuesDocument {
    pub fn for_request(request: &InstallRequest) -> Self {
        let name = request.component.resource_name().map(str::to_string);
        // the operator manifest is already versioned by its download URL
        let version = name.as_ref().map(|_| request.version.clone());
        let local_gateway = (request.component == Component::Serving
            && request.has_custom_istio_namespace())
        .then(|| {
            format!(
                "{}.{}.svc.cluster.local",
                LOCAL_GATEWAY_SERVICE, request.istio_namespace
            )
        });

        ValuesDocument {
            name,
            namespace: request.namespace.clone(),
            version,
            local_gateway,
        }
    }
}

impl fmt::Display for ValuesDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#@data/values\n---\n")?;
        if let Some(name) = &self.name {
            writeln!(f, "name: {}", name)?;
        }
        write!(f, "namespace: {}", self.namespace)?;
        if let Some(version) = &self.version {
            write!(f, "\nversion: '{}'", version)?;
        }
        if let Some(gateway) = &self.local_gateway {
            write!(f, "\nlocal_gateway_value: {}", gateway)?;
        }
        Ok(())
    }
}
