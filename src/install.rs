// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The install pipeline: namespace, base manifest, overlay, render, apply.

use crate::config::InstallRequest;
use crate::error::Result;
use crate::kubernetes::{
    apply_manifest, ensure_namespace_exists, is_operator_installed, wait_for_operator_crd,
};
use crate::manifest::{
    component_resource, operator_manifest, overlay_content, validate_version, ManifestFetcher,
    RenderInput, TemplateProcessor, ValuesDocument,
};
use crate::types::{Component, KnativeEventing, KnativeServing};
use kube::{Client, Resource};
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, error, info, instrument};

/// Progress of one install; a failure leaves it at the step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStage {
    DefaultsFilled,
    NamespaceEnsured,
    SourceResolved,
    Overlaid,
    Rendered,
    Applied,
    Reported,
}

/// Outcome of a successful install
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub component: Component,
    pub version: String,
    pub namespace: String,
    pub objects: usize,
}

impl fmt::Display for InstallReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.component {
            Component::Operator => "operator",
            Component::Serving => "Serving",
            Component::Eventing => "Eventing",
        };
        write!(
            f,
            "Knative {} of the '{}' version was created in the namespace '{}'.",
            what, self.version, self.namespace
        )
    }
}

pub struct Installer {
    client: Client,
    fetcher: Box<dyn ManifestFetcher>,
    processor: Box<dyn TemplateProcessor>,
    overlay_root: PathBuf,
}

impl Installer {
    pub fn new(
        client: Client,
        fetcher: Box<dyn ManifestFetcher>,
        processor: Box<dyn TemplateProcessor>,
        overlay_root: PathBuf,
    ) -> Self {
        Self {
            client,
            fetcher,
            processor,
            overlay_root,
        }
    }

    /// Install what `request` targets. Component installs first make sure
    /// the operator is present, installing it if it is not.
    #[instrument(
        skip(self, request),
        fields(
            component = %request.component,
            namespace = %request.namespace,
            version = %request.version
        )
    )]
    pub async fn install(&self, request: &InstallRequest) -> Result<InstallReport> {
        let mut stage = InstallStage::DefaultsFilled;
        let result = self.run(request, &mut stage).await;
        if let Err(e) = &result {
            error!("Install failed after {:?}: {}", stage, e);
        }
        result
    }

    async fn run(
        &self,
        request: &InstallRequest,
        stage: &mut InstallStage,
    ) -> Result<InstallReport> {
        validate_version(&request.version)?;

        ensure_namespace_exists(
            &self.client,
            &request.namespace,
            request.component.is_mesh_enabled(),
        )
        .await?;
        self.advance(stage, InstallStage::NamespaceEnsured);

        let template = match request.component {
            Component::Operator => operator_manifest(request, self.fetcher.as_ref()).await?,
            Component::Serving | Component::Eventing => {
                self.ensure_prerequisite(request).await?;
                component_resource(&self.client, request).await?
            }
        };
        self.advance(stage, InstallStage::SourceResolved);

        let overlay = overlay_content(request, &self.overlay_root)?;
        let values = ValuesDocument::for_request(request).to_string();
        self.advance(stage, InstallStage::Overlaid);

        let rendered = self
            .processor
            .render(&RenderInput::new(template, overlay, values))
            .await?;
        self.advance(stage, InstallStage::Rendered);

        let objects = apply_manifest(&self.client, &rendered).await?;
        self.advance(stage, InstallStage::Applied);

        let report = InstallReport {
            component: request.component,
            version: request.version.clone(),
            namespace: request.namespace.clone(),
            objects,
        };
        self.advance(stage, InstallStage::Reported);
        Ok(report)
    }

    /// Make sure the operator runs before a component resource is applied.
    /// A failed operator install fails the component install.
    async fn ensure_prerequisite(&self, request: &InstallRequest) -> Result<()> {
        if is_operator_installed(&self.client).await? {
            debug!("Knative operator already installed");
            return Ok(());
        }

        info!("Knative operator not found, installing it first");
        let prerequisite = request.operator_prerequisite();
        Box::pin(self.install(&prerequisite)).await?;

        let kind = match request.component {
            Component::Eventing => KnativeEventing::kind(&()),
            _ => KnativeServing::kind(&()),
        };
        wait_for_operator_crd(&self.client, &kind).await
    }

    fn advance(&self, stage: &mut InstallStage, next: InstallStage) {
        debug!("{:?} -> {:?}", stage, next);
        *stage = next;
    }
}
