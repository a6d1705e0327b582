// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Rendering base manifest, overlay and values through the overlay engine

use crate::error::{InstallError, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::process::Command;
use tracing::{debug, instrument};

/// What a document contributes to a render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentRole {
    Template,
    Overlay,
    Values,
}

impl DocumentRole {
    fn file_name(&self) -> &'static str {
        match self {
            DocumentRole::Template => "tpl.yml",
            DocumentRole::Overlay => "overlay.yml",
            DocumentRole::Values => "values.yml",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestDocument {
    pub role: DocumentRole,
    pub content: String,
}

impl ManifestDocument {
    pub fn new(role: DocumentRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// The three inputs of one render, in the order the engine reads them
#[derive(Debug, Clone)]
pub struct RenderInput {
    pub template: ManifestDocument,
    pub overlay: ManifestDocument,
    pub values: ManifestDocument,
}

impl RenderInput {
    pub fn new(template: String, overlay: String, values: String) -> Self {
        Self {
            template: ManifestDocument::new(DocumentRole::Template, template),
            overlay: ManifestDocument::new(DocumentRole::Overlay, overlay),
            values: ManifestDocument::new(DocumentRole::Values, values),
        }
    }

    fn documents(&self) -> [&ManifestDocument; 3] {
        [&self.template, &self.overlay, &self.values]
    }
}

#[async_trait]
pub trait TemplateProcessor: Send + Sync {
    /// Produce the rendered manifest, or the engine's diagnostic as a
    /// `TemplateError`.
    async fn render(&self, input: &RenderInput) -> Result<String>;
}

/// Runs the `ytt` binary over the inputs written to a scratch directory.
#[derive(Debug, Clone)]
pub struct YttProcessor {
    binary: PathBuf,
}

impl YttProcessor {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

#[async_trait]
impl TemplateProcessor for YttProcessor {
    #[instrument(skip(self, input))]
    async fn render(&self, input: &RenderInput) -> Result<String> {
        // removed when dropped, on every return path
        let scratch = tempfile::Builder::new()
            .prefix("kn-operator-")
            .tempdir()
            .map_err(|e| {
                InstallError::TemplateError(format!("Cannot create scratch directory: {}", e))
            })?;

        let mut command = Command::new(&self.binary);
        for document in input.documents() {
            let path = scratch.path().join(document.role.file_name());
            tokio::fs::write(&path, &document.content).await.map_err(|e| {
                InstallError::TemplateError(format!("Cannot write {}: {}", path.display(), e))
            })?;
            command.arg("-f").arg(path);
        }

        debug!("Running {:?}", command);
        let output = command.output().await.map_err(|e| {
            InstallError::TemplateError(format!(
                "Cannot run {}: {}",
                self.binary.display(),
                e
            ))
        })?;

        if !output.status.success() {
            return Err(InstallError::TemplateError(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        String::from_utf8(output.stdout).map_err(|e| {
            InstallError::TemplateError(format!("Rendered output is not UTF-8: {}", e))
        })
    }
}
