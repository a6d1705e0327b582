// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Manifest sources, overlays and rendering.

pub mod overlay;
pub mod release;
pub mod source;
pub mod template;

pub use overlay::{overlay_content, overlay_path, ValuesDocument};
pub use release::{operator_url, validate_version, HttpFetcher, ManifestFetcher};
pub use source::{component_resource, operator_manifest};
pub use template::{DocumentRole, ManifestDocument, RenderInput, TemplateProcessor, YttProcessor};
