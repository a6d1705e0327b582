// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Operator release artifact location and download

use crate::constants::release::{DOWNLOAD_BASE, LATEST, LATEST_URL, MANIFEST_NAME, TAG_PREFIX};
use crate::error::{InstallError, Result};
use async_trait::async_trait;
use semver::Version;
use tracing::{info, instrument};
use url::Url;

/// Check that `version` is `latest` or a semantic version, with or without
/// a leading `v`.
pub fn validate_version(version: &str) -> Result<()> {
    release_tag(version).map(|_| ())
}

/// Compute the download URL of the operator manifest for `version`.
///
/// `latest` maps to the latest release. Tags of 1.x and later releases
/// carry the `knative-` prefix.
pub fn operator_url(version: &str) -> Result<Url> {
    let raw = match release_tag(version)? {
        None => LATEST_URL.to_string(),
        Some((tag, parsed)) => {
            let prefix = if parsed.major > 0 { TAG_PREFIX } else { "" };
            format!("{}/{}{}/{}", DOWNLOAD_BASE, prefix, tag, MANIFEST_NAME)
        }
    };

    Url::parse(&raw)
        .map_err(|e| InstallError::ConfigError(format!("Invalid release URL {}: {}", raw, e)))
}

/// Lower-cased, `v`-prefixed tag for `version`; `None` for the latest release
fn release_tag(version: &str) -> Result<Option<(String, Version)>> {
    if version.is_empty() || version == LATEST {
        return Ok(None);
    }

    let tag = version.to_lowercase();
    let tag = if tag.starts_with('v') {
        tag
    } else {
        format!("v{}", tag)
    };
    let parsed = Version::parse(&tag[1..])
        .map_err(|_| InstallError::ConfigError(format!("{} is not a semantic version", version)))?;
    Ok(Some((tag, parsed)))
}

/// Source of base manifests
#[async_trait]
pub trait ManifestFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<String>;
}

/// Downloads manifests over HTTP(S)
#[derive(Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ManifestFetcher for HttpFetcher {
    #[instrument(skip(self, url), fields(url = %url))]
    async fn fetch(&self, url: &Url) -> Result<String> {
        info!("Downloading {}", url);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| InstallError::NetworkError(e.to_string()))?;

        response
            .text()
            .await
            .map_err(|e| InstallError::NetworkError(e.to_string()))
    }
}
