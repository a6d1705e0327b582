// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! CRD availability checking utilities

use crate::constants::crd::{POLL_INTERVAL_SECS, POLL_MAX_ATTEMPTS, POLL_MAX_INTERVAL_SECS};
use crate::constants::operator::{GROUP, VERSION};
use crate::error::{InstallError, Result};
use kube::{discovery::Discovery, Client};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

/// Wait for the operator's `kind` CRD to become available in the cluster.
/// Only called right after the operator was installed as a prerequisite of
/// a component install; nothing else in an install polls or retries.
/// This uses exponential backoff starting at POLL_INTERVAL_SECS seconds and
/// gives up after POLL_MAX_ATTEMPTS checks.
pub async fn wait_for_operator_crd(client: &Client, kind: &str) -> Result<()> {
    let mut interval = POLL_INTERVAL_SECS;

    for attempt in 1..=POLL_MAX_ATTEMPTS {
        match check_operator_crd_exists(client, kind).await {
            Ok(true) => {
                info!("{} CRD ({}/{}) is available", kind, GROUP, VERSION);
                return Ok(());
            }
            Ok(false) => {
                info!(
                    "{} CRD ({}/{}) not yet available, waiting {} seconds...",
                    kind, GROUP, VERSION, interval
                );
            }
            Err(e) => {
                warn!(
                    "Error checking for {} CRD: {}, retrying in {} seconds...",
                    kind, e, interval
                );
            }
        }

        if attempt < POLL_MAX_ATTEMPTS {
            sleep(Duration::from_secs(interval)).await;
            // Exponential backoff with max cap
            interval = (interval * 2).min(POLL_MAX_INTERVAL_SECS);
        }
    }

    Err(InstallError::OperatorNotReady(format!(
        "{} CRD ({}/{}) did not become available after the operator install",
        kind, GROUP, VERSION
    )))
}

/// Check if the CRD exists by attempting to discover it.
async fn check_operator_crd_exists(client: &Client, kind: &str) -> Result<bool> {
    let discovery = Discovery::new(client.clone())
        .filter(&[GROUP])
        .run()
        .await?;

    for group in discovery.groups() {
        if group.name() == GROUP {
            for (ar, _) in group.recommended_resources() {
                if ar.kind == kind && ar.version == VERSION {
                    return Ok(true);
                }
            }
        }
    }

    Ok(false)
}
