// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Operator workload presence check

use crate::constants::operator::DEPLOYMENT_NAME;
use crate::error::Result;
use k8s_openapi::api::apps::v1::Deployment;
use kube::{api::ListParams, Api, Client};
use tracing::{debug, instrument};

/// Check whether the operator Deployment exists in any namespace.
#[instrument(skip(client))]
pub async fn is_operator_installed(client: &Client) -> Result<bool> {
    let deployments: Api<Deployment> = Api::all(client.clone());
    let lp = ListParams::default().fields(&format!("metadata.name={}", DEPLOYMENT_NAME));

    let found = !deployments.list(&lp).await?.items.is_empty();
    debug!("Operator deployment present: {}", found);
    Ok(found)
}
