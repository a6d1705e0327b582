// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation from a kubeconfig path or the ambient environment

use crate::error::{InstallError, Result};
use kube::{
    config::{KubeConfigOptions, Kubeconfig},
    Client, Config as KConfig,
};
use std::path::Path;
use tracing::{debug, instrument};

const KUBECONFIG_HINT: &str = "cannot get source cluster kube config, please use --kubeconfig or export environment variable KUBECONFIG to set";

/// Create a Kubernetes client, from `kubeconfig` if given, otherwise by
/// inferring in-cluster or default kubeconfig settings.
#[instrument]
pub async fn create_client(kubeconfig: Option<&Path>) -> Result<Client> {
    let config = match kubeconfig {
        Some(path) => {
            debug!("Loading kubeconfig from {}", path.display());
            let kubeconfig = Kubeconfig::read_from(path).map_err(connection_error)?;
            KConfig::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
                .await
                .map_err(connection_error)?
        }
        None => KConfig::infer().await.map_err(connection_error)?,
    };

    debug!("Using cluster {}", config.cluster_url);
    Client::try_from(config).map_err(connection_error)
}

fn connection_error(err: impl std::fmt::Display) -> InstallError {
    InstallError::ClusterConnectionError(format!("{}: {}", KUBECONFIG_HINT, err))
}
