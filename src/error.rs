// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InstallError {
    #[error("{0}")]
    ConfigError(String),

    #[error("{0}")]
    ClusterConnectionError(String),

    #[error("Kubernetes API error: {0}")]
    ClusterQueryError(#[from] kube::Error),

    #[error("Failed to download manifest: {0}")]
    NetworkError(String),

    #[error("Failed to render manifest: {0}")]
    TemplateError(String),

    #[error("Failed to apply manifest: {0}")]
    ApplyError(String),

    #[error("Operator not ready: {0}")]
    OperatorNotReady(String),

    #[error("Invalid component '{0}', expected 'serving' or 'eventing'")]
    InvalidComponent(String),
}

pub type Result<T> = std::result::Result<T, InstallError>;
