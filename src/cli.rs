// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Command line surface

use crate::config::InstallRequest;
use crate::error::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "kn-operator", about = "Manage the Knative Operator and its components")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Install Knative Operator or Knative components
    #[command(after_help = "Examples:\n  \
        # Install Knative Serving under the namespace knative-serving\n  \
        kn-operator install -c serving --namespace knative-serving")]
    Install(InstallArgs),
}

#[derive(Debug, Args)]
pub struct InstallArgs {
    /// The namespace of the Knative Operator or the Knative component
    #[arg(short = 'n', long)]
    pub namespace: Option<String>,

    /// The name of the Knative Component to install (serving or eventing)
    #[arg(short = 'c', long, default_value = "")]
    pub component: String,

    /// The version of the Knative Operator or the Knative component
    #[arg(short = 'v', long, default_value = "latest")]
    pub version: String,

    /// The namespace of istio
    #[arg(long)]
    pub istio_namespace: Option<String>,

    /// The kubeconfig of the Knative resources
    #[arg(long, env = "KUBECONFIG")]
    pub kubeconfig: Option<PathBuf>,

    /// Directory holding the overlay/ fragments (defaults to the working directory)
    #[arg(long)]
    pub overlay_dir: Option<PathBuf>,

    /// The ytt binary used to render manifests
    #[arg(long, env = "YTT", default_value = "ytt")]
    pub ytt: PathBuf,
}

impl InstallArgs {
    pub fn to_request(&self) -> Result<InstallRequest> {
        InstallRequest::new(
            &self.component,
            self.namespace.clone(),
            self.istio_namespace.clone(),
            Some(self.version.clone()),
            self.kubeconfig.clone(),
        )
    }
}
