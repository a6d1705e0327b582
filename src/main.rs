// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kn_operator_install::cli::{Cli, Command};
use kn_operator_install::install::Installer;
use kn_operator_install::kubernetes::create_client;
use kn_operator_install::manifest::{HttpFetcher, YttProcessor};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout only carries the result line
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Install(args) => {
            let request = args.to_request()?;
            info!("Install request: {:?}", request);

            let client = create_client(request.kubeconfig.as_deref()).await?;
            let overlay_root = match args.overlay_dir {
                Some(dir) => dir,
                None => std::env::current_dir().context("Cannot determine working directory")?,
            };

            let installer = Installer::new(
                client,
                Box::new(HttpFetcher::new()),
                Box::new(YttProcessor::new(args.ytt)),
                overlay_root,
            );
            let report = installer.install(&request).await?;
            info!("Applied {} objects", report.objects);
            println!("{}", report);
        }
    }

    Ok(())
}
