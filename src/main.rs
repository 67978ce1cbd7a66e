// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use kube::Client;
use tokio::time::{sleep, timeout};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use console_link::config::Config;
use console_link::install::DownloadLinkInstaller;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting console download link installer");

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: version={}, download={}",
        config.version, config.download.name
    );

    // Create Kubernetes client
    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    let installer = DownloadLinkInstaller::new(client, config.download.clone());

    let Some(interval) = config.resync_interval else {
        let outcome = timeout(config.timeout, installer.install(&config.version))
            .await
            .context("Timed out installing the download link")??;
        info!("Install pass finished: {}", outcome);
        return Ok(());
    };

    info!("Resyncing the download link every {} seconds", interval.as_secs());

    loop {
        match timeout(config.timeout, installer.install(&config.version)).await {
            Ok(Ok(outcome)) => info!("Install pass finished: {}", outcome),
            Ok(Err(e)) => error!("Install pass failed: {}", e),
            Err(_) => warn!(
                "Install pass did not finish within {} seconds",
                config.timeout.as_secs()
            ),
        }

        tokio::select! {
            _ = sleep(interval) => {}
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down");
                return Ok(());
            }
        }
    }
}
