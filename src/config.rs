// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{annotations, download, resync};
use anyhow::{bail, Context, Result};
use std::env;
use std::time::Duration;

/// Settings of the advertised CLI download
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadLinkConfig {
    /// Reserved name of the ConsoleCLIDownload resource
    pub name: String,
    pub binary_name: String,
    pub display_name: String,
    pub description: String,
    /// Archive URL with `{version}` and `{os}` placeholders
    pub url_template: String,
    /// Annotation key holding the installed version
    pub version_annotation: String,
}

impl Default for DownloadLinkConfig {
    fn default() -> Self {
        Self {
            name: download::NAME.to_string(),
            binary_name: download::BINARY_NAME.to_string(),
            display_name: download::DISPLAY_NAME.to_string(),
            description: download::DESCRIPTION.to_string(),
            url_template: download::URL_TEMPLATE.to_string(),
            version_annotation: annotations::VERSION.to_string(),
        }
    }
}

/// Installer configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Version of the running software, recorded on the download link
    pub version: String,
    /// Delay between passes; `None` runs a single pass
    pub resync_interval: Option<Duration>,
    /// Deadline for a single pass
    pub timeout: Duration,
    pub download: DownloadLinkConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let version = lookup("OPERATOR_VERSION").unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

        let resync_secs: u64 = match lookup("RESYNC_INTERVAL_SECS") {
            Some(v) => v
                .parse()
                .with_context(|| format!("RESYNC_INTERVAL_SECS is not a number: {}", v))?,
            None => 0,
        };

        let timeout_secs: u64 = match lookup("INSTALL_TIMEOUT_SECS") {
            Some(v) => v
                .parse()
                .with_context(|| format!("INSTALL_TIMEOUT_SECS is not a number: {}", v))?,
            None => resync::TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            bail!("INSTALL_TIMEOUT_SECS must be greater than zero");
        }

        let defaults = DownloadLinkConfig::default();
        let download = DownloadLinkConfig {
            name: lookup("CLI_DOWNLOAD_NAME").unwrap_or(defaults.name),
            binary_name: lookup("CLI_BINARY_NAME").unwrap_or(defaults.binary_name),
            display_name: lookup("CLI_DOWNLOAD_DISPLAY_NAME").unwrap_or(defaults.display_name),
            description: lookup("CLI_DOWNLOAD_DESCRIPTION").unwrap_or(defaults.description),
            url_template: lookup("CLI_DOWNLOAD_URL_TEMPLATE").unwrap_or(defaults.url_template),
            version_annotation: lookup("CLI_VERSION_ANNOTATION").unwrap_or(defaults.version_annotation),
        };

        Ok(Config {
            version,
            resync_interval: (resync_secs > 0).then(|| Duration::from_secs(resync_secs)),
            timeout: Duration::from_secs(timeout_secs),
            download,
        })
    }
}
