// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Desired ConsoleCLIDownload construction

use crate::config::DownloadLinkConfig;
use crate::constants::PLATFORMS;
use crate::types::{CLIDownloadLink, ConsoleCLIDownload, ConsoleCLIDownloadSpec};
use kube::api::ObjectMeta;
use std::collections::BTreeMap;

/// Expand the `{version}` and `{os}` placeholders of a download URL template
pub fn render_url(template: &str, version: &str, os: &str) -> String {
    template.replace("{version}", version).replace("{os}", os)
}

/// Build one download link per supported platform
pub fn download_links(config: &DownloadLinkConfig, version: &str) -> Vec<CLIDownloadLink> {
    PLATFORMS
        .iter()
        .map(|(os, label)| CLIDownloadLink {
            text: format!("Download the {} binary for {}", config.binary_name, label),
            href: render_url(&config.url_template, version, os),
        })
        .collect()
}

/// Build the ConsoleCLIDownload advertising the given version
pub fn desired_download(config: &DownloadLinkConfig, version: &str) -> ConsoleCLIDownload {
    ConsoleCLIDownload {
        metadata: ObjectMeta {
            name: Some(config.name.clone()),
            annotations: Some(BTreeMap::from([(
                config.version_annotation.clone(),
                version.to_string(),
            )])),
            ..Default::default()
        },
        spec: ConsoleCLIDownloadSpec {
            display_name: config.display_name.clone(),
            description: config.description.clone(),
            links: download_links(config, version),
        },
    }
}
