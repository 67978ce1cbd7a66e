// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::{InstallerError, Result};
use kube::{CustomResource, ResourceExt};
use semver::Version;
use serde::{Deserialize, Serialize};

/// OpenShift console entry advertising a downloadable command line tool
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[kube(
    group = "console.openshift.io",
    version = "v1",
    kind = "ConsoleCLIDownload",
    plural = "consoleclidownloads"
)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleCLIDownloadSpec {
    pub display_name: String,
    pub description: String,
    pub links: Vec<CLIDownloadLink>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
pub struct CLIDownloadLink {
    pub text: String,
    pub href: String,
}

impl ConsoleCLIDownload {
    /// Get the raw version recorded under the given annotation key
    pub fn recorded_version(&self, annotation: &str) -> Option<&str> {
        self.annotations().get(annotation).map(String::as_str)
    }

    /// Parse the version recorded under the given annotation key.
    /// A missing or unparsable annotation is an error.
    pub fn installed_version(&self, annotation: &str) -> Result<Version> {
        let raw = self.recorded_version(annotation).ok_or_else(|| {
            InstallerError::InvalidAnnotation(format!(
                "ConsoleCLIDownload {} has no {} annotation",
                self.name_any(),
                annotation
            ))
        })?;
        parse_version(raw)
    }
}

/// Parse a semantic version, tolerating a leading `v`
pub fn parse_version(raw: &str) -> Result<Version> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Version::parse(trimmed).map_err(|source| InstallerError::InvalidVersion {
        version: raw.to_string(),
        source,
    })
}
