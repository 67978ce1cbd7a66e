// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Version-aware installation of the console CLI download link.

use crate::config::DownloadLinkConfig;
use crate::error::Result;
use crate::install::links::desired_download;
use crate::kubernetes::{can_create, is_api_resource_installed, is_forbidden, ApiCapability};
use crate::types::console_cli_download::{parse_version, ConsoleCLIDownload};
use kube::{
    api::{DeleteParams, PostParams},
    Api, Client, Resource,
};
use semver::Version;
use std::cmp::Ordering;
use std::fmt;
use tracing::{debug, info, instrument, warn};

/// What a single install pass did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The cluster does not serve ConsoleCLIDownload
    Unsupported,
    /// The current identity may not create the download link
    NotPermitted,
    /// A link for a newer version is already installed and was kept
    KeptNewer { installed: Version },
    /// No link existed and one was created
    Created,
    /// An older or equal link was deleted and recreated
    Replaced { previous: Version },
    /// An older or equal link exists but deleting it was forbidden
    DeleteForbidden { installed: Version },
}

impl fmt::Display for InstallOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallOutcome::Unsupported => write!(f, "ConsoleCLIDownload API not available"),
            InstallOutcome::NotPermitted => write!(f, "not permitted to create ConsoleCLIDownload"),
            InstallOutcome::KeptNewer { installed } => {
                write!(f, "kept newer download link for version {}", installed)
            }
            InstallOutcome::Created => write!(f, "created download link"),
            InstallOutcome::Replaced { previous } => {
                write!(f, "replaced download link for version {}", previous)
            }
            InstallOutcome::DeleteForbidden { installed } => write!(
                f,
                "not permitted to replace download link for version {}",
                installed
            ),
        }
    }
}

/// Installs the ConsoleCLIDownload advertising the CLI for the running version
pub struct DownloadLinkInstaller {
    client: Client,
    config: DownloadLinkConfig,
}

impl DownloadLinkInstaller {
    pub fn new(client: Client, config: DownloadLinkConfig) -> Self {
        Self { client, config }
    }

    /// Run a full pass: check the API exists, check access, then reconcile.
    #[instrument(skip(self), fields(name = %self.config.name))]
    pub async fn install(&self, version: &str) -> Result<InstallOutcome> {
        // ConsoleCLIDownload ships with OpenShift 4.2+, plain Kubernetes never serves it
        let capability = ApiCapability::of::<ConsoleCLIDownload>();
        if !is_api_resource_installed(&self.client, &capability).await? {
            debug!("{} not served by the cluster, skipping", capability.kind);
            return Ok(InstallOutcome::Unsupported);
        }

        let group = ConsoleCLIDownload::group(&());
        let plural = ConsoleCLIDownload::plural(&());
        if !can_create(&self.client, &group, &plural, &self.config.name).await? {
            info!(
                "Not permitted to create {} {}, skipping",
                capability.kind, self.config.name
            );
            return Ok(InstallOutcome::NotPermitted);
        }

        self.reconcile(version).await
    }

    /// Create, replace or keep the download link depending on the installed version.
    #[instrument(skip(self), fields(name = %self.config.name))]
    pub async fn reconcile(&self, version: &str) -> Result<InstallOutcome> {
        let current = parse_version(version)?;
        let downloads: Api<ConsoleCLIDownload> = Api::all(self.client.clone());

        let mut outcome = InstallOutcome::Created;

        if let Some(existing) = downloads.get_opt(&self.config.name).await? {
            let installed = existing.installed_version(&self.config.version_annotation)?;

            if current.cmp_precedence(&installed) == Ordering::Less {
                debug!(
                    "Download link for version {} is newer than {}, keeping it",
                    installed, current
                );
                return Ok(InstallOutcome::KeptNewer { installed });
            }

            if current.cmp_precedence(&installed) == Ordering::Equal {
                debug!(
                    "Download link already at version {}, recreating it",
                    installed
                );
            } else {
                info!(
                    "Deleting download link for version {} to install {}",
                    installed, current
                );
            }
            match downloads
                .delete(&self.config.name, &DeleteParams::default())
                .await
            {
                Ok(_) => {}
                Err(e) if is_forbidden(&e) => {
                    warn!(
                        "Not permitted to delete download link {}, skipping",
                        self.config.name
                    );
                    return Ok(InstallOutcome::DeleteForbidden { installed });
                }
                Err(e) => return Err(e.into()),
            }

            outcome = InstallOutcome::Replaced {
                previous: installed,
            };
        }

        let version = current.to_string();
        let link = desired_download(&self.config, &version);
        downloads.create(&PostParams::default(), &link).await?;

        info!("Download link {} installed for version {}", self.config.name, version);
        Ok(outcome)
    }
}
