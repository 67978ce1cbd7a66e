// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! API availability checking utilities

use super::is_not_found;
use crate::error::Result;
use kube::{Client, Resource};
use tracing::{debug, instrument};

/// An API group/version and the kind expected to be served by it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiCapability {
    /// `group/version`, or just `version` for the core group
    pub api_version: String,
    pub kind: String,
}

impl ApiCapability {
    pub fn new(api_version: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            api_version: api_version.into(),
            kind: kind.into(),
        }
    }

    /// Describe the API serving a statically typed resource
    pub fn of<K: Resource<DynamicType = ()>>() -> Self {
        Self::new(K::api_version(&()), K::kind(&()))
    }
}

/// Check if the cluster serves the given kind under the given group/version.
/// An unknown group/version means the feature is unsupported, not an error.
#[instrument(skip(client))]
pub async fn is_api_resource_installed(client: &Client, capability: &ApiCapability) -> Result<bool> {
    let listing = match capability.api_version.split_once('/') {
        Some(_) => client.list_api_group_resources(&capability.api_version).await,
        None => client.list_core_api_resources(&capability.api_version).await,
    };

    let resources = match listing {
        Ok(resources) => resources,
        Err(e) if is_not_found(&e) => {
            debug!("API {} is not served by the cluster", capability.api_version);
            return Ok(false);
        }
        Err(e) => return Err(e.into()),
    };

    let installed = resources
        .resources
        .iter()
        .any(|r| r.kind == capability.kind);

    debug!(
        "Kind {} {} served by {}",
        capability.kind,
        if installed { "is" } else { "is not" },
        capability.api_version
    );

    Ok(installed)
}
