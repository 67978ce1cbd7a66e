// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for API discovery and access review.

pub mod access;
pub mod discovery;

pub use access::{can_create, is_allowed};
pub use discovery::{is_api_resource_installed, ApiCapability};

/// Check if an error is an API "not found" response
pub fn is_not_found(err: &kube::Error) -> bool {
    matches!(err, kube::Error::Api(e) if e.code == 404)
}

/// Check if an error is an API "forbidden" response
pub fn is_forbidden(err: &kube::Error) -> bool {
    matches!(err, kube::Error::Api(e) if e.code == 403)
}
