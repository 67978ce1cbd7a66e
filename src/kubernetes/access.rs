// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Access review utilities

use super::is_forbidden;
use crate::error::Result;
use k8s_openapi::api::authorization::v1::{
    ResourceAttributes, SelfSubjectAccessReview, SelfSubjectAccessReviewSpec,
};
use kube::{api::PostParams, Api, Client};
use tracing::{debug, instrument};

/// Ask the cluster whether the current identity may perform `verb` on a named resource.
/// Being forbidden from asking counts as not allowed.
#[instrument(skip(client))]
pub async fn is_allowed(
    client: &Client,
    verb: &str,
    group: &str,
    resource: &str,
    name: &str,
) -> Result<bool> {
    let reviews: Api<SelfSubjectAccessReview> = Api::all(client.clone());

    let review = SelfSubjectAccessReview {
        spec: SelfSubjectAccessReviewSpec {
            resource_attributes: Some(ResourceAttributes {
                group: Some(group.to_string()),
                resource: Some(resource.to_string()),
                name: Some(name.to_string()),
                verb: Some(verb.to_string()),
                ..Default::default()
            }),
            ..Default::default()
        },
        ..Default::default()
    };

    match reviews.create(&PostParams::default(), &review).await {
        Ok(review) => {
            let allowed = review.status.is_some_and(|s| s.allowed);
            debug!("Access review for {} {}/{} returned allowed={}", verb, resource, name, allowed);
            Ok(allowed)
        }
        Err(e) if is_forbidden(&e) => {
            debug!("Not permitted to review access for {} {}/{}", verb, resource, name);
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

/// Check whether the current identity may create the named resource
pub async fn can_create(client: &Client, group: &str, resource: &str, name: &str) -> Result<bool> {
    is_allowed(client, "create", group, resource, name).await
}
