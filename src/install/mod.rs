// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Installation of the console CLI download link.

pub mod download_link;
pub mod links;

pub use download_link::{DownloadLinkInstaller, InstallOutcome};
pub use links::desired_download;
