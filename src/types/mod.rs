// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Custom resource types managed by the installer.

pub mod console_cli_download;

pub use console_cli_download::{CLIDownloadLink, ConsoleCLIDownload, ConsoleCLIDownloadSpec};
