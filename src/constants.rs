// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Kubernetes annotation keys
pub mod annotations {
    /// Records the operator version that installed a download link
    pub const VERSION: &str = "camel.apache.org/version";
}

/// Defaults for the advertised CLI download, overridable through `Config`
pub mod download {
    /// Reserved name of the singleton ConsoleCLIDownload
    pub const NAME: &str = "kamel-cli";
    /// Binary name used in the link texts
    pub const BINARY_NAME: &str = "kamel";
    /// Name shown on the console download page
    pub const DISPLAY_NAME: &str = "kamel - Apache Camel K Command Line Interface";
    pub const DESCRIPTION: &str = "Apache Camel K is a lightweight integration platform, born on Kubernetes, with serverless superpowers.\n\n\
        The `kamel` binary can be used to both configure the cluster and run integrations. \
        Once you've downloaded the `kamel` binary, log into the cluster using the `oc` client tool and start using the `kamel` CLI.\n\n\
        You can run `kamel help` to list the available commands or go to the [Camel K Website](https://camel.apache.org/projects/camel-k/) for more information.";
    /// Archive URL with `{version}` and `{os}` placeholders
    pub const URL_TEMPLATE: &str =
        "https://github.com/apache/camel-k/releases/download/v{version}/camel-k-client-{version}-{os}-64bit.tar.gz";
}

/// Platforms a download link is published for, as (os, label) pairs
pub const PLATFORMS: [(&str, &str); 3] = [("linux", "Linux"), ("mac", "Mac"), ("windows", "Windows")];

/// Resync loop configuration
pub mod resync {
    /// Default deadline for a single install pass
    pub const TIMEOUT_SECS: u64 = 30;
}
