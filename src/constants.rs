// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Kubernetes annotation keys
pub mod annotations {
    /// JSON-encoded namespace isolation policy
    pub const NETWORK_POLICY: &str = "net.beta.kubernetes.io/network-policy";
}

/// Name of the namespace created and removed by the demo
pub const DEFAULT_NAMESPACE_NAME: &str = "my-test-namespace";

/// Log filter used when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "namespace_demo=info";

/// Kubeconfig location relative to the home directory
pub mod kubeconfig {
    pub const DIR: &str = ".kube";
    pub const FILE: &str = "config";
}

/// `reason` values of API server `Status` responses
pub mod status_reasons {
    pub const NOT_FOUND: &str = "NotFound";

    pub const KNOWN: &[&str] = &[
        "Unauthorized",
        "Forbidden",
        "NotFound",
        "AlreadyExists",
        "Conflict",
        "Gone",
        "Invalid",
        "ServerTimeout",
        "Timeout",
        "TooManyRequests",
        "BadRequest",
        "MethodNotAllowed",
        "NotAcceptable",
        "RequestEntityTooLarge",
        "UnsupportedMediaType",
        "InternalError",
        "Expired",
        "ServiceUnavailable",
    ];
}
