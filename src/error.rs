// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::status_reasons;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to load kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("Invalid network policy annotation: {0}")]
    PolicyError(#[from] serde_json::Error),

    #[error("Namespace lookup failed: {0}")]
    LookupError(#[from] LookupError),

    #[error("Failed to write output: {0}")]
    OutputError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DemoError>;

/// Outcome of a failed namespace lookup.
///
/// `NotFound` and `Status` are reported and the run continues; `Other`
/// (transport, decoding, auth plumbing) is fatal.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("namespace {name} not found")]
    NotFound { name: String },

    #[error("{message}")]
    Status {
        code: u16,
        reason: String,
        message: String,
    },

    #[error(transparent)]
    Other(kube::Error),
}

impl LookupError {
    /// Classify a kube error returned while fetching `name`
    pub fn from_kube(name: &str, err: kube::Error) -> Self {
        match err {
            kube::Error::Api(resp) if is_not_found(&resp) => LookupError::NotFound {
                name: name.to_string(),
            },
            kube::Error::Api(resp) => LookupError::Status {
                code: resp.code,
                reason: resp.reason,
                message: resp.message,
            },
            other => LookupError::Other(other),
        }
    }

    /// Whether the run may continue after this error
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, LookupError::Other(_))
    }
}

/// A `NotFound` reason, or a 404 whose reason is not a known API status
/// reason (e.g. an unparseable body from a proxy).
fn is_not_found(resp: &kube::error::ErrorResponse) -> bool {
    resp.reason == status_reasons::NOT_FOUND
        || (resp.code == 404 && !status_reasons::KNOWN.contains(&resp.reason.as_str()))
}
