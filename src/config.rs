// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{kubeconfig, DEFAULT_NAMESPACE_NAME};
use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;

/// Settings for a single demo run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the kubeconfig file, empty to infer from the environment
    pub kubeconfig: String,
    /// Namespace that is created, looked up and deleted
    pub namespace: String,
    /// Labels set on the created namespace, omitted when empty
    pub labels: BTreeMap<String, String>,
    /// Ingress isolation written into the network policy annotation
    pub isolation: String,
    /// Grace period for deletion, `None` leaves it to the server
    pub grace_period_seconds: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            kubeconfig: String::new(),
            namespace: DEFAULT_NAMESPACE_NAME.to_string(),
            labels: BTreeMap::new(),
            isolation: String::new(),
            grace_period_seconds: None,
        }
    }
}

/// Read a variable from the process environment
pub fn env_lookup(key: &str) -> Option<String> {
    env::var(key).ok()
}

/// Resolve the user's home directory: first non-empty of HOME, USERPROFILE
pub fn home_dir<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    ["HOME", "USERPROFILE"]
        .into_iter()
        .filter_map(|key| lookup(key))
        .find(|value| !value.is_empty())
}

/// `<home>/.kube/config`, or an empty string when no home is known
pub fn default_kubeconfig_path<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    home_dir(lookup)
        .map(|home| {
            PathBuf::from(home)
                .join(kubeconfig::DIR)
                .join(kubeconfig::FILE)
                .to_string_lossy()
                .into_owned()
        })
        .unwrap_or_default()
}
