// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Command-line arguments.

use crate::config::{default_kubeconfig_path, Config};
use crate::constants::DEFAULT_NAMESPACE_NAME;
use clap::Parser;

/// List namespaces, then create, look up and delete an isolated one
#[derive(Parser, Debug)]
#[command(name = "namespace-demo")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// (optional) absolute path to the kubeconfig file [default: ~/.kube/config]
    #[arg(long)]
    pub kubeconfig: Option<String>,

    /// Name of the namespace to create
    #[arg(long, default_value = DEFAULT_NAMESPACE_NAME)]
    pub namespace: String,

    /// Label for the new namespace, as key=value (repeatable)
    #[arg(long = "label", value_parser = parse_label)]
    pub labels: Vec<(String, String)>,

    /// Ingress isolation for the network policy annotation
    #[arg(long, default_value = "")]
    pub isolation: String,

    /// Deletion grace period in seconds [default: server default]
    #[arg(long)]
    pub grace_period: Option<u32>,
}

impl Args {
    /// Resolve into a run configuration, filling in the kubeconfig default
    pub fn into_config<F>(self, lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let kubeconfig = self
            .kubeconfig
            .unwrap_or_else(|| default_kubeconfig_path(lookup));

        Config {
            kubeconfig,
            namespace: self.namespace,
            labels: self.labels.into_iter().collect(),
            isolation: self.isolation,
            grace_period_seconds: self.grace_period,
        }
    }
}

/// Parse a `key=value` label
pub fn parse_label(s: &str) -> Result<(String, String), String> {
    let Some((key, value)) = s.split_once('=') else {
        return Err(format!("invalid label '{}': expected key=value", s));
    };
    if key.is_empty() {
        return Err(format!("invalid label '{}': empty key", s));
    }
    Ok((key.to_string(), value.to_string()))
}
