// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client creation from a kubeconfig file

use crate::error::{DemoError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig};
use tracing::{debug, info, instrument};

/// Create a Kubernetes client from the kubeconfig at `path`.
///
/// An empty path falls back to in-cluster / environment inference.
#[instrument]
pub async fn create_client(path: &str) -> Result<Client> {
    let client_config = if path.is_empty() {
        debug!("No kubeconfig path given, inferring configuration");
        KConfig::infer().await.map_err(|e| {
            DemoError::KubeconfigError(format!("Failed to infer config: {}", e))
        })?
    } else {
        load_kubeconfig(path).await?
    };

    info!("Using cluster {}", client_config.cluster_url);

    Client::try_from(client_config)
        .map_err(|e| DemoError::KubeconfigError(format!("Failed to create client: {}", e)))
}

/// Load the current context of a kubeconfig file
async fn load_kubeconfig(path: &str) -> Result<KConfig> {
    let kubeconfig = Kubeconfig::read_from(path).map_err(|e| {
        DemoError::KubeconfigError(format!("Failed to read kubeconfig {}: {}", path, e))
    })?;

    KConfig::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(|e| {
            DemoError::KubeconfigError(format!(
                "Failed to create config from {}: {}",
                path, e
            ))
        })
}
