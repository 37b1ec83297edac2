// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use namespace_demo::cli::Args;
use namespace_demo::config::env_lookup;
use namespace_demo::constants::DEFAULT_LOG_FILTER;
use namespace_demo::demo::Demo;
use namespace_demo::kubernetes::create_client;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr, stdout carries the demo output
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Args::parse().into_config(env_lookup);
    info!(
        "Configuration loaded: kubeconfig={:?} namespace={}",
        config.kubeconfig, config.namespace
    );

    let client = create_client(&config.kubeconfig)
        .await
        .context("Failed to create Kubernetes client")?;

    let demo = Demo::new(client, config);
    let summary = demo.run(&mut std::io::stdout().lock()).await?;
    info!("Done: {:?}", summary);

    Ok(())
}
