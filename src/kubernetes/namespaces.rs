// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace management utilities

use crate::constants::annotations;
use crate::error::{LookupError, Result};
use crate::types::NamespacePolicy;
use k8s_openapi::api::core::v1::Namespace;
use kube::{
    api::{DeleteParams, ListParams, ObjectMeta, PostParams},
    Api, Client, ResourceExt,
};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

/// What the server reported after a delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deletion {
    /// The namespace still exists and is being finalized
    Terminating,
    /// The namespace is gone
    Deleted,
}

/// List the names of all namespaces in the cluster, in server order
#[instrument(skip(client))]
pub async fn list_namespaces(client: &Client) -> Result<Vec<String>> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    let list = namespaces.list(&ListParams::default()).await?;

    debug!("Listed {} namespaces", list.items.len());
    Ok(list.items.iter().map(|ns| ns.name_any()).collect())
}

/// Build a namespace carrying the network isolation policy annotation.
/// An empty label map is left unset.
pub fn build_namespace(
    name: &str,
    labels: &BTreeMap<String, String>,
    isolation: &str,
) -> Result<Namespace> {
    let policy = NamespacePolicy::with_isolation(isolation).to_annotation()?;

    Ok(Namespace {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            labels: (!labels.is_empty()).then(|| labels.clone()),
            annotations: Some(BTreeMap::from([(
                annotations::NETWORK_POLICY.to_string(),
                policy,
            )])),
            ..Default::default()
        },
        ..Default::default()
    })
}

/// Submit a namespace for creation and return the server's copy
#[instrument(skip(client, namespace), fields(namespace = %namespace.name_any()))]
pub async fn create_namespace(client: &Client, namespace: &Namespace) -> Result<Namespace> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    let created = namespaces.create(&PostParams::default(), namespace).await?;

    info!("Namespace {} created", created.name_any());
    Ok(created)
}

/// Fetch a namespace by name
#[instrument(skip(client))]
pub async fn get_namespace(
    client: &Client,
    name: &str,
) -> std::result::Result<Namespace, LookupError> {
    let namespaces: Api<Namespace> = Api::all(client.clone());

    namespaces
        .get(name)
        .await
        .map_err(|e| LookupError::from_kube(name, e))
}

/// Delete a namespace. `None` leaves the grace period to the server.
#[instrument(skip(client))]
pub async fn delete_namespace(
    client: &Client,
    name: &str,
    grace_period_seconds: Option<u32>,
) -> Result<Deletion> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    let params = DeleteParams {
        grace_period_seconds,
        ..DeleteParams::default()
    };

    let response = namespaces.delete(name, &params).await?;
    let deletion = if response.is_left() {
        Deletion::Terminating
    } else {
        Deletion::Deleted
    };

    info!("Namespace {} deletion requested: {:?}", name, deletion);
    Ok(deletion)
}
