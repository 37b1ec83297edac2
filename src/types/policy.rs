// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::annotations;
use crate::error::Result;
use k8s_openapi::api::core::v1::Namespace;
use serde::{Deserialize, Serialize};

/// Network isolation policy carried in the namespace annotation
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct NamespacePolicy {
    pub ingress: IngressPolicy,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct IngressPolicy {
    pub isolation: String,
}

impl NamespacePolicy {
    pub fn with_isolation(isolation: impl Into<String>) -> Self {
        Self {
            ingress: IngressPolicy {
                isolation: isolation.into(),
            },
        }
    }

    /// Serialize to the JSON text stored as the annotation value
    pub fn to_annotation(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Read the policy back from a namespace, if the annotation is present
    pub fn from_namespace(namespace: &Namespace) -> Result<Option<Self>> {
        let Some(value) = namespace
            .metadata
            .annotations
            .as_ref()
            .and_then(|a| a.get(annotations::NETWORK_POLICY))
        else {
            return Ok(None);
        };

        Ok(Some(serde_json::from_str(value)?))
    }
}
