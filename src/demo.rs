// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The scripted namespace walkthrough: list, create, look up, delete.

use crate::config::Config;
use crate::error::{LookupError, Result};
use crate::kubernetes::namespaces::{
    build_namespace, create_namespace, delete_namespace, get_namespace, list_namespaces, Deletion,
};
use crate::types::NamespacePolicy;
use kube::{Client, ResourceExt};
use std::io::Write;
use tracing::{debug, info, warn};

/// Result of looking the created namespace back up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found,
    NotFound,
    Status(String),
}

impl Lookup {
    /// Progress line reported for namespace `name`
    pub fn describe(&self, name: &str) -> String {
        match self {
            Lookup::Found => format!("Found namespace {}", name),
            Lookup::NotFound => format!("namespace {} not found", name),
            Lookup::Status(message) => format!("Error getting namespace {}: {}", name, message),
        }
    }
}

/// What a completed run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub listed: usize,
    pub created: String,
    pub lookup: Lookup,
    pub deletion: Deletion,
}

pub struct Demo {
    client: Client,
    config: Config,
}

impl Demo {
    pub fn new(client: Client, config: Config) -> Self {
        Self { client, config }
    }

    /// Run every step in order, writing progress lines to `out`.
    /// The first fatal error stops the run.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<Summary> {
        let listed = self.list(out).await?;
        let created = self.create().await?;

        let result = self.report_and_delete(&created, out).await;
        if let Err(e) = &result {
            warn!(
                "Namespace {} was created but not deleted: {}",
                created, e
            );
        }
        let (lookup, deletion) = result?;

        Ok(Summary {
            listed,
            created,
            lookup,
            deletion,
        })
    }

    async fn list<W: Write>(&self, out: &mut W) -> Result<usize> {
        let names = list_namespaces(&self.client).await?;

        writeln!(out, "There are {} namespaces in the cluster", names.len())?;
        for name in &names {
            writeln!(out, "Namespace = {}", name)?;
        }
        Ok(names.len())
    }

    /// Create the namespace and return the name the server confirmed
    async fn create(&self) -> Result<String> {
        let namespace = build_namespace(
            &self.config.namespace,
            &self.config.labels,
            &self.config.isolation,
        )?;
        let created = create_namespace(&self.client, &namespace).await?;

        match NamespacePolicy::from_namespace(&created) {
            Ok(Some(policy)) => debug!("Server stored isolation policy {:?}", policy),
            Ok(None) => debug!("Server returned no isolation policy annotation"),
            Err(e) => debug!("Server returned an unreadable isolation policy: {}", e),
        }

        Ok(created.name_any())
    }

    /// Report the created namespace, look it up and delete it.
    ///
    /// Output failures do not stop the deletion; the first one is returned
    /// once the namespace is gone.
    async fn report_and_delete<W: Write>(
        &self,
        name: &str,
        out: &mut W,
    ) -> Result<(Lookup, Deletion)> {
        let created_line = writeln!(out, "Created namespace {}", name);
        let lookup = self.lookup(name).await?;
        let lookup_line = writeln!(out, "{}", lookup.describe(name));

        let deletion =
            delete_namespace(&self.client, name, self.config.grace_period_seconds).await?;
        info!("Deleted namespace {} ({:?})", name, deletion);

        created_line?;
        lookup_line?;
        Ok((lookup, deletion))
    }

    async fn lookup(&self, name: &str) -> Result<Lookup> {
        match get_namespace(&self.client, name).await {
            Ok(_) => Ok(Lookup::Found),
            Err(LookupError::NotFound { .. }) => Ok(Lookup::NotFound),
            Err(LookupError::Status { message, .. }) => Ok(Lookup::Status(message)),
            Err(e) => Err(e.into()),
        }
    }
}
