// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client creation and namespace operations.

pub mod client;
pub mod namespaces;

pub use client::create_client;
pub use namespaces::{
    build_namespace, create_namespace, delete_namespace, get_namespace, list_namespaces, Deletion,
};
