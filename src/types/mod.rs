// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Payload types stored on Kubernetes objects.

pub mod policy;

pub use policy::{IngressPolicy, NamespacePolicy};
