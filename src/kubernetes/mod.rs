// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation, namespace management, operator
//! discovery and manifest application.

pub mod apply;
pub mod client;
pub mod crd;
pub mod namespaces;
pub mod operator;

pub use apply::apply_manifest;
pub use client::create_client;
pub use crd::wait_for_operator_crd;
pub use namespaces::ensure_namespace_exists;
pub use operator::is_operator_installed;
