// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Multi-document manifest application via server-side apply

use crate::constants::FIELD_MANAGER;
use crate::error::{InstallError, Result};
use kube::{
    api::{ApiResource, DynamicObject, GroupVersionKind, Patch, PatchParams},
    discovery::{self, ApiCapabilities, Scope},
    Api, Client, ResourceExt,
};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, info, instrument};

/// Apply every object in `manifest` to the cluster, returning how many were
/// applied. Stops at the first failure; objects applied before it stay.
#[instrument(skip(client, manifest))]
pub async fn apply_manifest(client: &Client, manifest: &str) -> Result<usize> {
    let objects = parse_manifest(manifest)?;
    info!("Applying {} objects", objects.len());

    let mut kinds = KindCache::new();
    for object in &objects {
        apply_object(client, &mut kinds, object).await?;
    }

    Ok(objects.len())
}

/// Split a multi-document YAML stream into dynamic objects, skipping empty
/// documents.
pub fn parse_manifest(manifest: &str) -> Result<Vec<DynamicObject>> {
    let mut objects = Vec::new();

    for document in serde_yaml::Deserializer::from_str(manifest) {
        let value = serde_yaml::Value::deserialize(document)
            .map_err(|e| InstallError::ApplyError(format!("Invalid YAML document: {}", e)))?;
        if value.is_null() {
            continue;
        }
        let object: DynamicObject = serde_yaml::from_value(value)
            .map_err(|e| InstallError::ApplyError(format!("Invalid Kubernetes object: {}", e)))?;
        objects.push(object);
    }

    Ok(objects)
}

/// Discovery results, one lookup per kind
type KindCache = HashMap<GroupVersionKind, (ApiResource, ApiCapabilities)>;

async fn resolve_kind(
    client: &Client,
    kinds: &mut KindCache,
    gvk: &GroupVersionKind,
) -> Result<(ApiResource, ApiCapabilities)> {
    if let Some(found) = kinds.get(gvk) {
        return Ok(found.clone());
    }

    let found = discovery::pinned_kind(client, gvk)
        .await
        .map_err(|e| InstallError::ApplyError(format!("Unknown kind {}: {}", gvk.kind, e)))?;
    kinds.insert(gvk.clone(), found.clone());
    Ok(found)
}

async fn apply_object(
    client: &Client,
    kinds: &mut KindCache,
    object: &DynamicObject,
) -> Result<()> {
    let types = object.types.as_ref().ok_or_else(|| {
        InstallError::ApplyError(format!(
            "Object {} has no apiVersion/kind",
            object.name_any()
        ))
    })?;
    let gvk = GroupVersionKind::try_from(types)
        .map_err(|e| InstallError::ApplyError(format!("Invalid apiVersion: {}", e)))?;
    let name = object.metadata.name.as_deref().ok_or_else(|| {
        InstallError::ApplyError(format!("{} object has no metadata.name", gvk.kind))
    })?;

    let (resource, caps) = resolve_kind(client, kinds, &gvk).await?;

    let api: Api<DynamicObject> = match caps.scope {
        Scope::Namespaced => {
            let namespace = object
                .metadata
                .namespace
                .clone()
                .unwrap_or_else(|| client.default_namespace().to_string());
            debug!("Applying {} {}/{}", gvk.kind, namespace, name);
            Api::namespaced_with(client.clone(), &namespace, &resource)
        }
        Scope::Cluster => {
            debug!("Applying {} {}", gvk.kind, name);
            Api::all_with(client.clone(), &resource)
        }
    };

    let pp = PatchParams::apply(FIELD_MANAGER).force();
    api.patch(name, &pp, &Patch::Apply(object))
        .await
        .map_err(|e| InstallError::ApplyError(format!("{} {}: {}", gvk.kind, name, e)))?;

    Ok(())
}
