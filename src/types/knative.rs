// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Only the fields the overlays touch are typed; everything else in the
/// live object is carried through `extra` untouched.
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[kube(group = "operator.knative.dev", version = "v1beta1", kind = "KnativeServing")]
#[kube(namespaced)]
#[serde(rename_all = "camelCase")]
pub struct KnativeServingSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<BTreeMap<String, BTreeMap<String, String>>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[kube(group = "operator.knative.dev", version = "v1beta1", kind = "KnativeEventing")]
#[kube(namespaced)]
#[serde(rename_all = "camelCase")]
pub struct KnativeEventingSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<BTreeMap<String, BTreeMap<String, String>>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}
