// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Base manifests for the overlay engine: the downloaded operator release or
//! a component custom resource.

use crate::config::InstallRequest;
use crate::error::{InstallError, Result};
use crate::manifest::release::{operator_url, ManifestFetcher};
use crate::types::{Component, KnativeEventing, KnativeServing};
use kube::{
    api::ObjectMeta,
    core::NamespaceResourceScope,
    Api, Client, Resource,
};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use tracing::{debug, info, instrument};

/// Download the operator release manifest for the requested version.
pub async fn operator_manifest(
    request: &InstallRequest,
    fetcher: &dyn ManifestFetcher,
) -> Result<String> {
    let url = operator_url(&request.version)?;
    fetcher.fetch(&url).await
}

/// Render the custom resource asking the operator to reconcile the requested
/// component.
///
/// An existing resource in the target namespace is used as the starting
/// point so its spec survives the install; otherwise an empty one is made.
#[instrument(skip(client, request), fields(component = %request.component, namespace = %request.namespace))]
pub async fn component_resource(client: &Client, request: &InstallRequest) -> Result<String> {
    match request.component {
        Component::Serving => {
            render_resource(client, request, |name| {
                KnativeServing::new(name, Default::default())
            })
            .await
        }
        Component::Eventing => {
            render_resource(client, request, |name| {
                KnativeEventing::new(name, Default::default())
            })
            .await
        }
        Component::Operator => Err(InstallError::InvalidComponent(
            request.component.to_string(),
        )),
    }
}

async fn render_resource<K, F>(client: &Client, request: &InstallRequest, new: F) -> Result<String>
where
    K: Resource<DynamicType = (), Scope = NamespaceResourceScope>
        + Clone
        + Debug
        + DeserializeOwned
        + Serialize,
    F: FnOnce(&str) -> K,
{
    let name = request
        .component
        .resource_name()
        .ok_or_else(|| InstallError::InvalidComponent(request.component.to_string()))?;
    let api: Api<K> = Api::namespaced(client.clone(), &request.namespace);

    let mut resource = match api.get_opt(name).await? {
        Some(existing) => {
            info!("Updating existing {} {}/{}", K::kind(&()), request.namespace, name);
            existing
        }
        None => {
            debug!("No {} {}/{} yet", K::kind(&()), request.namespace, name);
            new(name)
        }
    };

    let meta = resource.meta_mut();
    *meta = ObjectMeta {
        name: Some(name.to_string()),
        namespace: Some(request.namespace.clone()),
        labels: meta.labels.take(),
        annotations: meta.annotations.take(),
        ..Default::default()
    };

    serde_yaml::to_string(&resource).map_err(|e| {
        InstallError::TemplateError(format!("Cannot serialize {}: {}", K::kind(&()), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{not_found_json, MockService};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use url::Url;

    struct RecordingFetcher {
        urls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ManifestFetcher for RecordingFetcher {
        async fn fetch(&self, url: &Url) -> Result<String> {
            self.urls.lock().unwrap().push(url.to_string());
            Ok("kind: Deployment".to_string())
        }
    }

    fn request(component: &str, namespace: &str) -> InstallRequest {
        InstallRequest::new(
            component,
            Some(namespace.to_string()),
            None,
            Some("v1.9.0".to_string()),
            None,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_operator_manifest_uses_release_url() {
        let fetcher = RecordingFetcher { urls: Mutex::new(Vec::new()) };

        let manifest = operator_manifest(&request("", "default"), &fetcher)
            .await
            .unwrap();

        assert_eq!(manifest, "kind: Deployment");
        assert_eq!(
            fetcher.urls.lock().unwrap().as_slice(),
            ["https://github.com/knative/operator/releases/download/knative-v1.9.0/operator.yaml"]
        );
    }

    #[tokio::test]
    async fn test_invalid_version_never_fetches() {
        let fetcher = RecordingFetcher { urls: Mutex::new(Vec::new()) };
        let bad = InstallRequest {
            version: "1.2".to_string(),
            ..request("", "default")
        };

        let err = operator_manifest(&bad, &fetcher).await.unwrap_err();

        assert!(matches!(err, InstallError::ConfigError(_)));
        assert!(fetcher.urls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_new_serving_resource() {
        let mock = MockService::new().on_get(
            "/apis/operator.knative.dev/v1beta1/namespaces/my-ns/knativeservings/knative-serving",
            404,
            &not_found_json("knativeservings.operator.knative.dev", "knative-serving"),
        );

        let yaml = component_resource(&mock.into_client(), &request("serving", "my-ns"))
            .await
            .unwrap();

        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(value["apiVersion"].as_str(), Some("operator.knative.dev/v1beta1"));
        assert_eq!(value["kind"].as_str(), Some("KnativeServing"));
        assert_eq!(value["metadata"]["name"].as_str(), Some("knative-serving"));
        assert_eq!(value["metadata"]["namespace"].as_str(), Some("my-ns"));
    }

    #[tokio::test]
    async fn test_existing_eventing_resource_keeps_spec() {
        let existing = serde_json::json!({
            "apiVersion": "operator.knative.dev/v1beta1",
            "kind": "KnativeEventing",
            "metadata": {
                "name": "knative-eventing",
                "namespace": "knative-eventing",
                "resourceVersion": "4711",
                "uid": "abc",
                "labels": { "team": "events" }
            },
            "spec": {
                "version": "1.8",
                "config": { "config-br-defaults": { "default-br-config": "mt" } }
            },
            "status": { "version": "1.8" }
        })
        .to_string();
        let mock = MockService::new().on_get(
            "/apis/operator.knative.dev/v1beta1/namespaces/knative-eventing/knativeeventings/knative-eventing",
            200,
            &existing,
        );

        let yaml = component_resource(
            &mock.into_client(),
            &request("eventing", "knative-eventing"),
        )
        .await
        .unwrap();

        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(value["kind"].as_str(), Some("KnativeEventing"));
        assert_eq!(value["spec"]["version"].as_str(), Some("1.8"));
        assert_eq!(
            value["spec"]["config"]["config-br-defaults"]["default-br-config"].as_str(),
            Some("mt")
        );
        assert_eq!(value["metadata"]["labels"]["team"].as_str(), Some("events"));
        assert!(value["metadata"].get("resourceVersion").is_none());
        assert!(value["metadata"].get("uid").is_none());
        assert!(value.get("status").is_none());
    }

    #[tokio::test]
    async fn test_operator_has_no_resource() {
        let mock = MockService::new();

        let err = component_resource(&mock.into_client(), &request("", "default"))
            .await
            .unwrap_err();

        assert!(matches!(err, InstallError::InvalidComponent(_)));
    }
}
