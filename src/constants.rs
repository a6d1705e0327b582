// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Field manager used for server-side apply
pub const FIELD_MANAGER: &str = "kn-operator";

/// Default namespaces per install target
pub mod namespaces {
    pub const OPERATOR: &str = "default";
    pub const SERVING: &str = "knative-serving";
    pub const EVENTING: &str = "knative-eventing";
    /// Mesh namespace assumed by the stock serving overlay
    pub const ISTIO: &str = "istio-system";
}

/// Operator release artifacts
pub mod release {
    pub const LATEST: &str = "latest";
    pub const LATEST_URL: &str =
        "https://github.com/knative/operator/releases/latest/download/operator.yaml";
    pub const DOWNLOAD_BASE: &str = "https://github.com/knative/operator/releases/download";
    pub const MANIFEST_NAME: &str = "operator.yaml";
    /// Tag prefix used from the 1.x releases onwards
    pub const TAG_PREFIX: &str = "knative-";
}

/// Operator workload and custom resource coordinates
pub mod operator {
    pub const DEPLOYMENT_NAME: &str = "knative-operator";
    pub const GROUP: &str = "operator.knative.dev";
    pub const VERSION: &str = "v1beta1";
}

/// Label switching on automatic sidecar injection
pub mod labels {
    pub const ISTIO_INJECTION: &str = "istio-injection";
    pub const ENABLED: &str = "enabled";
}

/// Local gateway service addressed by the mesh-aware serving overlay
pub const LOCAL_GATEWAY_SERVICE: &str = "knative-local-gateway";

/// CRD polling after a prerequisite operator install
pub mod crd {
    /// Initial polling interval in seconds when waiting for CRD
    pub const POLL_INTERVAL_SECS: u64 = 2;
    /// Maximum polling interval in seconds (exponential backoff cap)
    pub const POLL_MAX_INTERVAL_SECS: u64 = 16;
    /// Give up after this many discovery attempts
    pub const POLL_MAX_ATTEMPTS: u32 = 8;
}
