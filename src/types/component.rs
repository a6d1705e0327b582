// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::namespaces;
use crate::error::InstallError;
use std::fmt;
use std::str::FromStr;

/// What an `install` invocation targets: the operator itself or one of the
/// components it reconciles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Operator,
    Serving,
    Eventing,
}

impl Component {
    /// Name of the custom resource the operator expects for this component
    pub fn resource_name(&self) -> Option<&'static str> {
        match self {
            Component::Operator => None,
            Component::Serving => Some("knative-serving"),
            Component::Eventing => Some("knative-eventing"),
        }
    }

    pub fn default_namespace(&self) -> &'static str {
        match self {
            Component::Operator => namespaces::OPERATOR,
            Component::Serving => namespaces::SERVING,
            Component::Eventing => namespaces::EVENTING,
        }
    }

    /// Whether namespaces created for this component get sidecar injection
    pub fn is_mesh_enabled(&self) -> bool {
        matches!(self, Component::Serving)
    }
}

impl FromStr for Component {
    type Err = InstallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Component::Operator);
        }
        if s.eq_ignore_ascii_case("serving") {
            Ok(Component::Serving)
        } else if s.eq_ignore_ascii_case("eventing") {
            Ok(Component::Eventing)
        } else {
            Err(InstallError::InvalidComponent(s.to_string()))
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Operator => write!(f, "operator"),
            Component::Serving => write!(f, "serving"),
            Component::Eventing => write!(f, "eventing"),
        }
    }
}
