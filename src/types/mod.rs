// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Domain types: install targets and the operator's custom resources.

pub mod component;
pub mod knative;

pub use component::Component;
pub use knative::{KnativeEventing, KnativeEventingSpec, KnativeServing, KnativeServingSpec};
