// modgraph: Feature Module Build-Graph Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build unit descriptions.
//!
//! ```text
//! Target { name, role, product, bundle_id, destinations, sources, resources,
//!          info_plist (app only), dependencies }
//!                                                               |
//!                            TargetDependency::Project { target, path } | Package
//! ```

use bon::Builder;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::catalog::{ExternalPackage, Feature, Role};

/// Index of a target in a [`ModuleGraph`](super::ModuleGraph) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetId(usize);

impl TargetId {
    #[must_use]
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Kind of artifact a target produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Product {
    App,
    #[default]
    Framework,
    StaticFramework,
    UnitTests,
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::App => write!(f, "app"),
            Self::Framework => write!(f, "framework"),
            Self::StaticFramework => write!(f, "static_framework"),
            Self::UnitTests => write!(f, "unit_tests"),
        }
    }
}

/// Platform a target runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    #[default]
    Ios,
    Macos,
    Tvos,
    Watchos,
    Visionos,
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ios => write!(f, "ios"),
            Self::Macos => write!(f, "macos"),
            Self::Tvos => write!(f, "tvos"),
            Self::Watchos => write!(f, "watchos"),
            Self::Visionos => write!(f, "visionos"),
        }
    }
}

/// Named pointer from one target to another build unit.
///
/// Project references are resolved against the graph only after every
/// target has been declared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TargetDependency {
    /// A target owned by a feature module.
    Project {
        target: String,
        path: String,
        feature: Feature,
        role: Role,
    },
    /// A product of an external package.
    Package { product: ExternalPackage },
}

impl TargetDependency {
    /// Name of the referenced target or package product.
    #[must_use]
    pub fn target_name(&self) -> &str {
        match self {
            Self::Project { target, .. } => target,
            Self::Package { product } => product.as_str(),
        }
    }

    /// Module path of a project reference.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Project { path, .. } => Some(path),
            Self::Package { .. } => None,
        }
    }
}

impl fmt::Display for TargetDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Project { target, path, .. } => write!(f, "{target} ({path})"),
            Self::Package { product } => write!(f, "package {product}"),
        }
    }
}

/// A single buildable unit.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct Target {
    name: String,
    feature: Feature,
    role: Role,
    product: Product,
    bundle_id: String,
    destinations: Vec<Destination>,
    deployment_target: String,
    sources: Vec<String>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    resources: Vec<String>,
    /// Keys added to the default Info.plist.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    info_plist: BTreeMap<String, String>,
    #[builder(default)]
    #[serde(default)]
    dependencies: Vec<TargetDependency>,
}

impl Target {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn feature(&self) -> Feature {
        self.feature
    }

    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub const fn product(&self) -> Product {
        self.product
    }

    #[must_use]
    pub fn bundle_id(&self) -> &str {
        &self.bundle_id
    }

    #[must_use]
    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    #[must_use]
    pub fn deployment_target(&self) -> &str {
        &self.deployment_target
    }

    #[must_use]
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    #[must_use]
    pub fn resources(&self) -> &[String] {
        &self.resources
    }

    #[must_use]
    pub const fn info_plist(&self) -> &BTreeMap<String, String> {
        &self.info_plist
    }

    #[must_use]
    pub fn dependencies(&self) -> &[TargetDependency] {
        &self.dependencies
    }
}
