// modgraph: Feature Module Build-Graph Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed declarations the graph is built from.
//!
//! ```text
//! Manifest
//!   features: [FeatureManifest { interface, implementation?, tests[], layering? }]
//!   app:      AppManifest { name, sources, dependencies, info_plist }?
//! ```

use std::collections::{BTreeMap, BTreeSet};

use super::catalog::{Feature, Role};
use super::resolver::{DependencySpec, LayeringPolicy};

/// Dependencies and resources declared for one library target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleManifest {
    pub dependencies: Vec<DependencySpec>,
    pub resources: Vec<String>,
}

impl ModuleManifest {
    #[must_use]
    pub fn with_dependencies(dependencies: impl IntoIterator<Item = DependencySpec>) -> Self {
        Self {
            dependencies: dependencies.into_iter().collect(),
            resources: Vec::new(),
        }
    }
}

/// A test bundle covering one library role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestManifest {
    pub role: Role,
    pub dependencies: Vec<DependencySpec>,
}

/// Everything declared for one feature module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureManifest {
    pub feature: Feature,
    pub interface: ModuleManifest,
    pub implementation: Option<ModuleManifest>,
    pub tests: Vec<TestManifest>,
    /// Overrides the workspace layering policy for this feature's targets.
    pub layering: Option<LayeringPolicy>,
}

impl FeatureManifest {
    /// An interface-only feature with no dependencies.
    #[must_use]
    pub const fn new(feature: Feature) -> Self {
        Self {
            feature,
            interface: ModuleManifest {
                dependencies: Vec::new(),
                resources: Vec::new(),
            },
            implementation: None,
            tests: Vec::new(),
            layering: None,
        }
    }

    #[must_use]
    pub fn with_interface(mut self, interface: ModuleManifest) -> Self {
        self.interface = interface;
        self
    }

    #[must_use]
    pub fn with_implementation(mut self, implementation: ModuleManifest) -> Self {
        self.implementation = Some(implementation);
        self
    }

    #[must_use]
    pub fn with_test(mut self, role: Role, dependencies: impl IntoIterator<Item = DependencySpec>) -> Self {
        self.tests.push(TestManifest {
            role,
            dependencies: dependencies.into_iter().collect(),
        });
        self
    }

    #[must_use]
    pub const fn with_layering(mut self, layering: LayeringPolicy) -> Self {
        self.layering = Some(layering);
        self
    }

    /// Features referenced by any of this feature's targets.
    pub fn referenced_features(&self) -> impl Iterator<Item = Feature> + '_ {
        std::iter::once(&self.interface)
            .chain(&self.implementation)
            .flat_map(|module| &module.dependencies)
            .chain(self.tests.iter().flat_map(|test| &test.dependencies))
            .filter_map(|spec| match spec {
                DependencySpec::Feature { feature, .. } => Some(*feature),
                DependencySpec::Package(_) => None,
            })
    }
}

/// The application target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppManifest {
    pub name: String,
    pub sources: Vec<String>,
    pub dependencies: Vec<DependencySpec>,
    pub info_plist: BTreeMap<String, String>,
}

/// A complete workspace declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub features: Vec<FeatureManifest>,
    pub app: Option<AppManifest>,
}

impl Manifest {
    /// Keeps only the features for which `keep` returns true.
    ///
    /// The app is dropped unless `keep_app` is set.
    #[must_use]
    pub fn select(mut self, keep: impl Fn(Feature) -> bool, keep_app: bool) -> Self {
        self.features.retain(|f| keep(f.feature));
        if !keep_app {
            self.app = None;
        }
        self
    }

    /// `roots` plus every declared feature they reach through dependencies.
    #[must_use]
    pub fn dependency_closure(&self, roots: impl IntoIterator<Item = Feature>) -> BTreeSet<Feature> {
        let mut closure = BTreeSet::new();
        let mut pending: Vec<Feature> = roots.into_iter().collect();

        while let Some(feature) = pending.pop() {
            if !closure.insert(feature) {
                continue;
            }
            if let Some(manifest) = self.features.iter().find(|f| f.feature == feature) {
                pending.extend(manifest.referenced_features());
            }
        }
        closure
    }
}
