// modgraph: Feature Module Build-Graph Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Target archetypes.
//!
//! ```text
//! make_app ----------------------------------> App        (app)
//! make_framework <-- feature_interface ------> Interface  (framework)
//!                <-- feature_implementation -> Implementation
//! test_interface / test_implementation ------> Test       (unit_tests)
//!                   deps = [target under test, extra...]
//! ```
//!
//! Factories are pure: they return values and never touch shared state.

use bon::{Builder, bon};
use std::collections::{BTreeMap, HashSet};

use super::catalog::{Feature, FeatureCatalog, Role};
use super::naming::NamingPolicy;
use super::resolver::project_reference;
use super::target::{Destination, Product, Target, TargetDependency};
use crate::error::{GraphError, GraphResult};

/// Deployment target used when the workspace does not set one.
pub const DEFAULT_DEPLOYMENT_TARGET: &str = "16.0";

/// Settings shared by every target of a workspace.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct TargetSettings {
    #[builder(into, default = DEFAULT_DEPLOYMENT_TARGET.to_string())]
    deployment_target: String,
    #[builder(default = vec![Destination::Ios])]
    destinations: Vec<Destination>,
    /// Product used for interface and implementation targets.
    #[builder(default)]
    framework_product: Product,
}

impl Default for TargetSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl TargetSettings {
    #[must_use]
    pub fn deployment_target(&self) -> &str {
        &self.deployment_target
    }

    #[must_use]
    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    #[must_use]
    pub const fn framework_product(&self) -> Product {
        self.framework_product
    }
}

/// Builds [`Target`] values for one workspace.
#[derive(Debug, Clone, Copy)]
pub struct TargetFactory<'a> {
    naming: &'a NamingPolicy,
    settings: &'a TargetSettings,
}

#[bon]
impl<'a> TargetFactory<'a> {
    #[must_use]
    pub const fn new(naming: &'a NamingPolicy, settings: &'a TargetSettings) -> Self {
        Self { naming, settings }
    }

    /// Application target.
    ///
    /// `info_plist` entries extend the default Info.plist. Apps are expected
    /// to link at least one interface/implementation pair; that is left to
    /// the caller.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Configuration`] if `name` or `sources` is empty.
    pub fn make_app(
        &self,
        name: &str,
        sources: Vec<String>,
        dependencies: Vec<TargetDependency>,
        info_plist: BTreeMap<String, String>,
    ) -> GraphResult<Target> {
        check_sources(name, &sources)?;

        let target = Target::builder()
            .name(name)
            .feature(Feature::App)
            .role(Role::App)
            .product(Product::App)
            .bundle_id(self.naming.app_bundle_id())
            .destinations(self.settings.destinations().to_vec())
            .deployment_target(self.settings.deployment_target())
            .sources(sources)
            .info_plist(info_plist)
            .dependencies(dedupe(dependencies))
            .build();
        tracing::debug!(name = %target.name(), bundle_id = %target.bundle_id(), "app target");
        Ok(target)
    }

    /// Generic framework target.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Configuration`] if `name` or `sources` is empty.
    #[builder]
    pub fn make_framework(
        &self,
        #[builder(into)] name: String,
        feature: Feature,
        role: Role,
        sources: Vec<String>,
        #[builder(default)] dependencies: Vec<TargetDependency>,
        #[builder(default)] resources: Vec<String>,
    ) -> GraphResult<Target> {
        check_sources(&name, &sources)?;

        let target = Target::builder()
            .bundle_id(self.naming.framework_bundle_id(&name))
            .name(name)
            .feature(feature)
            .role(role)
            .product(self.settings.framework_product())
            .destinations(self.settings.destinations().to_vec())
            .deployment_target(self.settings.deployment_target())
            .sources(sources)
            .resources(resources)
            .dependencies(dedupe(dependencies))
            .build();
        tracing::debug!(name = %target.name(), bundle_id = %target.bundle_id(), "framework target");
        Ok(target)
    }

    /// Interface target of `feature`, rooted at its `Interface/Sources`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownIdentifier`] if the feature has no interface.
    pub fn feature_interface(
        &self,
        feature: Feature,
        dependencies: Vec<TargetDependency>,
        resources: Vec<String>,
    ) -> GraphResult<Target> {
        self.feature_library(feature, Role::Interface, dependencies, resources)
    }

    /// Implementation target of `feature`, rooted at its `Implementation/Sources`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownIdentifier`] if the feature has no implementation.
    pub fn feature_implementation(
        &self,
        feature: Feature,
        dependencies: Vec<TargetDependency>,
        resources: Vec<String>,
    ) -> GraphResult<Target> {
        self.feature_library(feature, Role::Implementation, dependencies, resources)
    }

    /// Test bundle for the implementation of `feature`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownIdentifier`] if the feature has no implementation.
    pub fn test_implementation(
        &self,
        feature: Feature,
        extra: Vec<TargetDependency>,
    ) -> GraphResult<Target> {
        self.test(feature, Role::Implementation, extra)
    }

    /// Test bundle for the interface of `feature`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownIdentifier`] if the feature has no interface.
    pub fn test_interface(&self, feature: Feature, extra: Vec<TargetDependency>) -> GraphResult<Target> {
        self.test(feature, Role::Interface, extra)
    }

    /// Test bundle for `(feature, tested)`; depends on the target under test first.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownIdentifier`] unless `tested` is a library role
    /// of `feature`.
    pub fn test(
        &self,
        feature: Feature,
        tested: Role,
        extra: Vec<TargetDependency>,
    ) -> GraphResult<Target> {
        FeatureCatalog.ensure_role(feature, Role::Test)?;
        let name = self.naming.test_target_name(feature, tested)?;
        let sources = vec![self.naming.test_source_dir(feature, tested)?];

        let mut dependencies = vec![project_reference(self.naming, feature, tested)?];
        dependencies.extend(extra);

        let target = Target::builder()
            .bundle_id(self.naming.test_bundle_id(&name))
            .name(name)
            .feature(feature)
            .role(Role::Test)
            .product(Product::UnitTests)
            .destinations(self.settings.destinations().to_vec())
            .deployment_target(self.settings.deployment_target())
            .sources(sources)
            .dependencies(dedupe(dependencies))
            .build();
        tracing::debug!(name = %target.name(), bundle_id = %target.bundle_id(), "test target");
        Ok(target)
    }

    fn feature_library(
        &self,
        feature: Feature,
        role: Role,
        dependencies: Vec<TargetDependency>,
        resources: Vec<String>,
    ) -> GraphResult<Target> {
        self.make_framework()
            .name(self.naming.target_name(feature, role)?)
            .feature(feature)
            .role(role)
            .sources(vec![self.naming.source_dir(feature, role)?])
            .dependencies(dependencies)
            .resources(resources)
            .call()
    }
}

fn check_sources(name: &str, sources: &[String]) -> GraphResult<()> {
    if name.trim().is_empty() {
        return Err(GraphError::Configuration {
            target: name.to_string(),
            message: "target name must not be empty".to_string(),
        });
    }
    if sources.is_empty() || sources.iter().any(|s| s.trim().is_empty()) {
        return Err(GraphError::Configuration {
            target: name.to_string(),
            message: "at least one non-empty source root is required".to_string(),
        });
    }
    Ok(())
}

/// Drops repeated dependencies, keeping the first occurrence.
fn dedupe(dependencies: Vec<TargetDependency>) -> Vec<TargetDependency> {
    let mut seen = HashSet::new();
    dependencies
        .into_iter()
        .filter(|dependency| seen.insert(dependency.clone()))
        .collect()
}
