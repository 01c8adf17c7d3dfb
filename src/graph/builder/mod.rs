// modgraph: Feature Module Build-Graph Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Module graph construction.
//!
//! ```text
//! build(manifest)
//!   per feature:  Interface (always)
//!                 Implementation (+ own interface, once)
//!                 Tests (+ target under test)
//!   app:          App target, last
//!        |
//!        v
//!   ModuleGraph::assemble
//!     unique names / bundle ids --> DuplicateIdentifier
//!     resolve references        --> UnknownIdentifier
//!     topological check         --> CyclicGraph
//! ```

use std::collections::BTreeSet;

use super::catalog::{Feature, FeatureCatalog, Role};
use super::factory::{TargetFactory, TargetSettings};
use super::manifest::{AppManifest, FeatureManifest, Manifest};
use super::module::{ModuleGraph, Project};
use super::naming::NamingPolicy;
use super::resolver::{Consumer, DependencyResolver, LayeringPolicy};
use super::target::{Target, TargetId};
use crate::error::{GraphError, GraphResult};

/// Builds [`ModuleGraph`]s from manifests.
///
/// The builder holds only immutable settings; one instance can build any
/// number of graphs, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct ModuleGraphBuilder {
    naming: NamingPolicy,
    settings: TargetSettings,
    layering: LayeringPolicy,
}

impl ModuleGraphBuilder {
    #[must_use]
    pub const fn new(naming: NamingPolicy, settings: TargetSettings, layering: LayeringPolicy) -> Self {
        Self {
            naming,
            settings,
            layering,
        }
    }

    #[must_use]
    pub const fn naming(&self) -> &NamingPolicy {
        &self.naming
    }

    #[must_use]
    pub const fn layering(&self) -> LayeringPolicy {
        self.layering
    }

    /// Builds the graph for a feature list without an app.
    ///
    /// # Errors
    ///
    /// See [`build`](Self::build).
    pub fn build_features(&self, features: &[FeatureManifest]) -> GraphResult<ModuleGraph> {
        self.build(&Manifest {
            features: features.to_vec(),
            app: None,
        })
    }

    /// Builds and validates the complete graph.
    ///
    /// # Errors
    ///
    /// - [`GraphError::UnknownIdentifier`] for undefined roles or references to
    ///   targets that are not part of the graph.
    /// - [`GraphError::Configuration`] for targets without sources.
    /// - [`GraphError::IllegalLayering`] for edges the layering policy forbids.
    /// - [`GraphError::DuplicateIdentifier`] for repeated features, target
    ///   names or bundle identifiers.
    /// - [`GraphError::CyclicGraph`] if the edges form a cycle.
    pub fn build(&self, manifest: &Manifest) -> GraphResult<ModuleGraph> {
        let mut assembly = Assembly::default();
        let mut seen = BTreeSet::new();

        for feature in &manifest.features {
            if !seen.insert(feature.feature) {
                return Err(GraphError::duplicate("feature", feature.feature.as_str()));
            }
            self.add_feature(&mut assembly, feature)?;
        }

        if let Some(app) = &manifest.app {
            self.add_app(&mut assembly, app)?;
        }

        let graph = ModuleGraph::assemble(assembly.projects, assembly.targets)?;
        tracing::info!(
            projects = graph.projects().len(),
            targets = graph.len(),
            edges = graph.edges().len(),
            "module graph built"
        );
        Ok(graph)
    }

    fn add_feature(&self, assembly: &mut Assembly, manifest: &FeatureManifest) -> GraphResult<()> {
        let feature = manifest.feature;
        FeatureCatalog.ensure_role(feature, Role::Interface)?;

        let policy = manifest.layering.unwrap_or(self.layering);
        let resolver = DependencyResolver::new(&self.naming, policy);
        let factory = TargetFactory::new(&self.naming, &self.settings);
        let _span = tracing::debug_span!("feature", feature = %feature).entered();

        let mut project = ProjectDraft::new(feature.as_str(), self.naming.module_path(feature));

        let dependencies = resolver.resolve_all(
            Consumer::new(feature, Role::Interface),
            &manifest.interface.dependencies,
        )?;
        let interface = factory.feature_interface(
            feature,
            dependencies,
            manifest.interface.resources.clone(),
        )?;
        project.push(assembly, interface);

        if let Some(implementation) = &manifest.implementation {
            let mut dependencies = resolver.resolve_all(
                Consumer::new(feature, Role::Implementation),
                &implementation.dependencies,
            )?;
            let own_interface = resolver.resolve(feature, Role::Interface)?;
            if !dependencies.contains(&own_interface) {
                dependencies.insert(0, own_interface);
            }
            let target = factory.feature_implementation(
                feature,
                dependencies,
                implementation.resources.clone(),
            )?;
            project.push(assembly, target);
        }

        for test in &manifest.tests {
            if test.role == Role::Implementation && manifest.implementation.is_none() {
                return Err(GraphError::unknown(
                    "target",
                    format!("{} under test", self.naming.target_name(feature, test.role)?),
                ));
            }
            let extra =
                resolver.resolve_all(Consumer::new(feature, Role::Test), &test.dependencies)?;
            project.push(assembly, factory.test(feature, test.role, extra)?);
        }

        assembly.projects.push(project.finish());
        Ok(())
    }

    fn add_app(&self, assembly: &mut Assembly, app: &AppManifest) -> GraphResult<()> {
        let resolver = DependencyResolver::new(&self.naming, self.layering);
        let factory = TargetFactory::new(&self.naming, &self.settings);

        let dependencies =
            resolver.resolve_all(Consumer::new(Feature::App, Role::App), &app.dependencies)?;
        if dependencies.is_empty() {
            tracing::warn!(app = %app.name, "app target links no feature modules");
        }

        let mut project =
            ProjectDraft::new(Feature::App.as_str(), self.naming.module_path(Feature::App));
        let target = factory.make_app(
            &app.name,
            app.sources.clone(),
            dependencies,
            app.info_plist.clone(),
        )?;
        project.push(assembly, target);
        assembly.projects.push(project.finish());
        Ok(())
    }
}

/// Targets and projects collected before validation.
#[derive(Default)]
struct Assembly {
    targets: Vec<Target>,
    projects: Vec<Project>,
}

struct ProjectDraft(Project);

impl ProjectDraft {
    fn new(name: &str, path: String) -> Self {
        Self(Project {
            name: name.to_string(),
            path,
            targets: Vec::new(),
        })
    }

    fn push(&mut self, assembly: &mut Assembly, target: Target) {
        self.0.targets.push(TargetId::new(assembly.targets.len()));
        assembly.targets.push(target);
    }

    fn finish(self) -> Project {
        self.0
    }
}
