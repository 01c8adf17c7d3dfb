// modgraph: Feature Module Build-Graph Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Feature-module build graph.
//!
//! ```text
//!   catalog (Feature, Role, ExternalPackage)
//!      |                 |
//!      v                 v
//!   naming  ------>  resolver (LayeringPolicy)
//!      |                 |
//!      v                 |
//!   factory              |
//!      |                 |
//!      +------> builder <+
//!                  |
//!                  v
//!             ModuleGraph --> render (text / dot) / serde
//! ```
//!
//! # Example
//!
//! ```
//! use modgraph::graph::{
//!     DependencySpec, Feature, FeatureManifest, ModuleGraphBuilder, ModuleManifest,
//! };
//!
//! let home = FeatureManifest::new(Feature::Home).with_implementation(
//!     ModuleManifest::with_dependencies([DependencySpec::interface(Feature::Networking)]),
//! );
//! let networking =
//!     FeatureManifest::new(Feature::Networking).with_implementation(ModuleManifest::default());
//!
//! let graph = ModuleGraphBuilder::default().build_features(&[home, networking])?;
//! assert_eq!(graph.len(), 4);
//! # Ok::<(), modgraph::error::GraphError>(())
//! ```

pub mod builder;
pub mod catalog;
pub mod factory;
pub mod manifest;
pub mod module;
pub mod naming;
pub mod render;
pub mod resolver;
pub mod target;

pub use builder::ModuleGraphBuilder;
pub use catalog::{ExternalPackage, Feature, FeatureCatalog, Role, RoleSet};
pub use factory::{TargetFactory, TargetSettings};
pub use manifest::{AppManifest, FeatureManifest, Manifest, ModuleManifest, TestManifest};
pub use module::{Edge, ModuleGraph, Project};
pub use naming::NamingPolicy;
pub use resolver::{Consumer, DependencyResolver, DependencySpec, LayeringPolicy};
pub use target::{Destination, Product, Target, TargetDependency, TargetId};
