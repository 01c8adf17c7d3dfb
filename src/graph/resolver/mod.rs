// modgraph: Feature Module Build-Graph Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dependency resolution and layering rules.
//!
//! ```text
//! resolve(Networking, Interface)
//!   --> Project { target: NetworkingInterface, path: Modules/uNetworking }
//!
//! consumer            may depend on
//! ----------------    ----------------------------------------------
//! App                 any interface, any implementation
//! Implementation(F)   interface(*), implementation(G != F) if allowed
//! Interface(F)        interface(G != F) if allowed, never implementations
//! Test(F)             interface(*), implementation(F),
//!                     implementation(G != F) if allowed
//! any                 external packages
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::catalog::{ExternalPackage, Feature, FeatureCatalog, Role, RoleSet};
use super::naming::NamingPolicy;
use super::target::TargetDependency;
use crate::error::{GraphError, GraphResult};

/// Which cross-module edges are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayeringPolicy {
    /// Interfaces may depend on other features' interfaces.
    pub allow_interface_dependencies: bool,
    /// Implementations (and tests) may depend on other features' implementations.
    pub allow_cross_feature_implementation: bool,
}

impl Default for LayeringPolicy {
    fn default() -> Self {
        Self {
            allow_interface_dependencies: true,
            allow_cross_feature_implementation: false,
        }
    }
}

/// The target declaring a dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Consumer {
    pub feature: Feature,
    pub role: Role,
}

impl Consumer {
    #[must_use]
    pub const fn new(feature: Feature, role: Role) -> Self {
        Self { feature, role }
    }
}

impl fmt::Display for Consumer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.role, self.feature)
    }
}

/// Parses `role:Feature`, the same shape as [`Display`](fmt::Display).
impl FromStr for Consumer {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (role, feature) = s
            .split_once(':')
            .ok_or_else(|| GraphError::unknown("consumer", s))?;
        let feature = FeatureCatalog.feature(feature)?;
        let role: Role = role.parse()?;
        FeatureCatalog.ensure_role(feature, role)?;
        Ok(Self::new(feature, role))
    }
}

/// A declared dependency, written `interface:Home`, `implementation:Home`
/// or `package:Alamofire`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencySpec {
    Feature { feature: Feature, role: Role },
    Package(ExternalPackage),
}

impl DependencySpec {
    #[must_use]
    pub const fn interface(feature: Feature) -> Self {
        Self::Feature {
            feature,
            role: Role::Interface,
        }
    }

    #[must_use]
    pub const fn implementation(feature: Feature) -> Self {
        Self::Feature {
            feature,
            role: Role::Implementation,
        }
    }

    #[must_use]
    pub const fn package(package: ExternalPackage) -> Self {
        Self::Package(package)
    }
}

impl fmt::Display for DependencySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Feature { feature, role } => write!(f, "{role}:{feature}"),
            Self::Package(package) => write!(f, "package:{package}"),
        }
    }
}

impl FromStr for DependencySpec {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, name) = s
            .split_once(':')
            .ok_or_else(|| GraphError::unknown("dependency", s))?;

        if kind.trim().eq_ignore_ascii_case("package") {
            return Ok(Self::Package(FeatureCatalog.package(name)?));
        }

        let role: Role = kind.parse()?;
        if !RoleSet::LINKABLE.contains(role.flag()) {
            return Err(GraphError::unknown("dependency", s));
        }
        Ok(Self::Feature {
            feature: FeatureCatalog.feature(name)?,
            role,
        })
    }
}

/// Builds a project reference without any layering check.
pub(crate) fn project_reference(
    naming: &NamingPolicy,
    feature: Feature,
    role: Role,
) -> GraphResult<TargetDependency> {
    if !RoleSet::LINKABLE.contains(role.flag()) {
        return Err(GraphError::unknown(
            "role",
            format!("{role} cannot be a dependency"),
        ));
    }
    Ok(TargetDependency::Project {
        target: naming.target_name(feature, role)?,
        path: naming.module_path(feature),
        feature,
        role,
    })
}

/// Turns (feature, role) pairs into target references.
#[derive(Debug, Clone, Copy)]
pub struct DependencyResolver<'a> {
    naming: &'a NamingPolicy,
    policy: LayeringPolicy,
}

impl<'a> DependencyResolver<'a> {
    #[must_use]
    pub const fn new(naming: &'a NamingPolicy, policy: LayeringPolicy) -> Self {
        Self { naming, policy }
    }

    #[must_use]
    pub const fn policy(&self) -> LayeringPolicy {
        self.policy
    }

    /// Reference to the target of `feature` in `role`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownIdentifier`] unless `role` is `Interface`
    /// or `Implementation` of a non-application feature.
    pub fn resolve(&self, feature: Feature, role: Role) -> GraphResult<TargetDependency> {
        project_reference(self.naming, feature, role)
    }

    /// Reference to `feature` in `role`, as declared by `consumer`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownIdentifier`] for undefined references and
    /// [`GraphError::IllegalLayering`] when the edge breaks the layering policy.
    pub fn resolve_for(
        &self,
        consumer: Consumer,
        feature: Feature,
        role: Role,
    ) -> GraphResult<TargetDependency> {
        let dependency = self.resolve(feature, role)?;
        self.check_layering(consumer, feature, role)?;
        Ok(dependency)
    }

    /// Resolves a declared dependency for `consumer`.
    ///
    /// # Errors
    ///
    /// See [`resolve_for`](Self::resolve_for).
    pub fn resolve_spec(
        &self,
        consumer: Consumer,
        spec: DependencySpec,
    ) -> GraphResult<TargetDependency> {
        match spec {
            DependencySpec::Feature { feature, role } => self.resolve_for(consumer, feature, role),
            DependencySpec::Package(product) => Ok(TargetDependency::Package { product }),
        }
    }

    /// Resolves every declared dependency for `consumer`, in order.
    ///
    /// # Errors
    ///
    /// Fails on the first dependency that cannot be resolved.
    pub fn resolve_all(
        &self,
        consumer: Consumer,
        specs: &[DependencySpec],
    ) -> GraphResult<Vec<TargetDependency>> {
        specs
            .iter()
            .map(|spec| self.resolve_spec(consumer, *spec))
            .collect()
    }

    fn check_layering(&self, consumer: Consumer, feature: Feature, role: Role) -> GraphResult<()> {
        let same_feature = consumer.feature == feature;
        let illegal = |reason: &str| {
            Err(GraphError::IllegalLayering {
                consumer: consumer.to_string(),
                dependency: format!("{role}:{feature}"),
                reason: reason.to_string(),
            })
        };

        match (consumer.role, role) {
            (Role::Interface, Role::Implementation) => {
                illegal("interfaces never depend on implementations")
            }
            (Role::Interface | Role::Implementation, _) if same_feature && consumer.role == role => {
                illegal("a target cannot depend on itself")
            }
            (Role::Interface, Role::Interface) if !self.policy.allow_interface_dependencies => {
                illegal("interface-to-interface dependencies are disabled")
            }
            (Role::Implementation | Role::Test, Role::Implementation)
                if !same_feature && !self.policy.allow_cross_feature_implementation =>
            {
                illegal("only interfaces of other features may be depended on")
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests;
