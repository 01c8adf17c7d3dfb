// modgraph: Feature Module Build-Graph Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Closed catalog of features, roles and external packages.
//!
//! ```text
//! Feature: App | Home | Network | Networking
//! Role:    Interface | Implementation | Test | App
//! Package: Alamofire | SnapKit
//!
//! App         --> {App}
//! other       --> {Interface, Implementation, Test}
//! ```
//!
//! Names parse case-insensitively; anything outside the catalog is an
//! [`GraphError::UnknownIdentifier`].

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::GraphError;

bitflags! {
    /// Set of roles a feature can be built in.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RoleSet: u8 {
        /// Public contract of a feature.
        const INTERFACE = 0x01;

        /// Concrete behavior behind the interface.
        const IMPLEMENTATION = 0x02;

        /// Unit test bundle for one of the library roles.
        const TEST = 0x04;

        /// Application bundle.
        const APP = 0x08;

        /// Roles another target may depend on.
        const LINKABLE = Self::INTERFACE.bits() | Self::IMPLEMENTATION.bits();
    }
}

/// A named, independently buildable product area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feature {
    App,
    Home,
    Network,
    Networking,
}

impl Feature {
    /// Every feature in the catalog, in declaration order.
    pub const ALL: [Self; 4] = [Self::App, Self::Home, Self::Network, Self::Networking];

    /// Canonical name, used verbatim in target names and module paths.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::App => "App",
            Self::Home => "Home",
            Self::Network => "Network",
            Self::Networking => "Networking",
        }
    }

    /// Whether this is the application feature.
    #[must_use]
    pub const fn is_application(self) -> bool {
        matches!(self, Self::App)
    }

    /// Roles this feature can be built in.
    #[must_use]
    pub const fn roles(self) -> RoleSet {
        if self.is_application() {
            RoleSet::APP
        } else {
            RoleSet::INTERFACE.union(RoleSet::IMPLEMENTATION).union(RoleSet::TEST)
        }
    }

    #[must_use]
    pub const fn supports(self, role: Role) -> bool {
        self.roles().contains(role.flag())
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feature {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|feature| feature.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GraphError::unknown("feature", s))
    }
}

/// What a target is built as, relative to its feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Interface,
    Implementation,
    Test,
    App,
}

impl Role {
    pub const ALL: [Self; 4] = [Self::Interface, Self::Implementation, Self::Test, Self::App];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Interface => "interface",
            Self::Implementation => "implementation",
            Self::Test => "test",
            Self::App => "app",
        }
    }

    /// The single-bit [`RoleSet`] for this role.
    #[must_use]
    pub const fn flag(self) -> RoleSet {
        match self {
            Self::Interface => RoleSet::INTERFACE,
            Self::Implementation => RoleSet::IMPLEMENTATION,
            Self::Test => RoleSet::TEST,
            Self::App => RoleSet::APP,
        }
    }

    /// Directory segment under the feature module (`Interface` / `Implementation`).
    ///
    /// Only library roles own such a directory.
    #[must_use]
    pub const fn directory(self) -> Option<&'static str> {
        match self {
            Self::Interface => Some("Interface"),
            Self::Implementation => Some("Implementation"),
            Self::Test | Self::App => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GraphError::unknown("role", s))
    }
}

/// Third-party package products features may link against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExternalPackage {
    Alamofire,
    SnapKit,
}

impl ExternalPackage {
    pub const ALL: [Self; 2] = [Self::Alamofire, Self::SnapKit];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alamofire => "Alamofire",
            Self::SnapKit => "SnapKit",
        }
    }
}

impl fmt::Display for ExternalPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExternalPackage {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|package| package.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GraphError::unknown("package", s))
    }
}

/// Serialize catalog enums by canonical name, deserialize through `FromStr`.
macro_rules! impl_serde_by_name {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: Serializer,
                {
                    serializer.serialize_str(self.as_str())
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    let value = String::deserialize(deserializer)?;
                    value.parse().map_err(serde::de::Error::custom)
                }
            }
        )+
    };
}

impl_serde_by_name!(Feature, Role, ExternalPackage);

/// Lookup facade over the closed catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureCatalog;

impl FeatureCatalog {
    /// Features that own an interface/implementation module.
    pub fn modules(self) -> impl Iterator<Item = Feature> {
        Feature::ALL.into_iter().filter(|f| !f.is_application())
    }

    /// Looks up a feature by name.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownIdentifier`] if the name is not in the catalog.
    pub fn feature(self, name: &str) -> Result<Feature, GraphError> {
        name.parse()
    }

    /// Looks up an external package by name.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownIdentifier`] if the name is not in the catalog.
    pub fn package(self, name: &str) -> Result<ExternalPackage, GraphError> {
        name.parse()
    }

    /// Checks that `feature` can be built in `role`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownIdentifier`] for undefined combinations
    /// such as `App`/`interface` or `Home`/`app`.
    pub fn ensure_role(self, feature: Feature, role: Role) -> Result<(), GraphError> {
        if feature.supports(role) {
            Ok(())
        } else {
            Err(GraphError::unknown("role", format!("{role} for feature {feature}")))
        }
    }
}
