// modgraph: Feature Module Build-Graph Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Canonical identifiers and locations derived from (feature, role).
//!
//! ```text
//! (Home, Interface)       name  HomeInterface
//!                         id    com.smartshop.homeinterface.framework
//!                         src   Modules/uHome/Interface/Sources
//! (Home, Implementation)  name  Home
//!                         id    com.smartshop.home.framework
//!                         src   Modules/uHome/Implementation/Sources
//! (Home, Test)            name  HomeTests
//!                         id    com.smartshop.hometests
//!                         src   Modules/uHome/Implementation/Tests/Sources
//! (App, App)              id    com.smartshop.app
//!                         path  Modules/App
//! ```
//!
//! Every function here is pure: equal inputs give equal outputs.

use regex::Regex;
use std::sync::LazyLock;

use super::catalog::{Feature, FeatureCatalog, Role};
use crate::error::{GraphError, GraphResult};

/// Namespace prepended to every bundle identifier.
pub const DEFAULT_ROOT_NAMESPACE: &str = "com.smartshop.";

/// Directory holding all feature modules.
pub const DEFAULT_MODULES_DIR: &str = "Modules";

static NAMESPACE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9-]*(\.[A-Za-z0-9-]+)*\.$").expect("namespace pattern is valid")
});

/// Naming contract shared by the factory, resolver and builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingPolicy {
    root_namespace: String,
    modules_dir: String,
}

impl Default for NamingPolicy {
    fn default() -> Self {
        Self {
            root_namespace: DEFAULT_ROOT_NAMESPACE.to_string(),
            modules_dir: DEFAULT_MODULES_DIR.to_string(),
        }
    }
}

impl NamingPolicy {
    /// Creates a policy for a reverse-DNS namespace ending in `.`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Configuration`] if the namespace is not a dotted
    /// reverse-DNS prefix or the modules directory is empty.
    pub fn new(root_namespace: impl Into<String>, modules_dir: impl Into<String>) -> GraphResult<Self> {
        let root_namespace = root_namespace.into();
        let modules_dir = modules_dir.into().trim_end_matches('/').to_string();

        if !NAMESPACE_PATTERN.is_match(&root_namespace) {
            return Err(GraphError::Configuration {
                target: "workspace".to_string(),
                message: format!(
                    "root namespace '{root_namespace}' must be a reverse-DNS prefix ending in '.'"
                ),
            });
        }
        if modules_dir.is_empty() {
            return Err(GraphError::Configuration {
                target: "workspace".to_string(),
                message: "modules directory must not be empty".to_string(),
            });
        }

        Ok(Self {
            root_namespace,
            modules_dir,
        })
    }

    #[must_use]
    pub fn root_namespace(&self) -> &str {
        &self.root_namespace
    }

    #[must_use]
    pub fn modules_dir(&self) -> &str {
        &self.modules_dir
    }

    /// Target name for a feature in a role.
    ///
    /// `Test` names the implementation test bundle; see
    /// [`test_target_name`](Self::test_target_name) for interface tests.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownIdentifier`] if the feature has no such role.
    pub fn target_name(&self, feature: Feature, role: Role) -> GraphResult<String> {
        FeatureCatalog.ensure_role(feature, role)?;
        Ok(match role {
            Role::Interface => format!("{feature}Interface"),
            Role::Implementation | Role::App => feature.to_string(),
            Role::Test => format!("{feature}Tests"),
        })
    }

    /// Name of the test bundle covering `(feature, tested)`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownIdentifier`] unless `tested` is a library role.
    pub fn test_target_name(&self, feature: Feature, tested: Role) -> GraphResult<String> {
        let under_test = self.library_target_name(feature, tested)?;
        Ok(format!("{under_test}Tests"))
    }

    /// `lowercase(root_namespace + qualifier)`.
    #[must_use]
    pub fn bundle_id(&self, qualifier: &str) -> String {
        format!("{}{}", self.root_namespace, qualifier).to_lowercase()
    }

    /// Bundle identifier of the application.
    #[must_use]
    pub fn app_bundle_id(&self) -> String {
        self.bundle_id("app")
    }

    /// Bundle identifier of a framework target.
    #[must_use]
    pub fn framework_bundle_id(&self, target_name: &str) -> String {
        self.bundle_id(&format!("{target_name}.framework"))
    }

    /// Bundle identifier of a test bundle (its name already ends in `Tests`).
    #[must_use]
    pub fn test_bundle_id(&self, test_target_name: &str) -> String {
        self.bundle_id(test_target_name)
    }

    /// Bundle identifier for a feature in a role.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownIdentifier`] if the feature has no such role.
    pub fn bundle_id_for(&self, feature: Feature, role: Role) -> GraphResult<String> {
        let name = self.target_name(feature, role)?;
        Ok(match role {
            Role::App => self.app_bundle_id(),
            Role::Interface | Role::Implementation => self.framework_bundle_id(&name),
            Role::Test => self.test_bundle_id(&name),
        })
    }

    /// Relative path of the module owning a feature's targets.
    #[must_use]
    pub fn module_path(&self, feature: Feature) -> String {
        if feature.is_application() {
            format!("{}/{feature}", self.modules_dir)
        } else {
            format!("{}/u{feature}", self.modules_dir)
        }
    }

    /// Canonical source directory for a feature in a role.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownIdentifier`] if the feature has no such role.
    pub fn source_dir(&self, feature: Feature, role: Role) -> GraphResult<String> {
        FeatureCatalog.ensure_role(feature, role)?;
        match role.directory() {
            Some(dir) => Ok(format!("{}/{dir}/Sources", self.module_path(feature))),
            None if role == Role::Test => self.test_source_dir(feature, Role::Implementation),
            None => Ok(self.module_path(feature)),
        }
    }

    /// Source directory of the test bundle covering `(feature, tested)`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownIdentifier`] unless `tested` is a library role.
    pub fn test_source_dir(&self, feature: Feature, tested: Role) -> GraphResult<String> {
        self.library_target_name(feature, tested)?;
        let dir = tested
            .directory()
            .ok_or_else(|| GraphError::unknown("role", format!("{tested} under test")))?;
        Ok(format!("{}/{dir}/Tests/Sources", self.module_path(feature)))
    }

    fn library_target_name(&self, feature: Feature, role: Role) -> GraphResult<String> {
        if role.directory().is_none() {
            return Err(GraphError::unknown("role", format!("{role} under test")));
        }
        self.target_name(feature, role)
    }
}
