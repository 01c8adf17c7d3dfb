// modgraph: Feature Module Build-Graph Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for modgraph.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, WorkspaceConfig, LayeringPolicy, AppConfig,
//!         features: name → FeatureConfig
//! Aliases: alias name → [feature patterns]
//! ```
//!
//! Feature names and dependency strings stay raw here; they are checked
//! against the catalog when the manifest is built.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::merge::LayeringOverride;
use crate::graph::{Destination, Product};
use crate::graph::factory::DEFAULT_DEPLOYMENT_TARGET;
use crate::graph::naming::{DEFAULT_MODULES_DIR, DEFAULT_ROOT_NAMESPACE};
use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for stdout output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Workspace-wide naming and product settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorkspaceConfig {
    /// Reverse-DNS prefix for bundle identifiers, ending in `.`.
    pub root_namespace: String,
    /// Minimum OS version for every target.
    pub deployment_target: String,
    /// Platforms every target is built for.
    pub destinations: Vec<Destination>,
    /// Directory holding the feature modules.
    pub modules_dir: String,
    /// Product for interface and implementation targets.
    pub framework_product: Product,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            root_namespace: DEFAULT_ROOT_NAMESPACE.to_string(),
            deployment_target: DEFAULT_DEPLOYMENT_TARGET.to_string(),
            destinations: vec![Destination::Ios],
            modules_dir: DEFAULT_MODULES_DIR.to_string(),
            framework_product: Product::Framework,
        }
    }
}

/// Feature aliases mapping alias names to feature patterns.
pub type Aliases = BTreeMap<String, Vec<String>>;

/// The application target.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    pub name: String,
    #[serde(default)]
    pub sources: Vec<String>,
    /// Dependency strings, e.g. `interface:Home`.
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Keys added to the default Info.plist.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub info_plist: BTreeMap<String, String>,
}

/// Dependencies and resources of one library target.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModuleConfig {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<String>,
}

/// A test bundle declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TestConfig {
    /// Role under test: `interface` or `implementation`.
    #[serde(default = "default_test_role")]
    pub role: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
}

fn default_test_role() -> String {
    "implementation".to_string()
}

/// One `[features.<Name>]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeatureConfig {
    /// Interface target; built even when the section is absent.
    pub interface: ModuleConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implementation: Option<ModuleConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tests: Vec<TestConfig>,
    /// Field-level override of `[layering]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layering: Option<LayeringOverride>,
}
