// modgraph: Feature Module Build-Graph Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Workspace manifest loading for modgraph.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. modgraph.toml (cwd)
//! 3. --manifest (repeatable)
//! 4. MODGRAPH_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! MODGRAPH_GLOBAL__OUTPUT_LOG_LEVEL=4          → global.output_log_level = 4
//! MODGRAPH_WORKSPACE__ROOT_NAMESPACE=com.acme. → workspace.root_namespace = "com.acme."
//! ```
//!
//! # Feature-Specific Layering
//!
//! ```toml
//! [layering]
//! allow_cross_feature_implementation = false
//!
//! [features.Home.layering]
//! allow_cross_feature_implementation = true # override for Home only
//! ```

pub mod loader;
pub mod merge;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{GraphResult, Result};
use crate::graph::{
    AppManifest, DependencySpec, FeatureCatalog, FeatureManifest, LayeringPolicy, Manifest,
    ModuleGraphBuilder, ModuleManifest, NamingPolicy, Role, TargetSettings, TestManifest,
};

pub use loader::ConfigLoader;
use merge::merge_layering;
use types::{Aliases, AppConfig, FeatureConfig, GlobalConfig, ModuleConfig, WorkspaceConfig};

/// File name looked up in the working directory.
pub const DEFAULT_MANIFEST: &str = "modgraph.toml";

/// Prefix of environment overrides.
pub const ENV_PREFIX: &str = "MODGRAPH";

/// Complete workspace configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Naming and product settings.
    pub workspace: WorkspaceConfig,
    /// Workspace-wide layering rules.
    pub layering: LayeringPolicy,
    /// Feature aliases.
    pub aliases: Aliases,
    /// Application target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app: Option<AppConfig>,
    /// Feature modules keyed by feature name.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub features: BTreeMap<String, FeatureConfig>,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use modgraph::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("modgraph.toml")
    ///     .add_toml_file("ci/modgraph.toml")
    ///     .with_env_prefix("MODGRAPH")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Naming policy derived from `[workspace]`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Configuration`](crate::error::GraphError::Configuration)
    /// for a malformed root namespace.
    pub fn naming(&self) -> GraphResult<NamingPolicy> {
        NamingPolicy::new(
            self.workspace.root_namespace.as_str(),
            self.workspace.modules_dir.as_str(),
        )
    }

    /// Graph builder configured from `[workspace]` and `[layering]`.
    ///
    /// # Errors
    ///
    /// See [`naming`](Self::naming).
    pub fn graph_builder(&self) -> GraphResult<ModuleGraphBuilder> {
        let settings = TargetSettings::builder()
            .deployment_target(self.workspace.deployment_target.as_str())
            .framework_product(self.workspace.framework_product)
            .destinations(self.workspace.destinations.clone())
            .build();
        Ok(ModuleGraphBuilder::new(self.naming()?, settings, self.layering))
    }

    /// Typed manifest of every declared feature and the app.
    ///
    /// Features are ordered by name. Per-feature `layering` tables are merged
    /// field by field over `[layering]`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownIdentifier`](crate::error::GraphError::UnknownIdentifier)
    /// for feature names, roles or dependency strings outside the catalog.
    pub fn manifest(&self) -> GraphResult<Manifest> {
        let features = self
            .features
            .iter()
            .map(|(name, feature)| self.feature_manifest(name, feature))
            .collect::<GraphResult<Vec<_>>>()?;

        let app = self
            .app
            .as_ref()
            .map(|app| -> GraphResult<AppManifest> {
                Ok(AppManifest {
                    name: app.name.clone(),
                    sources: app.sources.clone(),
                    dependencies: parse_dependencies(&app.dependencies)?,
                    info_plist: app.info_plist.clone(),
                })
            })
            .transpose()?;

        Ok(Manifest { features, app })
    }

    fn feature_manifest(&self, name: &str, config: &FeatureConfig) -> GraphResult<FeatureManifest> {
        let feature = FeatureCatalog.feature(name)?;
        let mut manifest =
            FeatureManifest::new(feature).with_interface(module_manifest(&config.interface)?);

        if let Some(implementation) = &config.implementation {
            manifest = manifest.with_implementation(module_manifest(implementation)?);
        }

        for test in &config.tests {
            let role: Role = test.role.parse()?;
            manifest.tests.push(TestManifest {
                role,
                dependencies: parse_dependencies(&test.dependencies)?,
            });
        }

        if let Some(layering) = config.layering {
            manifest = manifest.with_layering(merge_layering(self.layering, layering));
        }

        Ok(manifest)
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_workspace_options(&mut options);
        self.format_layering_options(&mut options);
        self.format_feature_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        if let Some(log_file) = &self.global.log_file {
            options.insert("global.log_file".into(), log_file.display().to_string());
        }
    }

    fn format_workspace_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "workspace.root_namespace".into(),
            self.workspace.root_namespace.clone(),
        );
        options.insert(
            "workspace.deployment_target".into(),
            self.workspace.deployment_target.clone(),
        );
        options.insert(
            "workspace.modules_dir".into(),
            self.workspace.modules_dir.clone(),
        );
        options.insert(
            "workspace.destinations".into(),
            self.workspace
                .destinations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        );
        options.insert(
            "workspace.framework_product".into(),
            self.workspace.framework_product.to_string(),
        );
    }

    fn format_layering_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "layering.allow_interface_dependencies".into(),
            self.layering.allow_interface_dependencies.to_string(),
        );
        options.insert(
            "layering.allow_cross_feature_implementation".into(),
            self.layering.allow_cross_feature_implementation.to_string(),
        );
    }

    fn format_feature_options(&self, options: &mut BTreeMap<String, String>) {
        if let Some(app) = &self.app {
            options.insert("app.name".into(), app.name.clone());
            options.insert("app.dependencies".into(), list(&app.dependencies));
            for (key, value) in &app.info_plist {
                options.insert(format!("app.info_plist.{key}"), value.clone());
            }
        }
        for (key, feature) in &self.features {
            let name = FeatureCatalog
                .feature(key)
                .map_or(key.as_str(), |f| f.as_str());
            options.insert(
                format!("features.{name}.interface"),
                list(&feature.interface.dependencies),
            );
            if let Some(implementation) = &feature.implementation {
                options.insert(
                    format!("features.{name}.implementation"),
                    list(&implementation.dependencies),
                );
            }
            if !feature.tests.is_empty() {
                options.insert(
                    format!("features.{name}.tests"),
                    feature.tests.len().to_string(),
                );
            }
        }
    }
}

fn list(values: &[String]) -> String {
    if values.is_empty() {
        "none".to_string()
    } else {
        values.join(", ")
    }
}

fn module_manifest(config: &ModuleConfig) -> GraphResult<ModuleManifest> {
    Ok(ModuleManifest {
        dependencies: parse_dependencies(&config.dependencies)?,
        resources: config.resources.clone(),
    })
}

fn parse_dependencies(raw: &[String]) -> GraphResult<Vec<DependencySpec>> {
    raw.iter().map(|s| s.parse::<DependencySpec>()).collect()
}
