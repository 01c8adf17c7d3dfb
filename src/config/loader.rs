// modgraph: Feature Module Build-Graph Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Manifest loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file_optional(modgraph.toml)
//!   .add_toml_file(--manifest) ...
//!   .with_env_prefix(MODGRAPH)
//!   .set(key, value)
//!        |
//!        v
//!    build() --> Config
//! ```

use anyhow::Context as _;
use std::path::{Path, PathBuf};

use super::Config;
use crate::error::{ConfigError, ModgraphError, Result};

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    files: Vec<(String, PathBuf)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            files: Vec::new(),
        }
    }

    /// Adds a required TOML manifest.
    ///
    /// The file is read when `build()` is called. A missing file or invalid
    /// TOML makes `build()` fail.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(true));
        self.files.push(("manifest".to_string(), p.to_path_buf()));
        self
    }

    /// Adds every path in order; later files override earlier ones.
    #[must_use]
    pub fn add_toml_files<I, P>(self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        paths
            .into_iter()
            .fold(self, |loader, path| loader.add_toml_file(path))
    }

    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(false));
        if p.exists() {
            self.files.push(("optional".to_string(), p.to_path_buf()));
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.files
            .push(("string".to_string(), PathBuf::from("<string>")));
        self
    }

    /// Enables `PREFIX_SECTION__KEY` environment overrides.
    ///
    /// Nested keys are split on `__` so that keys containing `_` survive.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Sets a configuration override.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or if the value cannot be converted
    /// to a configuration value.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self.builder.set_override(key, value).map_err(|e| {
            ModgraphError::from(ConfigError::InvalidValue {
                section: "override".to_string(),
                key: key.to_string(),
                message: e.to_string(),
            })
        })?;
        Ok(self)
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A required manifest is missing.
    /// - A manifest has invalid TOML syntax.
    /// - Environment variables cannot be parsed.
    /// - The merged configuration does not match the `Config` structure.
    pub fn build(self) -> Result<Config> {
        let sources = self.files.len();
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            ),
            None => self.builder,
        };
        let cfg = builder.build().context("failed to read workspace manifest")?;
        let config: Config = cfg
            .try_deserialize()
            .with_context(|| format!("invalid workspace manifest ({sources} sources)"))?;
        tracing::debug!(
            sources,
            features = config.features.len(),
            "configuration loaded"
        );
        Ok(config)
    }

    #[must_use]
    pub fn loaded_files(&self) -> Vec<(String, PathBuf)> {
        self.files.clone()
    }

    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, (source, path))| format!("{}. [{}] {}", i + 1, source, path.display()))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
