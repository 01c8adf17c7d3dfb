// modgraph: Feature Module Build-Graph Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --manifest FILE   ← Additional manifests (can repeat)
//! --log-level N     ← Console verbosity (0-6)
//! --file-log-level  ← File verbosity (overrides --log-level)
//! --log-file FILE   ← global.log_file override
//! --set KEY=VAL     ← Direct config override
//!
//! Precedence: CLI flags > --set > env > --manifest > modgraph.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::error::{ConfigError, ModgraphResult};

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML manifest(s).
    /// Can be specified multiple times.
    #[arg(short = 'm', long = "manifest", value_name = "FILE", action = clap::ArgAction::Append)]
    pub manifests: Vec<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Sets an option, such as 'workspace.deployment_target=17.0'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append)]
    pub options: Vec<String>,

    /// Disables auto loading of modgraph.toml, only uses --manifest.
    #[arg(long = "no-default-manifest")]
    pub no_default_manifest: bool,
}

impl GlobalOptions {
    /// Converts command-line options to `(key, value)` configuration overrides.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a `--set` option is not of the form
    /// `KEY=VALUE`.
    pub fn to_config_overrides(&self) -> ModgraphResult<Vec<(String, String)>> {
        let mut overrides = self
            .options
            .iter()
            .map(|option| parse_override(option))
            .collect::<ModgraphResult<Vec<_>>>()?;

        if let Some(level) = self.log_level {
            overrides.push(("global.output_log_level".into(), level.to_string()));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(("global.file_log_level".into(), level.to_string()));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(("global.log_file".into(), path.display().to_string()));
        }

        Ok(overrides)
    }
}

fn parse_override(option: &str) -> ModgraphResult<(String, String)> {
    let (key, value) = option
        .split_once('=')
        .ok_or_else(|| ConfigError::InvalidValue {
            section: "cli".to_string(),
            key: "--set".to_string(),
            message: format!("expected KEY=VALUE, got '{option}'"),
        })?;

    let key = key.trim();
    if key.is_empty() {
        return Err(ConfigError::MissingKey {
            section: "cli".to_string(),
            key: format!("--set {option}"),
        }
        .into());
    }
    Ok((key.to_string(), value.trim().to_string()))
}
