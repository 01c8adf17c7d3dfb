// modgraph: Feature Module Build-Graph Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! List command implementation for modgraph.

use crate::cli::graph::ListArgs;
use crate::cmd::registry::FeatureRegistry;
use crate::config::Config;
use crate::error::Result;
use crate::graph::{ExternalPackage, Feature, FeatureManifest};

/// Lines printed by the list command.
///
/// ```text
/// App         app SmartShop
/// Home        interface, implementation, 1 test
/// Network     -
/// Networking  interface, implementation
/// ```
///
/// # Errors
///
/// Returns an error if the manifest is invalid or a pattern is not a valid glob.
pub fn list_lines(args: &ListArgs, config: &Config) -> Result<Vec<String>> {
    if args.aliases {
        return Ok(config
            .aliases
            .iter()
            .map(|(name, targets)| format!("{} = {}", name, targets.join(", ")))
            .collect());
    }

    let manifest = config.manifest()?;
    let features: Vec<Feature> = if args.features.is_empty() {
        Feature::ALL.to_vec()
    } else {
        let mut registry = FeatureRegistry::new(config.aliases.clone());
        registry.register_all(manifest.features.iter().map(|f| f.feature));
        let mut matched = registry.resolve(&args.features)?;
        matched.sort_unstable();
        matched
    };

    let width = features
        .iter()
        .map(|f| f.as_str().len())
        .max()
        .unwrap_or(0);

    let mut lines: Vec<String> = features
        .iter()
        .map(|&feature| {
            let summary = if feature.is_application() {
                manifest
                    .app
                    .as_ref()
                    .map_or_else(|| "-".to_string(), |app| format!("app {}", app.name))
            } else {
                manifest
                    .features
                    .iter()
                    .find(|f| f.feature == feature)
                    .map_or_else(|| "-".to_string(), summarize)
            };
            format!("{:<width$}  {summary}", feature.as_str())
        })
        .collect();

    if args.features.is_empty() {
        let packages: Vec<&str> = ExternalPackage::ALL.iter().map(|p| p.as_str()).collect();
        lines.push(format!("packages: {}", packages.join(", ")));
    }
    Ok(lines)
}

fn summarize(feature: &FeatureManifest) -> String {
    let mut parts = vec!["interface".to_string()];
    if feature.implementation.is_some() {
        parts.push("implementation".to_string());
    }
    match feature.tests.len() {
        0 => {}
        1 => parts.push("1 test".to_string()),
        n => parts.push(format!("{n} tests")),
    }
    parts.join(", ")
}

/// Main handler for list command.
///
/// # Errors
///
/// See [`list_lines`].
pub fn run_list_command(args: &ListArgs, config: &Config) -> Result<()> {
    let lines = list_lines(args, config)?;
    if lines.is_empty() {
        println!(
            "{}",
            if args.aliases {
                "No aliases defined"
            } else {
                "No features found"
            }
        );
    }
    for line in lines {
        println!("{line}");
    }
    Ok(())
}
