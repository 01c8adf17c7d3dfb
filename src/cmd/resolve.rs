// modgraph: Feature Module Build-Graph Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Resolve command implementation for modgraph.

use crate::cli::graph::ResolveArgs;
use crate::config::Config;
use crate::error::Result;
use crate::graph::{Consumer, DependencyResolver, FeatureCatalog, Role, TargetDependency};

/// Resolves `args` to a target reference.
///
/// The consumer's feature-specific layering applies when it declares one.
///
/// # Errors
///
/// Returns an error for names outside the catalog, roles that cannot be
/// depended on, or an edge the layering policy forbids.
pub fn resolve_dependency(args: &ResolveArgs, config: &Config) -> Result<TargetDependency> {
    let feature = FeatureCatalog.feature(&args.feature)?;
    let role: Role = args.role.parse()?;
    let naming = config.naming()?;

    let Some(consumer) = &args.consumer else {
        return Ok(DependencyResolver::new(&naming, config.layering).resolve(feature, role)?);
    };

    let consumer: Consumer = consumer.parse()?;
    let policy = config
        .manifest()?
        .features
        .iter()
        .find(|f| f.feature == consumer.feature)
        .and_then(|f| f.layering)
        .unwrap_or(config.layering);

    Ok(DependencyResolver::new(&naming, policy).resolve_for(consumer, feature, role)?)
}

/// Main handler for resolve command.
///
/// # Errors
///
/// See [`resolve_dependency`].
pub fn run_resolve_command(args: &ResolveArgs, config: &Config) -> Result<()> {
    let dependency = resolve_dependency(args, config)?;
    println!("{dependency}");
    Ok(())
}
