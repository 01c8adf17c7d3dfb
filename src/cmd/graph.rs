// modgraph: Feature Module Build-Graph Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Graph, order and check commands.
//!
//! ```text
//! Config --manifest()--> Manifest --select--> ModuleGraphBuilder::build
//!                                                   |
//!                            text / json / dot <----+----> build order
//! ```

use anyhow::{Context, bail};
use std::path::Path;

use crate::cli::graph::{GraphArgs, OrderArgs, OutputFormat};
use crate::cmd::registry::FeatureRegistry;
use crate::config::Config;
use crate::error::{ModgraphError, Result};
use crate::graph::render::{render_dot, render_order, render_text};
use crate::graph::{Manifest, ModuleGraph};

/// Builds the manifest restricted to `patterns`.
///
/// With no patterns every declared feature is kept, and the app unless
/// `keep_app` is false. With patterns the matched features and every
/// feature they depend on are kept; the app is dropped.
///
/// # Errors
///
/// Returns an error if the manifest is invalid, a pattern is not a valid
/// glob, or the patterns match no declared feature.
pub fn select_manifest(config: &Config, patterns: &[String], keep_app: bool) -> Result<Manifest> {
    let manifest = config.manifest()?;
    if patterns.is_empty() {
        return Ok(manifest.select(|_| true, keep_app));
    }

    let mut registry = FeatureRegistry::new(config.aliases.clone());
    registry.register_all(manifest.features.iter().map(|f| f.feature));

    let roots = registry.resolve(patterns)?;
    if roots.is_empty() {
        bail!("no declared feature matches {}", patterns.join(", "));
    }

    let closure = manifest.dependency_closure(roots);
    tracing::debug!(features = closure.len(), "selected features");
    Ok(manifest.select(|f| closure.contains(&f), false))
}

/// Builds the graph for the selected features.
///
/// # Errors
///
/// See [`select_manifest`] and [`ModuleGraphBuilder::build`](crate::graph::ModuleGraphBuilder::build).
pub fn build_graph(config: &Config, patterns: &[String], keep_app: bool) -> Result<ModuleGraph> {
    let manifest = select_manifest(config, patterns, keep_app)?;
    let graph = config.graph_builder()?.build(&manifest)?;
    Ok(graph)
}

/// Renders a graph in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_graph(graph: &ModuleGraph, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => render_text(graph),
        OutputFormat::Dot => render_dot(graph),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(graph)?;
            json.push('\n');
            json
        }
    })
}

/// Main handler for graph command.
///
/// # Errors
///
/// Returns an error if the graph cannot be built or the output file cannot
/// be written.
pub fn run_graph_command(args: &GraphArgs, config: &Config) -> Result<()> {
    let graph = build_graph(config, &args.features, !args.no_app)?;
    let rendered = render_graph(&graph, args.format)?;

    match &args.output {
        Some(path) => write_output(path, &rendered)?,
        None => print!("{rendered}"),
    }
    Ok(())
}

fn write_output(path: &Path, rendered: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(ModgraphError::from)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, rendered)
        .map_err(ModgraphError::from)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = rendered.len(), "graph written");
    Ok(())
}

/// Main handler for order command.
///
/// # Errors
///
/// Returns an error if the graph cannot be built.
pub fn run_order_command(args: &OrderArgs, config: &Config) -> Result<()> {
    let graph = build_graph(config, &args.features, true)?;
    print!("{}", render_order(&graph));
    Ok(())
}

/// Main handler for check command.
///
/// # Errors
///
/// Returns the first error that keeps the workspace from building.
pub fn run_check_command(config: &Config) -> Result<()> {
    let graph = build_graph(config, &[], true)?;
    println!(
        "ok: {} projects, {} targets, {} edges",
        graph.projects().len(),
        graph.len(),
        graph.edges().len()
    );
    Ok(())
}
