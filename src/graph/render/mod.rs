// modgraph: Feature Module Build-Graph Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Human-readable and Graphviz renderings of a [`ModuleGraph`].

use std::borrow::Cow;
use std::fmt::Write as _;

use super::module::ModuleGraph;
use super::target::TargetDependency;

/// Renders projects, targets and their dependencies as indented text.
///
/// ```text
/// Home (Modules/uHome)
///   HomeInterface [framework] com.smartshop.homeinterface.framework
///   Home [framework] com.smartshop.home.framework
///     -> HomeInterface (Modules/uHome)
/// ```
#[must_use]
pub fn render_text(graph: &ModuleGraph) -> String {
    let mut out = String::new();

    for project in graph.projects() {
        let _ = writeln!(out, "{} ({})", project.name, project.path);
        for target in project.targets.iter().filter_map(|&id| graph.target(id)) {
            let _ = writeln!(
                out,
                "  {} [{}] {}",
                target.name(),
                target.product(),
                target.bundle_id()
            );
            for dependency in target.dependencies() {
                let _ = writeln!(out, "    -> {dependency}");
            }
        }
    }

    out
}

/// Renders the build order, one target per line.
#[must_use]
pub fn render_order(graph: &ModuleGraph) -> String {
    let mut out = String::new();
    for (step, target) in graph
        .build_order()
        .iter()
        .filter_map(|&id| graph.target(id))
        .enumerate()
    {
        let _ = writeln!(out, "{}. {}", step + 1, target.name());
    }
    out
}

/// Renders a Graphviz digraph with one cluster per project.
///
/// Package products are drawn as dashed boxes outside every cluster.
#[must_use]
pub fn render_dot(graph: &ModuleGraph) -> String {
    let mut out = String::from("digraph modules {\n  rankdir=LR;\n  node [shape=box];\n");

    for (i, project) in graph.projects().iter().enumerate() {
        let _ = writeln!(out, "  subgraph cluster_{i} {{");
        let _ = writeln!(out, "    label=\"{}\";", escape_dot(&project.name));
        for target in project.targets.iter().filter_map(|&id| graph.target(id)) {
            let _ = writeln!(out, "    \"{}\";", escape_dot(target.name()));
        }
        out.push_str("  }\n");
    }

    for edge in graph.edges() {
        if let (Some(from), Some(to)) = (graph.target(edge.from), graph.target(edge.to)) {
            let _ = writeln!(
                out,
                "  \"{}\" -> \"{}\";",
                escape_dot(from.name()),
                escape_dot(to.name())
            );
        }
    }

    for target in graph.targets() {
        for dependency in target.dependencies() {
            if let TargetDependency::Package { product } = dependency {
                let _ = writeln!(
                    out,
                    "  \"{}\" -> \"{product}\" [style=dashed];",
                    escape_dot(target.name())
                );
            }
        }
    }

    out.push_str("}\n");
    out
}

/// Escapes a DOT quoted identifier.
fn escape_dot(id: &str) -> Cow<'_, str> {
    if id.contains(['"', '\\']) {
        Cow::Owned(id.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        Cow::Borrowed(id)
    }
}
