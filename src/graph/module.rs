// modgraph: Feature Module Build-Graph Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The assembled module graph.
//!
//! ```text
//! targets:  [T0, T1, T2, ...]          arena, insertion order
//! projects: [{ name, path, [T0, T1] }] ownership
//! edges:    [T1 -> T0, ...]            consumer -> dependency
//! order:    dependencies first (Kahn, lowest index wins ties)
//! ```

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::target::{Target, TargetDependency, TargetId};
use crate::error::{GraphError, GraphResult};

/// One feature module's build description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub path: String,
    pub targets: Vec<TargetId>,
}

/// A resolved project reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: TargetId,
    pub to: TargetId,
}

/// All targets of a build configuration and the edges between them.
///
/// Graphs come from [`ModuleGraphBuilder`](super::ModuleGraphBuilder) or from
/// deserialization, and both run the same checks: every graph is acyclic with
/// unique names and bundle identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawModuleGraph")]
pub struct ModuleGraph {
    projects: Vec<Project>,
    targets: Vec<Target>,
    edges: Vec<Edge>,
    build_order: Vec<TargetId>,
}

impl ModuleGraph {
    /// Validates `targets` and resolves their project references into edges.
    pub(crate) fn assemble(projects: Vec<Project>, targets: Vec<Target>) -> GraphResult<Self> {
        let index = index_targets(&projects, &targets)?;
        let edges = resolve_edges(&targets, &index)?;
        let build_order = topological_order(&targets, &edges)?;

        Ok(Self {
            projects,
            targets,
            edges,
            build_order,
        })
    }

    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    #[must_use]
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[must_use]
    pub fn target(&self, id: TargetId) -> Option<&Target> {
        self.targets.get(id.index())
    }

    /// Looks up a target by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<TargetId> {
        self.targets
            .iter()
            .position(|t| t.name() == name)
            .map(TargetId::new)
    }

    /// Direct dependencies of `id` inside the graph, in declaration order.
    pub fn dependencies_of(&self, id: TargetId) -> impl Iterator<Item = TargetId> + '_ {
        self.edges
            .iter()
            .filter(move |edge| edge.from == id)
            .map(|edge| edge.to)
    }

    /// Targets ordered so that every target follows its dependencies.
    #[must_use]
    pub fn build_order(&self) -> &[TargetId] {
        &self.build_order
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Serialized form, checked by [`ModuleGraph::assemble`] before use.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawModuleGraph {
    projects: Vec<Project>,
    targets: Vec<Target>,
    edges: Vec<Edge>,
    build_order: Vec<TargetId>,
}

impl TryFrom<RawModuleGraph> for ModuleGraph {
    type Error = GraphError;

    fn try_from(raw: RawModuleGraph) -> GraphResult<Self> {
        let graph = Self::assemble(raw.projects, raw.targets)?;
        if graph.edges != raw.edges || graph.build_order != raw.build_order {
            return Err(GraphError::Configuration {
                target: "graph".to_string(),
                message: "edges or build order do not match the targets".to_string(),
            });
        }
        Ok(graph)
    }
}

type TargetIndex<'a> = HashMap<(&'a str, &'a str), TargetId>;

/// Maps (module path, target name) to arena ids, rejecting collisions.
fn index_targets<'a>(projects: &'a [Project], targets: &'a [Target]) -> GraphResult<TargetIndex<'a>> {
    let mut names = BTreeSet::new();
    let mut bundle_ids = BTreeSet::new();
    for target in targets {
        if !names.insert(target.name()) {
            return Err(GraphError::duplicate("target name", target.name()));
        }
        if !bundle_ids.insert(target.bundle_id()) {
            return Err(GraphError::duplicate("bundle identifier", target.bundle_id()));
        }
    }

    let mut index = HashMap::with_capacity(targets.len());
    for project in projects {
        for &id in &project.targets {
            let target = targets
                .get(id.index())
                .ok_or_else(|| GraphError::unknown("target id", id.index().to_string()))?;
            index.insert((project.path.as_str(), target.name()), id);
        }
    }
    Ok(index)
}

fn resolve_edges(targets: &[Target], index: &TargetIndex<'_>) -> GraphResult<Vec<Edge>> {
    let mut edges = Vec::new();

    for (i, target) in targets.iter().enumerate() {
        for dependency in target.dependencies() {
            let TargetDependency::Project {
                target: name, path, ..
            } = dependency
            else {
                continue;
            };
            let to = index
                .get(&(path.as_str(), name.as_str()))
                .copied()
                .ok_or_else(|| GraphError::unknown("target", dependency.to_string()))?;
            edges.push(Edge {
                from: TargetId::new(i),
                to,
            });
        }
    }

    Ok(edges)
}

/// Kahn's algorithm over consumer -> dependency edges.
fn topological_order(targets: &[Target], edges: &[Edge]) -> GraphResult<Vec<TargetId>> {
    let count = targets.len();
    let mut pending = vec![0usize; count];
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); count];

    for edge in edges {
        pending[edge.from.index()] += 1;
        dependents[edge.to.index()].push(edge.from.index());
    }

    let mut ready: BTreeSet<usize> = (0..count).filter(|&i| pending[i] == 0).collect();
    let mut order = Vec::with_capacity(count);

    while let Some(next) = ready.pop_first() {
        order.push(TargetId::new(next));
        for &dependent in &dependents[next] {
            pending[dependent] -= 1;
            if pending[dependent] == 0 {
                ready.insert(dependent);
            }
        }
    }

    if order.len() == count {
        return Ok(order);
    }

    let stuck: BTreeSet<usize> = (0..count).filter(|&i| pending[i] > 0).collect();
    Err(GraphError::CyclicGraph {
        cycle: find_cycle(targets, edges, &stuck),
    })
}

/// Walks first-dependency links inside the unresolved set until a node repeats.
///
/// Every unresolved node still has an unresolved dependency, so the walk
/// always closes a cycle.
fn find_cycle(targets: &[Target], edges: &[Edge], stuck: &BTreeSet<usize>) -> Vec<String> {
    let mut next_hop = BTreeMap::new();
    for edge in edges {
        let (from, to) = (edge.from.index(), edge.to.index());
        if stuck.contains(&from) && stuck.contains(&to) {
            next_hop.entry(from).or_insert(to);
        }
    }

    let mut path: Vec<usize> = Vec::new();
    let mut current = stuck.first().copied();
    while let Some(node) = current {
        if let Some(start) = path.iter().position(|&n| n == node) {
            let mut cycle: Vec<String> = path[start..]
                .iter()
                .map(|&n| targets[n].name().to_string())
                .collect();
            cycle.push(targets[node].name().to_string());
            return cycle;
        }
        path.push(node);
        current = next_hop.get(&node).copied();
    }

    path.into_iter()
        .map(|n| targets[n].name().to_string())
        .collect()
}
