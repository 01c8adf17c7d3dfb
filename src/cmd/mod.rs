// modgraph: Feature Module Build-Graph Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   config (options, manifests), list, graph (graph, order, check), resolve
//! ```

pub mod config;
pub mod graph;
pub mod list;
pub mod registry;
pub mod resolve;
