// modgraph: Feature Module Build-Graph Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Graph command arguments.
//!
//! # Feature Selection
//!
//! ```text
//! FEATURE...   names, aliases or globs ("core", "Net*")
//!   --> selected features + everything they depend on
//!   (none)     --> every declared feature and the app
//! ```

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Output format of the `graph` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented projects, targets and dependencies.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
    /// Graphviz digraph.
    Dot,
}

/// Arguments for the `graph` command.
#[derive(Debug, Clone, Default, Args)]
pub struct GraphArgs {
    /// Output format.
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Writes the output to a file instead of stdout.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Leaves the app target out of the graph.
    #[arg(long)]
    pub no_app: bool,

    /// Features to build. Aliases and globs like 'Net*' are supported.
    #[arg(value_name = "FEATURE")]
    pub features: Vec<String>,
}

/// Arguments for the `order` command.
#[derive(Debug, Clone, Default, Args)]
pub struct OrderArgs {
    /// Features to order. Aliases and globs are supported.
    #[arg(value_name = "FEATURE")]
    pub features: Vec<String>,
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    /// Feature providing the target.
    #[arg(value_name = "FEATURE")]
    pub feature: String,

    /// Role of the target: interface or implementation.
    #[arg(value_name = "ROLE")]
    pub role: String,

    /// Checks the edge against the layering rules for this consumer,
    /// e.g. 'implementation:Home'.
    #[arg(short = 'c', long, value_name = "ROLE:FEATURE")]
    pub consumer: Option<String>,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Shows only aliases.
    #[arg(short = 'i', long)]
    pub aliases: bool,

    /// Shows only the declared features matching these patterns.
    #[arg(value_name = "FEATURE")]
    pub features: Vec<String>,
}
