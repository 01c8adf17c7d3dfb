// modgraph: Feature Module Build-Graph Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for modgraph using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! modgraph [global options] <command>
//! version
//! options
//! manifests
//! list [--aliases] [FEATURE...]
//! graph [--format text|json|dot] [--output FILE] [--no-app] [FEATURE...]
//! order [FEATURE...]
//! resolve <FEATURE> <ROLE> [--consumer ROLE:FEATURE]
//! check
//! ```

pub mod global;
pub mod graph;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::graph::{GraphArgs, ListArgs, OrderArgs, ResolveArgs};
use clap::{Parser, Subcommand};

/// Feature Module Build-Graph Builder
///
/// Builds the target graph of a feature-modular app workspace.
#[derive(Debug, Parser)]
#[command(
    name = "modgraph",
    author,
    version,
    about = "Feature Module Build-Graph Builder",
    long_about = "modgraph Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Builds the target graph of a feature-modular app workspace:\n\
                  interface and implementation targets per feature, their bundle\n\
                  identifiers, source locations and dependency edges.\n\n\
                  Invoking `modgraph graph` prints the whole graph. Do\n\
                  `modgraph graph <feature>...` to build only some features and\n\
                  what they depend on. See `modgraph <command> --help` for more\n\
                  information about a command.",
    after_help = "MANIFESTS:\n\n\
                  By default, modgraph loads `modgraph.toml` from the current\n\
                  directory if it exists. Additional manifests can be given with\n\
                  --manifest; they are loaded afterwards and override earlier\n\
                  values. MODGRAPH_<SECTION>__<KEY> environment variables override\n\
                  all manifests. Use --no-default-manifest to only use --manifest."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the manifests.
    Options,

    /// Lists the manifests used by modgraph.
    Manifests,

    /// Lists catalog features, declared features or aliases.
    List(ListArgs),

    /// Builds and prints the module graph.
    Graph(GraphArgs),

    /// Prints the build order, dependencies first.
    Order(OrderArgs),

    /// Resolves one feature role to a target reference.
    Resolve(ResolveArgs),

    /// Validates the workspace; exits non-zero on any error.
    Check,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
