// modgraph: Feature Module Build-Graph Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!      ModgraphError (16 bytes)
//!             |
//!      +------+------+
//!      |      |      |
//!      v      v      v
//!    Graph   Cfg     Io
//!     Box    Box    Box
//!
//! Sub-errors (unboxed internally):
//!   Graph   UnknownIdentifier, Configuration, IllegalLayering,
//!           CyclicGraph, DuplicateIdentifier
//!   Config  MissingKey, InvalidValue
//!
//! Command handlers work in `anyhow::Result`; typed errors convert with `?`.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`ModgraphError`].
pub type ModgraphResult<T> = std::result::Result<T, ModgraphError>;

/// Result type for graph construction.
pub type GraphResult<T> = std::result::Result<T, GraphError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum ModgraphError {
    /// Graph construction failed.
    #[error("graph error: {0}")]
    Graph(#[from] Box<GraphError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for ModgraphError {
                fn from(err: $error) -> Self {
                    ModgraphError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GraphError => Graph,
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Graph Errors ---

/// Errors raised while constructing a module graph.
///
/// Construction is deterministic, so none of these are worth retrying with
/// the same input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Unrecognized feature, role, package or target reference.
    #[error("unknown {kind}: {name}")]
    UnknownIdentifier { kind: &'static str, name: String },

    /// A target description cannot be built as declared.
    #[error("invalid configuration for target '{target}': {message}")]
    Configuration { target: String, message: String },

    /// A dependency edge violates the interface/implementation layering.
    #[error("illegal dependency from '{consumer}' on '{dependency}': {reason}")]
    IllegalLayering {
        consumer: String,
        dependency: String,
        reason: String,
    },

    /// The assembled graph contains a cycle.
    #[error("dependency cycle detected: {}", cycle.join(" -> "))]
    CyclicGraph { cycle: Vec<String> },

    /// Two targets share a name or bundle identifier.
    #[error("duplicate {kind}: {value}")]
    DuplicateIdentifier { kind: &'static str, value: String },
}

impl GraphError {
    pub(crate) fn unknown(kind: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownIdentifier {
            kind,
            name: name.into(),
        }
    }

    pub(crate) fn duplicate(kind: &'static str, value: impl Into<String>) -> Self {
        Self::DuplicateIdentifier {
            kind,
            value: value.into(),
        }
    }
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}
