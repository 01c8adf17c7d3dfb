// modgraph: Feature Module Build-Graph Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Feature registry for resolving feature names, aliases and globs.
//!
//! ```text
//! input ["core", "Net*"]
//!   resolve_aliases: "core" --> [Home, Networking]
//!   match_pattern:   "Net*" --> [Network, Networking]
//!   dedupe + preserve order
//! ```

use std::collections::BTreeSet;

use anyhow::Context;
use wax::{Glob, Program};

use crate::config::types::Aliases;
use crate::error::Result;
use crate::graph::{Feature, FeatureCatalog};

/// Registry for looking up declared features by name or pattern.
pub struct FeatureRegistry {
    features: BTreeSet<Feature>,
    aliases: Aliases,
}

impl FeatureRegistry {
    #[must_use]
    pub const fn new(aliases: Aliases) -> Self {
        Self {
            features: BTreeSet::new(),
            aliases,
        }
    }

    pub fn register(&mut self, feature: Feature) {
        self.features.insert(feature);
    }

    pub fn register_all(&mut self, features: impl IntoIterator<Item = Feature>) {
        self.features.extend(features);
    }

    #[must_use]
    pub const fn features(&self) -> &BTreeSet<Feature> {
        &self.features
    }

    fn alias(&self, name: &str) -> Option<&Vec<String>> {
        self.aliases.get(name).or_else(|| {
            self.aliases
                .iter()
                .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
                .map(|(_, targets)| targets)
        })
    }

    /// Expands aliases, recursively, in a list of patterns.
    ///
    /// Non-alias patterns are returned as-is. An alias reached again while it
    /// is being expanded is skipped.
    #[must_use]
    pub fn resolve_aliases(&self, patterns: &[String]) -> Vec<String> {
        let mut result = Vec::new();
        self.expand_into(patterns, &mut Vec::new(), &mut result);
        result
    }

    fn expand_into<'a>(
        &'a self,
        patterns: &'a [String],
        stack: &mut Vec<&'a str>,
        result: &mut Vec<String>,
    ) {
        for pattern in patterns {
            match self.alias(pattern) {
                Some(_) if stack.contains(&pattern.as_str()) => {
                    tracing::warn!(alias = %pattern, "alias refers to itself");
                }
                Some(targets) => {
                    stack.push(pattern);
                    self.expand_into(targets, stack, result);
                    stack.pop();
                }
                None => result.push(pattern.clone()),
            }
        }
    }

    /// Matches a name or glob pattern against the registered features.
    ///
    /// Plain names match case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not a valid glob.
    pub fn match_pattern(&self, pattern: &str) -> Result<Vec<Feature>> {
        if let Ok(feature) = FeatureCatalog.feature(pattern) {
            return Ok(self
                .features
                .contains(&feature)
                .then_some(feature)
                .into_iter()
                .collect());
        }

        let glob =
            Glob::new(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;

        Ok(self
            .features
            .iter()
            .copied()
            .filter(|feature| glob.is_match(feature.as_str()))
            .collect())
    }

    /// Resolves feature specifications to registered features.
    ///
    /// Aliases are expanded first, then every pattern is matched. The result
    /// keeps first-seen order without duplicates.
    ///
    /// # Errors
    ///
    /// Returns an error if any specification is an invalid glob pattern.
    pub fn resolve(&self, specs: &[String]) -> Result<Vec<Feature>> {
        let expanded = self.resolve_aliases(specs);

        let mut result = Vec::new();
        let mut seen = BTreeSet::new();

        for pattern in &expanded {
            let matches = self.match_pattern(pattern)?;

            if matches.is_empty() {
                tracing::warn!(pattern = %pattern, "pattern matched no declared feature");
            }

            for feature in matches {
                if seen.insert(feature) {
                    result.push(feature);
                }
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests;
