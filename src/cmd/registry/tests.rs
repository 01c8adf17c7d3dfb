// modgraph: Feature Module Build-Graph Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::BTreeMap;

use super::FeatureRegistry;
use crate::config::types::Aliases;
use crate::graph::Feature;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

fn create_test_registry() -> FeatureRegistry {
    let mut aliases: Aliases = BTreeMap::new();
    aliases.insert("core".to_string(), strings(&["Home", "Networking"]));
    aliases.insert("net".to_string(), strings(&["Net*"]));
    aliases.insert("everything".to_string(), strings(&["core", "net"]));
    aliases.insert("loop".to_string(), strings(&["Home", "loop"]));

    let mut registry = FeatureRegistry::new(aliases);
    registry.register_all([Feature::Home, Feature::Network, Feature::Networking]);
    registry
}

#[test]
fn test_registry_register() {
    let mut registry = FeatureRegistry::new(BTreeMap::new());
    registry.register(Feature::Networking);
    registry.register(Feature::Home);
    registry.register(Feature::Home);

    let features: Vec<_> = registry.features().iter().copied().collect();
    assert_eq!(features, [Feature::Home, Feature::Networking]);
}

#[test]
fn test_resolve_aliases_nested() {
    let registry = create_test_registry();
    let result = registry.resolve_aliases(&strings(&["everything", "App"]));
    assert_eq!(result, ["Home", "Networking", "Net*", "App"]);
}

#[test]
fn test_resolve_aliases_self_reference() {
    let registry = create_test_registry();
    assert_eq!(registry.resolve_aliases(&strings(&["loop"])), ["Home"]);
}

#[test]
fn test_match_pattern_case_insensitive_name() {
    let registry = create_test_registry();
    assert_eq!(registry.match_pattern("home").unwrap(), [Feature::Home]);
    assert!(registry.match_pattern("App").unwrap().is_empty());
}

#[test]
fn test_match_pattern_glob() {
    let registry = create_test_registry();
    assert_eq!(
        registry.match_pattern("Net*").unwrap(),
        [Feature::Network, Feature::Networking]
    );
    assert_eq!(
        registry.match_pattern("*").unwrap().len(),
        registry.features().len()
    );
}

#[test]
fn test_match_pattern_invalid_glob() {
    let registry = create_test_registry();
    let err = registry.match_pattern("Net[").unwrap_err();
    assert!(err.to_string().contains("Invalid glob pattern: Net["));
}

#[test]
fn test_resolve_dedupes_and_keeps_order() {
    let registry = create_test_registry();
    let result = registry
        .resolve(&strings(&["Networking", "core", "Net*", "Missing*"]))
        .unwrap();
    assert_eq!(result, [Feature::Networking, Feature::Home, Feature::Network]);
}
