// modgraph: Feature Module Build-Graph Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing and command handlers.
//!
//! Tests the CLI module with realistic command-line argument patterns and
//! runs the handlers against an in-memory workspace.

use clap::Parser;
use modgraph::cli::graph::{GraphArgs, ListArgs, OutputFormat, ResolveArgs};
use modgraph::cli::{Cli, Command};
use modgraph::cmd::graph::{build_graph, render_graph, run_graph_command, select_manifest};
use modgraph::cmd::list::list_lines;
use modgraph::cmd::resolve::resolve_dependency;
use modgraph::config::Config;
use modgraph::graph::Feature;

const WORKSPACE: &str = r#"
[aliases]
core = ["Home", "Networking"]

[app]
name = "SmartShop"
sources = ["Core"]
dependencies = ["interface:Home", "implementation:Home", "interface:Networking", "implementation:Networking"]

[features.Home]
implementation = { dependencies = ["interface:Networking", "interface:Home"] }
tests = [{ role = "implementation", dependencies = ["interface:Home"] }]

[features.Networking]
implementation = { dependencies = ["package:Alamofire"] }

[features.Network]
implementation = { dependencies = ["interface:Networking"] }
"#;

fn workspace() -> Config {
    Config::parse(WORKSPACE).unwrap()
}

fn resolve_args(feature: &str, role: &str, consumer: Option<&str>) -> ResolveArgs {
    ResolveArgs {
        feature: feature.to_string(),
        role: role.to_string(),
        consumer: consumer.map(ToString::to_string),
    }
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["modgraph", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_unknown_format_is_rejected() {
    assert!(Cli::try_parse_from(["modgraph", "graph", "--format", "svg"]).is_err());
}

#[test]
fn cli_list_aliases() {
    let cli = Cli::try_parse_from(["modgraph", "list", "--aliases"]).unwrap();
    let Some(Command::List(args)) = cli.command else {
        panic!("expected list command");
    };
    assert!(args.aliases);
}

// =============================================================================
// Selection
// =============================================================================

#[test]
fn selection_pulls_in_dependencies() {
    let manifest = select_manifest(&workspace(), &["Net*".to_string()], true).unwrap();
    let features: Vec<_> = manifest.features.iter().map(|f| f.feature).collect();
    assert_eq!(features, [Feature::Network, Feature::Networking]);
    assert!(manifest.app.is_none());

    let manifest = select_manifest(&workspace(), &["home".to_string()], true).unwrap();
    let features: Vec<_> = manifest.features.iter().map(|f| f.feature).collect();
    assert_eq!(features, [Feature::Home, Feature::Networking]);
}

#[test]
fn selection_without_match_fails() {
    let err = select_manifest(&workspace(), &["Pay*".to_string()], true).unwrap_err();
    insta::assert_snapshot!(err, @"no declared feature matches Pay*");
}

#[test]
fn full_selection_keeps_app_unless_disabled() {
    assert!(select_manifest(&workspace(), &[], true).unwrap().app.is_some());
    assert!(select_manifest(&workspace(), &[], false).unwrap().app.is_none());
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn graph_text_for_alias() {
    let graph = build_graph(&workspace(), &["core".to_string()], true).unwrap();
    let text = render_graph(&graph, OutputFormat::Text).unwrap();
    insta::assert_snapshot!(text.trim_end(), @r"
    Home (Modules/uHome)
      HomeInterface [framework] com.smartshop.homeinterface.framework
      Home [framework] com.smartshop.home.framework
        -> NetworkingInterface (Modules/uNetworking)
        -> HomeInterface (Modules/uHome)
      HomeTests [unit_tests] com.smartshop.hometests
        -> Home (Modules/uHome)
        -> HomeInterface (Modules/uHome)
    Networking (Modules/uNetworking)
      NetworkingInterface [framework] com.smartshop.networkinginterface.framework
      Networking [framework] com.smartshop.networking.framework
        -> NetworkingInterface (Modules/uNetworking)
        -> package Alamofire
    ");
}

#[test]
fn graph_json_is_parseable() {
    let graph = build_graph(&workspace(), &[], true).unwrap();
    let json = render_graph(&graph, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["targets"].as_array().unwrap().len(), graph.len());
    assert_eq!(value["targets"][0]["name"], "HomeInterface");
}

#[test]
fn graph_command_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join("graph.dot");
    let args = GraphArgs {
        format: OutputFormat::Dot,
        output: Some(path.clone()),
        no_app: true,
        features: vec!["Networking".to_string()],
    };

    run_graph_command(&args, &workspace()).unwrap();
    let dot = std::fs::read_to_string(&path).unwrap();
    assert!(dot.starts_with("digraph modules {"));
    assert!(dot.contains("\"Networking\" -> \"Alamofire\" [style=dashed];"));
}

// =============================================================================
// Resolve
// =============================================================================

#[test]
fn resolve_without_consumer() {
    let dependency = resolve_dependency(&resolve_args("networking", "interface", None), &workspace())
        .unwrap();
    insta::assert_snapshot!(dependency, @"NetworkingInterface (Modules/uNetworking)");
}

#[test]
fn resolve_with_consumer_checks_layering() {
    let config = workspace();
    assert!(
        resolve_dependency(
            &resolve_args("Networking", "interface", Some("implementation:Home")),
            &config
        )
        .is_ok()
    );

    let err = resolve_dependency(
        &resolve_args("Networking", "implementation", Some("implementation:Home")),
        &config,
    )
    .unwrap_err();
    insta::assert_snapshot!(
        err,
        @"illegal dependency from 'implementation:Home' on 'implementation:Networking': only interfaces of other features may be depended on"
    );
}

#[test]
fn resolve_uses_consumer_layering_override() {
    let config = Config::parse(
        r"
[features.Home.layering]
allow_cross_feature_implementation = true
",
    )
    .unwrap();
    let dependency = resolve_dependency(
        &resolve_args("Networking", "implementation", Some("implementation:Home")),
        &config,
    )
    .unwrap();
    assert_eq!(dependency.target_name(), "Networking");
}

// =============================================================================
// List
// =============================================================================

#[test]
fn list_catalog() {
    let args = ListArgs::default();
    insta::assert_snapshot!(list_lines(&args, &workspace()).unwrap().join("\n"), @r"
    App         app SmartShop
    Home        interface, implementation, 1 test
    Network     interface, implementation
    Networking  interface, implementation
    packages: Alamofire, SnapKit
    ");
}

#[test]
fn list_aliases() {
    let args = ListArgs {
        aliases: true,
        features: Vec::new(),
    };
    assert_eq!(
        list_lines(&args, &workspace()).unwrap(),
        ["core = Home, Networking"]
    );
}
