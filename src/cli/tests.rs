// modgraph: Feature Module Build-Graph Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::graph::OutputFormat;
use crate::cli::{Cli, Command};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["modgraph", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "modgraph",
        "-l",
        "5",
        "-m",
        "a.toml",
        "--manifest",
        "b.toml",
        "--no-default-manifest",
        "check",
    ])
    .unwrap();

    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(
        cli.global.manifests,
        [PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    assert!(cli.global.no_default_manifest);
    assert!(matches!(cli.command, Some(Command::Check)));
}

#[test]
fn test_log_level_out_of_range_is_rejected() {
    assert!(Cli::try_parse_from(["modgraph", "-l", "7", "check"]).is_err());
}

#[test]
fn test_parse_graph() {
    let cli = Cli::try_parse_from([
        "modgraph", "graph", "--format", "dot", "-o", "out.dot", "--no-app", "core", "Net*",
    ])
    .unwrap();

    let Some(Command::Graph(args)) = cli.command else {
        panic!("expected graph command");
    };
    assert_eq!(args.format, OutputFormat::Dot);
    assert_eq!(args.output, Some(PathBuf::from("out.dot")));
    assert!(args.no_app);
    assert_eq!(args.features, ["core", "Net*"]);
}

#[test]
fn test_parse_graph_defaults() {
    let cli = Cli::try_parse_from(["modgraph", "graph"]).unwrap();
    let Some(Command::Graph(args)) = cli.command else {
        panic!("expected graph command");
    };
    assert_eq!(args.format, OutputFormat::Text);
    assert!(args.output.is_none());
    assert!(args.features.is_empty());
}

#[test]
fn test_parse_resolve() {
    let cli = Cli::try_parse_from([
        "modgraph",
        "resolve",
        "Networking",
        "interface",
        "--consumer",
        "implementation:Home",
    ])
    .unwrap();

    let Some(Command::Resolve(args)) = cli.command else {
        panic!("expected resolve command");
    };
    assert_eq!(
        (args.feature.as_str(), args.role.as_str()),
        ("Networking", "interface")
    );
    assert_eq!(args.consumer.as_deref(), Some("implementation:Home"));
}

#[test]
fn test_config_overrides() {
    let cli = Cli::try_parse_from([
        "modgraph",
        "-l",
        "4",
        "--log-file",
        "modgraph.log",
        "--set",
        "workspace.deployment_target = 17.0",
        "options",
    ])
    .unwrap();

    insta::assert_debug_snapshot!(cli.global.to_config_overrides().unwrap(), @r#"
    [
        (
            "workspace.deployment_target",
            "17.0",
        ),
        (
            "global.output_log_level",
            "4",
        ),
        (
            "global.file_log_level",
            "4",
        ),
        (
            "global.log_file",
            "modgraph.log",
        ),
    ]
    "#);
}

#[test]
fn test_config_override_requires_key_value() {
    let cli = Cli::try_parse_from(["modgraph", "--set", "workspace.modules_dir", "options"])
        .unwrap();
    insta::assert_snapshot!(
        cli.global.to_config_overrides().unwrap_err(),
        @"config error: invalid value for '--set' in section '[cli]': expected KEY=VALUE, got 'workspace.modules_dir'"
    );

    let cli = Cli::try_parse_from(["modgraph", "--set", "=17.0", "options"]).unwrap();
    insta::assert_snapshot!(
        cli.global.to_config_overrides().unwrap_err(),
        @"config error: missing required config key '--set =17.0' in section '[cli]'"
    );
}
