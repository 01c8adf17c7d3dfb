// modgraph: Feature Module Build-Graph Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader};
use crate::error::GraphError;
use crate::graph::{
    DependencySpec, Destination, ExternalPackage, Feature, LayeringPolicy, Product, Role,
    TestManifest,
};
use crate::logging::LogLevel;

const WORKSPACE: &str = r#"
[workspace]
root_namespace = "com.acme."
deployment_target = "17.0"

[aliases]
core = ["Home", "Networking"]

[app]
name = "SmartShop"
sources = ["Core"]
dependencies = ["interface:Home", "implementation:Home"]

[features.Home]
implementation = { dependencies = ["interface:Networking", "interface:Home"] }
tests = [{ role = "implementation", dependencies = ["interface:Networking"] }]

[features.Networking]
implementation = { dependencies = ["package:Alamofire"], resources = ["Certificates"] }
"#;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.workspace.root_namespace, "com.smartshop.");
    assert_eq!(config.workspace.deployment_target, "16.0");
    assert_eq!(config.workspace.modules_dir, "Modules");
    assert_eq!(config.workspace.framework_product, Product::Framework);
    assert_eq!(config.layering, LayeringPolicy::default());
    assert!(config.app.is_none());
    assert!(config.features.is_empty());
}

#[test]
fn test_config_parse() {
    let config = Config::parse(WORKSPACE).unwrap();

    assert_eq!(config.workspace.root_namespace, "com.acme.");
    assert_eq!(config.workspace.deployment_target, "17.0");
    assert_eq!(config.aliases["core"], ["Home", "Networking"]);
    assert_eq!(config.features.len(), 2);
    assert_eq!(
        config.app.as_ref().map(|app| app.name.as_str()),
        Some("SmartShop")
    );
}

#[test]
fn test_config_rejects_unknown_fields() {
    let err = Config::parse("[workspace]\nbundle_prefix = \"com.acme.\"\n").unwrap_err();
    assert!(format!("{err:#}").contains("bundle_prefix"), "{err:#}");
}

#[test]
fn test_log_level_out_of_range() {
    assert!(Config::parse("[global]\noutput_log_level = 9\n").is_err());
}

#[test]
fn test_manifest_from_config() {
    let manifest = Config::parse(WORKSPACE).unwrap().manifest().unwrap();

    let features: Vec<Feature> = manifest.features.iter().map(|f| f.feature).collect();
    assert_eq!(features, [Feature::Home, Feature::Networking]);

    let home = &manifest.features[0];
    assert!(home.interface.dependencies.is_empty());
    assert_eq!(
        home.implementation.as_ref().unwrap().dependencies,
        [
            DependencySpec::interface(Feature::Networking),
            DependencySpec::interface(Feature::Home),
        ]
    );
    assert_eq!(
        home.tests,
        [TestManifest {
            role: Role::Implementation,
            dependencies: vec![DependencySpec::interface(Feature::Networking)],
        }]
    );

    let networking = manifest.features[1].implementation.as_ref().unwrap();
    assert_eq!(
        networking.dependencies,
        [DependencySpec::package(ExternalPackage::Alamofire)]
    );
    assert_eq!(networking.resources, ["Certificates"]);

    let app = manifest.app.unwrap();
    assert_eq!(app.sources, ["Core"]);
    assert_eq!(app.dependencies.len(), 2);
}

#[test]
fn test_manifest_unknown_feature() {
    let config = Config::parse("[features.checkout]\nimplementation = { resources = [\"Assets\"] }\n").unwrap();
    insta::assert_snapshot!(config.manifest().unwrap_err(), @"unknown feature: checkout");
}

#[test]
fn test_manifest_bad_dependency_string() {
    let config = Config::parse(
        "[features.Home]\nimplementation = { dependencies = [\"Networking\"] }\n",
    )
    .unwrap();
    assert_eq!(
        config.manifest().unwrap_err(),
        GraphError::UnknownIdentifier {
            kind: "dependency",
            name: "Networking".to_string(),
        }
    );
}

#[test]
fn test_layering_override_merges_fields() {
    let config = Config::parse(
        r#"
[layering]
allow_interface_dependencies = false

[features.Home.layering]
allow_cross_feature_implementation = true

[features.Networking]
implementation = { resources = ["Assets"] }
"#,
    )
    .unwrap();
    let manifest = config.manifest().unwrap();

    assert_eq!(
        manifest.features[0].layering,
        Some(LayeringPolicy {
            allow_interface_dependencies: false,
            allow_cross_feature_implementation: true,
        })
    );
    assert_eq!(manifest.features[1].layering, None);
}

#[test]
fn test_graph_builder_uses_workspace() {
    let config = Config::parse(WORKSPACE).unwrap();
    let graph = config
        .graph_builder()
        .unwrap()
        .build(&config.manifest().unwrap())
        .unwrap();

    let home = graph.find("Home").and_then(|id| graph.target(id)).unwrap();
    assert_eq!(home.bundle_id(), "com.acme.home.framework");
    assert_eq!(home.deployment_target(), "17.0");

    let app = graph
        .find("SmartShop")
        .and_then(|id| graph.target(id))
        .unwrap();
    assert_eq!(app.bundle_id(), "com.acme.app");
}

#[test]
fn test_graph_builder_invalid_namespace() {
    let config = Config::parse("[workspace]\nroot_namespace = \"acme\"\n").unwrap();
    assert!(matches!(
        config.graph_builder().unwrap_err(),
        GraphError::Configuration { .. }
    ));
}

#[test]
fn test_config_loader_tracks_files() {
    let loader = ConfigLoader::new()
        .add_toml_str("[global]\noutput_log_level = 2\n")
        .add_toml_file_optional("definitely/not/here/modgraph.toml");

    assert_eq!(loader.loaded_files().len(), 1);
    insta::assert_snapshot!(loader.format_loaded_files().join("\n"), @"1. [string] <string>");
}

#[test]
fn test_config_loader_set_override() {
    let config = ConfigLoader::new()
        .add_toml_str(WORKSPACE)
        .set("workspace.modules_dir", "Packages")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.workspace.modules_dir, "Packages");
}

#[test]
fn test_format_options_deterministic() {
    let config = Config::parse(WORKSPACE).unwrap();
    let first = config.format_options();
    assert_eq!(first, config.format_options());

    insta::assert_snapshot!(first.join("\n"), @r"
    app.dependencies                            = interface:Home, implementation:Home
    app.name                                    = SmartShop
    features.Home.implementation                = interface:Networking, interface:Home
    features.Home.interface                     = none
    features.Home.tests                         = 1
    features.Networking.implementation          = package:Alamofire
    features.Networking.interface               = none
    global.file_log_level                       = 5
    global.output_log_level                     = 3
    layering.allow_cross_feature_implementation = false
    layering.allow_interface_dependencies       = true
    workspace.deployment_target                 = 17.0
    workspace.destinations                      = ios
    workspace.framework_product                 = framework
    workspace.modules_dir                       = Modules
    workspace.root_namespace                    = com.acme.
    ");
}

#[test]
fn test_destinations_and_info_plist() {
    let config = Config::parse(
        r#"
[workspace]
destinations = ["ios", "visionos"]

[app]
name = "SmartShop"
sources = ["Core"]
dependencies = ["interface:Home"]
info_plist = { UILaunchStoryboardName = "LaunchScreen", CFBundleDisplayName = "Smart Shop" }

[features.Home]
interface = { resources = ["Icons"] }
"#,
    )
    .unwrap();
    assert_eq!(
        config.workspace.destinations,
        [Destination::Ios, Destination::Visionos]
    );

    let graph = config
        .graph_builder()
        .unwrap()
        .build(&config.manifest().unwrap())
        .unwrap();
    let home = &graph.targets()[0];
    assert_eq!(home.destinations(), [Destination::Ios, Destination::Visionos]);
    assert!(home.info_plist().is_empty());

    let app = graph.targets().last().unwrap();
    assert_eq!(
        app.info_plist().get("UILaunchStoryboardName").map(String::as_str),
        Some("LaunchScreen")
    );

    let options = config.format_options();
    assert!(options.iter().any(|line| line.starts_with("workspace.destinations")
        && line.ends_with("= ios, visionos")));
    assert!(options.iter().any(|line| line.starts_with("app.info_plist.CFBundleDisplayName")
        && line.ends_with("= Smart Shop")));
}

#[test]
fn test_unknown_destination_is_rejected() {
    let err = Config::parse("[workspace]\ndestinations = [\"android\"]\n").unwrap_err();
    assert!(format!("{err:#}").contains("android"), "{err:#}");
}
