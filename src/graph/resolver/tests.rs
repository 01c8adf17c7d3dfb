// modgraph: Feature Module Build-Graph Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Consumer, DependencyResolver, DependencySpec, LayeringPolicy};
use crate::error::GraphError;
use crate::graph::catalog::{ExternalPackage, Feature, Role};
use crate::graph::naming::NamingPolicy;
use crate::graph::target::TargetDependency;

fn strict() -> LayeringPolicy {
    LayeringPolicy {
        allow_interface_dependencies: false,
        allow_cross_feature_implementation: false,
    }
}

#[test]
fn test_resolve_interface() {
    let naming = NamingPolicy::default();
    let resolver = DependencyResolver::new(&naming, LayeringPolicy::default());

    let dependency = resolver.resolve(Feature::Networking, Role::Interface).unwrap();
    assert_eq!(
        dependency,
        TargetDependency::Project {
            target: "NetworkingInterface".to_string(),
            path: "Modules/uNetworking".to_string(),
            feature: Feature::Networking,
            role: Role::Interface,
        }
    );
    insta::assert_snapshot!(dependency.to_string(), @"NetworkingInterface (Modules/uNetworking)");
}

#[test]
fn test_resolve_is_deterministic() {
    let naming = NamingPolicy::default();
    let resolver = DependencyResolver::new(&naming, LayeringPolicy::default());
    for feature in [Feature::Home, Feature::Network, Feature::Networking] {
        for role in [Role::Interface, Role::Implementation] {
            assert_eq!(resolver.resolve(feature, role), resolver.resolve(feature, role));
        }
    }
}

#[test]
fn test_resolve_rejects_unlinkable_roles() {
    let naming = NamingPolicy::default();
    let resolver = DependencyResolver::new(&naming, LayeringPolicy::default());

    for (feature, role) in [
        (Feature::Home, Role::Test),
        (Feature::App, Role::App),
        (Feature::App, Role::Interface),
    ] {
        let err = resolver.resolve(feature, role).unwrap_err();
        assert!(matches!(err, GraphError::UnknownIdentifier { .. }), "{feature}/{role}");
    }
}

#[test]
fn test_implementation_may_depend_on_interfaces() {
    let naming = NamingPolicy::default();
    let resolver = DependencyResolver::new(&naming, strict());
    let home = Consumer::new(Feature::Home, Role::Implementation);

    assert!(resolver.resolve_for(home, Feature::Home, Role::Interface).is_ok());
    assert!(resolver.resolve_for(home, Feature::Networking, Role::Interface).is_ok());
}

#[test]
fn test_implementation_on_foreign_implementation_is_illegal() {
    let naming = NamingPolicy::default();
    let resolver = DependencyResolver::new(&naming, LayeringPolicy::default());
    let home = Consumer::new(Feature::Home, Role::Implementation);

    let err = resolver
        .resolve_for(home, Feature::Networking, Role::Implementation)
        .unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"illegal dependency from 'implementation:Home' on 'implementation:Networking': only interfaces of other features may be depended on"
    );
}

#[test]
fn test_cross_feature_implementation_when_allowed() {
    let naming = NamingPolicy::default();
    let policy = LayeringPolicy {
        allow_cross_feature_implementation: true,
        ..LayeringPolicy::default()
    };
    let resolver = DependencyResolver::new(&naming, policy);
    let home = Consumer::new(Feature::Home, Role::Implementation);

    assert!(resolver.resolve_for(home, Feature::Networking, Role::Implementation).is_ok());
    assert!(matches!(
        resolver.resolve_for(home, Feature::Home, Role::Implementation),
        Err(GraphError::IllegalLayering { .. })
    ));
}

#[test]
fn test_interface_rules() {
    let naming = NamingPolicy::default();
    let home = Consumer::new(Feature::Home, Role::Interface);

    let relaxed = DependencyResolver::new(&naming, LayeringPolicy::default());
    assert!(relaxed.resolve_for(home, Feature::Networking, Role::Interface).is_ok());
    assert!(relaxed.resolve_for(home, Feature::Home, Role::Interface).is_err());
    assert!(relaxed.resolve_for(home, Feature::Home, Role::Implementation).is_err());

    let strict = DependencyResolver::new(&naming, strict());
    let err = strict
        .resolve_for(home, Feature::Networking, Role::Interface)
        .unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"illegal dependency from 'interface:Home' on 'interface:Networking': interface-to-interface dependencies are disabled"
    );
}

#[test]
fn test_test_rules() {
    let naming = NamingPolicy::default();
    let resolver = DependencyResolver::new(&naming, LayeringPolicy::default());
    let tests = Consumer::new(Feature::Home, Role::Test);

    assert!(resolver.resolve_for(tests, Feature::Home, Role::Implementation).is_ok());
    assert!(resolver.resolve_for(tests, Feature::Networking, Role::Interface).is_ok());
    assert!(matches!(
        resolver.resolve_for(tests, Feature::Networking, Role::Implementation),
        Err(GraphError::IllegalLayering { .. })
    ));
}

#[test]
fn test_app_may_depend_on_everything_linkable() {
    let naming = NamingPolicy::default();
    let resolver = DependencyResolver::new(&naming, strict());
    let app = Consumer::new(Feature::App, Role::App);

    for feature in [Feature::Home, Feature::Networking] {
        for role in [Role::Interface, Role::Implementation] {
            assert!(resolver.resolve_for(app, feature, role).is_ok());
        }
    }
}

#[test]
fn test_dependency_spec_parse() {
    assert_eq!(
        "interface:Home".parse::<DependencySpec>(),
        Ok(DependencySpec::interface(Feature::Home))
    );
    assert_eq!(
        "Implementation:networking".parse::<DependencySpec>(),
        Ok(DependencySpec::implementation(Feature::Networking))
    );
    assert_eq!(
        "package:Alamofire".parse::<DependencySpec>(),
        Ok(DependencySpec::package(ExternalPackage::Alamofire))
    );
    for invalid in ["Home", "test:Home", "interface:Payments", "package:Realm"] {
        assert!(
            matches!(
                invalid.parse::<DependencySpec>(),
                Err(GraphError::UnknownIdentifier { .. })
            ),
            "{invalid} should be rejected"
        );
    }
}

#[test]
fn test_packages_are_always_legal() {
    let naming = NamingPolicy::default();
    let resolver = DependencyResolver::new(&naming, strict());
    let consumer = Consumer::new(Feature::Home, Role::Interface);

    let resolved = resolver
        .resolve_all(consumer, &[DependencySpec::package(ExternalPackage::SnapKit)])
        .unwrap();
    assert_eq!(
        resolved,
        [TargetDependency::Package {
            product: ExternalPackage::SnapKit
        }]
    );
}

#[test]
fn test_consumer_parse() {
    let consumer: Consumer = "implementation:home".parse().unwrap();
    assert_eq!(consumer, Consumer::new(Feature::Home, Role::Implementation));
    assert_eq!(consumer.to_string().parse::<Consumer>().unwrap(), consumer);
    assert_eq!(
        "app:App".parse::<Consumer>().unwrap(),
        Consumer::new(Feature::App, Role::App)
    );

    insta::assert_snapshot!(
        "Home".parse::<Consumer>().unwrap_err(),
        @"unknown consumer: Home"
    );
    insta::assert_snapshot!(
        "interface:App".parse::<Consumer>().unwrap_err(),
        @"unknown role: interface for feature App"
    );
}
