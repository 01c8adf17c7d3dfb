// modgraph: Feature Module Build-Graph Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layering policy merging.
//!
//! ```text
//! LayeringPolicy + LayeringOverride --> field-by-field merge
//! ```
//!
//! Only explicitly set fields (`Some`) in override replace base values.

use serde::{Deserialize, Serialize};

use crate::graph::LayeringPolicy;

/// Layering policy with optional fields for per-feature overrides.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayeringOverride {
    /// Interfaces may depend on other features' interfaces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_interface_dependencies: Option<bool>,
    /// Implementations may depend on other features' implementations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_cross_feature_implementation: Option<bool>,
}

/// Merge a feature-specific override over the workspace policy.
pub(super) fn merge_layering(base: LayeringPolicy, override_policy: LayeringOverride) -> LayeringPolicy {
    LayeringPolicy {
        allow_interface_dependencies: override_policy
            .allow_interface_dependencies
            .unwrap_or(base.allow_interface_dependencies),
        allow_cross_feature_implementation: override_policy
            .allow_cross_feature_implementation
            .unwrap_or(base.allow_cross_feature_implementation),
    }
}
