// modgraph: Feature Module Build-Graph Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands for modgraph.

use crate::config::Config;

/// Display current configuration options.
pub fn run_options_command(config: &Config) {
    for line in config.format_options() {
        println!("{line}");
    }
}

/// Display loaded manifest files.
pub fn run_manifests_command(manifests: &[String]) {
    if manifests.is_empty() {
        println!("No manifests loaded");
    } else {
        for line in manifests {
            println!("{line}");
        }
    }
}
