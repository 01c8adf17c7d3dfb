// modgraph: Feature Module Build-Graph Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Version | Options | Manifests | List | Graph | Order | Resolve | Check
//! ```

use std::process::ExitCode;

use modgraph::cli::global::GlobalOptions;
use modgraph::cli::{self, Command};
use modgraph::cmd::config::{run_manifests_command, run_options_command};
use modgraph::cmd::graph::{run_check_command, run_graph_command, run_order_command};
use modgraph::cmd::list::run_list_command;
use modgraph::cmd::resolve::run_resolve_command;
use modgraph::config::{Config, ConfigLoader, DEFAULT_MANIFEST, ENV_PREFIX};
use modgraph::logging::{LogConfig, LogGuard, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Manifests) => build_config_loader(&cli.global).map(|loader| {
            run_manifests_command(&loader.format_loaded_files());
        }),
        Some(command) => build_config_loader(&cli.global)
            .and_then(ConfigLoader::build)
            .and_then(|config| {
                let _log_guard = start_logging(&config)?;
                dispatch_command(command, &config)
            }),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn dispatch_command(command: &Command, config: &Config) -> modgraph::error::Result<()> {
    match command {
        Command::Options => {
            run_options_command(config);
            Ok(())
        }
        Command::List(args) => run_list_command(args, config),
        Command::Graph(args) => run_graph_command(args, config),
        Command::Order(args) => run_order_command(args, config),
        Command::Resolve(args) => run_resolve_command(args, config),
        Command::Check => run_check_command(config),
        Command::Version | Command::Manifests => Ok(()),
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn start_logging(config: &Config) -> modgraph::error::Result<LogGuard> {
    let log_config = LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(config.global.log_file.clone())
        .build();
    init_logging(&log_config)
}

fn build_config_loader(global: &GlobalOptions) -> modgraph::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_manifest {
        loader = loader.add_toml_file_optional(DEFAULT_MANIFEST);
    }
    loader = loader
        .add_toml_files(&global.manifests)
        .with_env_prefix(ENV_PREFIX);

    for (key, value) in global.to_config_overrides()? {
        loader = loader.set(&key, value)?;
    }
    Ok(loader)
}
