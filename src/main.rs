// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Staged | Plan | CommitMsg | Rules | Install | Options | Inis
//! ```

use std::process::ExitCode;

use stagelint::cli::global::GlobalOptions;
use stagelint::cli::{self, Command};
use stagelint::cmd::commit::{run_commit_msg_command, run_rules_command};
use stagelint::cmd::config::{run_inis_command, run_options_command};
use stagelint::cmd::hooks::run_install_command;
use stagelint::cmd::staged::{run_plan_command, run_staged_command};
use stagelint::config::loader::ConfigLoader;
use stagelint::config::types::GlobalConfig;
use stagelint::config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX, parse_override};
use stagelint::logging::init_logging;
use stagelint::logging::{LogConfig, LogGuard};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    match &cli.command {
        Some(Command::Version) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            return ExitCode::FAILURE;
        }
        Some(_) => {}
    }

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match start_logging(&config.global) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config).await
}

fn start_logging(global: &GlobalConfig) -> stagelint::error::Result<LogGuard> {
    let log_config = LogConfig::builder()
        .with_console_level(global.output_log_level)
        .with_file_level(global.file_log_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .with_json_file(global.log_json)
        .build();
    init_logging(&log_config)
}

async fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::Inis) => build_config_loader(&cli.global).map(|loader| {
            run_inis_command(&loader.format_loaded_files());
        }),
        Some(Command::Staged(args)) => run_staged_command(args, config).await,
        Some(Command::Plan(args)) => run_plan_command(args, config),
        Some(Command::CommitMsg(args)) => run_commit_msg_command(args, config),
        Some(Command::Rules) => {
            run_rules_command(config);
            Ok(())
        }
        Some(Command::Install(args)) => run_install_command(args, config),
        Some(Command::Version) | None => Ok(()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_config_loader(global: &GlobalOptions) -> stagelint::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);

    for option in global.to_config_overrides() {
        let (key, value) = parse_override(&option)?;
        loader = loader.set(&key, value)?;
    }
    Ok(loader)
}

fn load_config(global: &GlobalOptions) -> stagelint::error::Result<Config> {
    build_config_loader(global)?.build()
}
