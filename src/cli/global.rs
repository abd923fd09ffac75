// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE      ← Additional config files (can repeat)
//! --dry              ← Print what would run, change nothing
//! --log-level N      ← Console verbosity (0-6)
//! --file-log-level   ← File verbosity (overrides --log-level)
//! --log-file FILE    ← global.log_file override
//! --set KEY=VAL      ← Direct config override
//!
//! Precedence: CLI flags > --set > env > --config > stagelint.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Prints the commands and files that would be touched without running
    /// or changing anything.
    #[arg(long)]
    pub dry: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Sets an option, such as 'staged/timeout_secs=60' or
    /// 'commit.rules.header_max_length.value=72'. Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append)]
    pub options: Vec<String>,

    /// Disables loading `stagelint.toml` from the current directory.
    #[arg(long = "no-default-config")]
    pub no_default_config: bool,
}

impl GlobalOptions {
    /// Converts command-line options to configuration overrides.
    ///
    /// `--set` options come first so dedicated flags win over them.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<String> {
        let mut overrides = self.options.clone();

        if let Some(level) = self.log_level {
            overrides.push(format!("global/output_log_level={level}"));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(format!("global/file_log_level={level}"));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(format!("global/log_file={}", path.display()));
        }

        if self.dry {
            overrides.push("global/dry=true".to_string());
        }

        overrides
    }
}
