// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for stagelint using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! stagelint [global options] <command>
//! staged [--all-files] [--files PATH...] [--no-restage]
//! plan [--format text|json] [PATH...]
//! commit-msg [FILE] [--format text|json]
//! rules
//! install [--force]
//! options | inis | version
//! ```

pub mod commit;
pub mod global;
pub mod hooks;
pub mod staged;

#[cfg(test)]
mod tests;

use crate::cli::commit::CommitMsgArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::hooks::InstallArgs;
use crate::cli::staged::{PlanArgs, StagedArgs};
use clap::{Parser, Subcommand, ValueEnum};

/// Git hook runner for staged files and commit messages.
#[derive(Debug, Parser)]
#[command(
    name = "stagelint",
    author,
    version,
    about = "Git hook runner for staged files and commit messages",
    long_about = "stagelint Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Runs per-directory formatters and linters on staged files\n\
                  before a commit, and checks commit messages against the\n\
                  conventional commit rules. `stagelint install` wires both\n\
                  into the repository's hooks.",
    after_help = "CONFIGURATION:\n\n\
                  stagelint reads `stagelint.toml` from the current directory when\n\
                  present, then every file given with --config in order, then\n\
                  STAGELINT_SECTION__KEY environment variables, then --set options.\n\
                  Use --no-default-config to skip `stagelint.toml`."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the configuration files used.
    Inis,

    /// Runs the staged rules (pre-commit hook).
    Staged(StagedArgs),

    /// Prints the commands `staged` would run for the given paths.
    Plan(PlanArgs),

    /// Lints a commit message (commit-msg hook).
    #[command(name = "commit-msg")]
    CommitMsg(CommitMsgArgs),

    /// Prints the effective commit message rules.
    Rules,

    /// Installs the pre-commit and commit-msg hooks.
    Install(InstallArgs),
}

/// Output format of reporting commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
