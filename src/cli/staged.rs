// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments of the pre-commit side.
//!
//! ```text
//! staged                  git diff --cached → plan → run → restage
//! staged --all-files      work tree walk instead of the index
//! staged --files A B      explicit paths (editors, tests)
//! plan [PATH...]          print the plan, run nothing
//! ```

use clap::Args;

use super::OutputFormat;

/// Arguments for the `staged` command.
#[derive(Debug, Clone, Default, Args)]
pub struct StagedArgs {
    /// Runs on every file of the work tree (honouring .gitignore).
    #[arg(long = "all-files", conflicts_with = "files")]
    pub all_files: bool,

    /// Runs on these paths instead of the staged files.
    #[arg(long = "files", value_name = "PATH", num_args = 1..)]
    pub files: Vec<String>,

    /// Does not re-add files to the index after the commands succeed.
    #[arg(long = "no-restage")]
    pub no_restage: bool,
}

/// Arguments for the `plan` command.
#[derive(Debug, Clone, Default, Args)]
pub struct PlanArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Paths to plan for; the staged files when empty.
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,
}
