// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the `commit-msg` command.

use clap::Args;
use std::path::PathBuf;

use super::OutputFormat;

#[derive(Debug, Clone, Default, Args)]
pub struct CommitMsgArgs {
    /// Message file; `-` reads stdin. Defaults to `.git/COMMIT_EDITMSG`.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output format of the report.
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}
