// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the `install` command.

use clap::Args;

#[derive(Debug, Clone, Default, Args)]
pub struct InstallArgs {
    /// Overwrites hooks that were not installed by stagelint.
    #[arg(short = 'f', long)]
    pub force: bool,
}
