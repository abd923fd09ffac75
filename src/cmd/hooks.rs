// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Install command implementation.

use anyhow::Context;

use crate::cli::hooks::InstallArgs;
use crate::config::Config;
use crate::error::Result;
use crate::git::ops::install_hooks;

/// Main handler for install command.
///
/// # Errors
///
/// Returns an error outside a repository, when a foreign hook is in the way
/// without `--force`, or when a hook cannot be written.
pub fn run_install_command(args: &InstallArgs, config: &Config) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let dry_run = config.global.dry;

    let written = install_hooks(&cwd, args.force, dry_run)?;
    for path in written {
        if dry_run {
            println!("Would install {}", path.display());
        } else {
            println!("Installed {}", path.display());
        }
    }
    Ok(())
}
