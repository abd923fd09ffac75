// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Commit message commands.

use anyhow::Context;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::cli::commit::CommitMsgArgs;
use crate::commit::lint::{LintReport, Linter};
use crate::commit::report::{format_report, format_rules};
use crate::config::Config;
use crate::error::{LintError, Result};
use crate::git::query::git_dir;

/// Message file git writes before running the commit-msg hook.
pub const COMMIT_EDITMSG: &str = "COMMIT_EDITMSG";

/// Main handler for commit-msg command.
///
/// # Errors
///
/// Returns `LintError::MessageRead` if the message cannot be read, and
/// `LintError::Rejected` if it violates an error-level rule.
pub fn run_commit_msg_command(args: &CommitMsgArgs, config: &Config) -> Result<()> {
    let text = match args.file.as_deref() {
        Some(path) if path == Path::new("-") => read_stdin()?,
        Some(path) => read_message(path)?,
        None => read_message(&default_message_path()?)?,
    };

    let linter = Linter::from_config(&config.commit)?;
    let report = linter.lint(&text);
    tracing::debug!(
        valid = report.valid,
        ignored = report.ignored,
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "linted commit message"
    );

    print_report(&report, args.format)?;

    if report.valid {
        Ok(())
    } else {
        Err(LintError::Rejected {
            errors: report.errors.len(),
            warnings: report.warnings.len(),
        }
        .into())
    }
}

/// Print the effective commit rules.
pub fn run_rules_command(config: &Config) {
    print!("{}", format_rules(&config.commit_rules()));
}

fn print_report(report: &LintReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", format_report(report)),
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(report).context("failed to serialize report")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn default_message_path() -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    Ok(git_dir(&cwd)?.join(COMMIT_EDITMSG))
}

/// Read a message file.
///
/// # Errors
///
/// Returns `LintError::MessageRead` if the file cannot be read.
pub fn read_message(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| {
        LintError::MessageRead {
            path: path.display().to_string(),
            source,
        }
        .into()
    })
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|source| LintError::MessageRead {
            path: "-".to_string(),
            source,
        })?;
    Ok(text)
}
