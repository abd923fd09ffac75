// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pre-commit commands.
//!
//! ```text
//! FileSource ──> plan() ──┬─ --dry ──> print plan
//!                         └─ run_plans() ──> failures? ──> error
//!                                               └─ ok ──> restage (index only)
//! ```

use anyhow::Context;
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::cli::OutputFormat;
use crate::cli::staged::{PlanArgs, StagedArgs};
use crate::config::Config;
use crate::core::process::builder::ProcessBuilder;
use crate::error::{Result, bail_out};
use crate::git::ops::{restage, staged_files};
use crate::git::query::{is_git_repo, workdir};
use crate::staged::plan::{RulePlan, format_plans, plan, planned_files};
use crate::staged::runner::{RunOptions, format_failures, run_plans};
use crate::utility::fs::walk::work_tree_files;

/// Where the files of a run come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    /// `git diff --cached`.
    Index,
    /// Every non-ignored file of the work tree.
    WorkTree,
    /// Paths given on the command line, relative to the work tree root.
    Explicit(Vec<String>),
}

impl FileSource {
    #[must_use]
    pub fn from_args(args: &StagedArgs) -> Self {
        if args.all_files {
            Self::WorkTree
        } else if args.files.is_empty() {
            Self::Index
        } else {
            Self::Explicit(args.files.clone())
        }
    }

    /// Only files taken from the index are added back to it.
    #[must_use]
    pub const fn restages(&self) -> bool {
        matches!(self, Self::Index)
    }

    /// Collect the paths to plan for.
    ///
    /// # Errors
    ///
    /// Returns an error if git or the directory walk fails.
    pub fn collect(&self, root: &Path) -> Result<Vec<String>> {
        match self {
            Self::Index => staged_files(root),
            Self::WorkTree => work_tree_files(root),
            Self::Explicit(files) => Ok(files.clone()),
        }
    }
}

/// Directory commands run in: the work tree root, or `cwd` outside a
/// repository when the files do not come from the index.
fn resolve_root(cwd: &Path, source: &FileSource) -> Result<PathBuf> {
    if source.restages() || is_git_repo(cwd) {
        return Ok(workdir(cwd)?);
    }
    Ok(cwd.to_path_buf())
}

/// Warn about programs the planned commands call that are not on PATH.
fn warn_missing_programs(plans: &[RulePlan]) {
    let mut programs: Vec<&str> = plans
        .iter()
        .flat_map(|p| p.commands.iter())
        .filter_map(|c| c.split_whitespace().next())
        .collect();
    programs.sort_unstable();
    programs.dedup();

    for program in programs {
        if !ProcessBuilder::exists(program) {
            warn!(program, "not found in PATH, its commands will fail");
        }
    }
}

/// Main handler for staged command.
///
/// # Errors
///
/// Returns an error if the files cannot be collected, a rule fails or is
/// interrupted, or restaging fails.
pub async fn run_staged_command(args: &StagedArgs, config: &Config) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let source = FileSource::from_args(args);
    let root = resolve_root(&cwd, &source)?;

    let files = source.collect(&root)?;
    info!(count = files.len(), source = source_name(&source), "collected files");

    let plans = plan(&config.staged.rules, &files)?;
    if plans.is_empty() {
        info!("no files match any staged rule");
        return Ok(());
    }

    if config.global.dry {
        print!("{}", format_plans(&plans));
        return Ok(());
    }

    warn_missing_programs(&plans);

    let cancel_token = CancellationToken::new();
    let listener = cancel_token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Received Ctrl+C, interrupting commands...");
            listener.cancel();
        }
    });

    let options = RunOptions::builder()
        .with_cwd(root.clone())
        .maybe_with_timeout(config.staged.timeout())
        .build();
    let reports = run_plans(&plans, &options, &cancel_token).await;

    let failures = format_failures(&reports);
    if !failures.is_empty() {
        eprint!("{failures}");
    }

    let failed = reports.iter().filter(|r| !r.is_success()).count();
    if failed > 0 {
        return Err(bail_out(format!("{failed} of {} staged rules failed", reports.len())).into());
    }
    info!(rules = reports.len(), "all staged rules passed");

    if args.no_restage || !config.staged.restage || !source.restages() {
        return Ok(());
    }
    restage(&root, &planned_files(&plans), false)
}

const fn source_name(source: &FileSource) -> &'static str {
    match source {
        FileSource::Index => "index",
        FileSource::WorkTree => "work tree",
        FileSource::Explicit(_) => "command line",
    }
}

/// Main handler for plan command.
///
/// # Errors
///
/// Returns an error if the staged files cannot be listed or a rule pattern
/// is invalid.
pub fn run_plan_command(args: &PlanArgs, config: &Config) -> Result<()> {
    let files = if args.paths.is_empty() {
        let cwd = std::env::current_dir().context("failed to read current directory")?;
        staged_files(&workdir(&cwd)?)?
    } else {
        args.paths.clone()
    };

    let plans = plan(&config.staged.rules, &files)?;
    match args.format {
        OutputFormat::Text if plans.is_empty() => println!("No files match any staged rule"),
        OutputFormat::Text => print!("{}", format_plans(&plans)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&plans).context("failed to serialize plan")?;
            println!("{json}");
        }
    }
    Ok(())
}
