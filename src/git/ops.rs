// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations around the hooks.
//!
//! ```text
//! staged_files   index paths (ACMR) relative to the work tree
//! restage        git add the files the commands may have fixed
//! install_hooks  write pre-commit / commit-msg into the hooks dir
//! ```

use crate::error::{GitError, Result};
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::backend::{GitStaging, ShellBackend};
use super::query::hooks_dir;

/// First lines of every hook script stagelint writes.
pub const HOOK_MARKER: &str = "# installed by stagelint";

/// Hooks managed by `stagelint install`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookKind {
    PreCommit,
    CommitMsg,
}

impl HookKind {
    pub const ALL: [Self; 2] = [Self::PreCommit, Self::CommitMsg];

    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::PreCommit => "pre-commit",
            Self::CommitMsg => "commit-msg",
        }
    }

    /// Shell script body for this hook.
    #[must_use]
    pub fn script(self) -> String {
        let command = match self {
            Self::PreCommit => "exec stagelint staged",
            Self::CommitMsg => "exec stagelint commit-msg \"$1\"",
        };
        format!("#!/bin/sh\n{HOOK_MARKER}\n{command}\n")
    }
}

/// Staged paths of the repository containing `repo_path`.
///
/// # Errors
///
/// Returns an error if `git diff --cached` fails.
pub fn staged_files(repo_path: &Path) -> Result<Vec<String>> {
    let files = ShellBackend::staged_files(repo_path)
        .with_context(|| format!("failed to list staged files in {}", repo_path.display()))?;
    debug!(count = files.len(), "staged files");
    Ok(files)
}

/// Re-add files to the index after commands may have rewritten them.
///
/// Files deleted by a command are skipped.
///
/// # Errors
///
/// Returns an error if `git add` fails.
pub fn restage(repo_path: &Path, files: &[String], dry_run: bool) -> Result<()> {
    let existing: Vec<String> = files
        .iter()
        .filter(|f| repo_path.join(f).exists())
        .cloned()
        .collect();
    if existing.len() < files.len() {
        warn!(
            missing = files.len() - existing.len(),
            "some staged files no longer exist, not restaging them"
        );
    }

    if dry_run {
        info!(count = existing.len(), "[DRY-RUN] would restage files");
        return Ok(());
    }

    info!(count = existing.len(), "restaging files");
    ShellBackend::add_paths(repo_path, &existing).context("failed to restage files")?;
    Ok(())
}

/// Write the pre-commit and commit-msg hooks.
///
/// Existing hooks not written by stagelint are kept unless `force` is set.
/// Returns the paths of the hooks written (or that would be written).
///
/// # Errors
///
/// Returns an error if the hooks directory cannot be resolved or written, or
/// if a foreign hook is in the way and `force` is not set.
pub fn install_hooks(repo_path: &Path, force: bool, dry_run: bool) -> Result<Vec<PathBuf>> {
    let dir = hooks_dir(repo_path)?;

    if !force {
        for kind in HookKind::ALL {
            let path = dir.join(kind.file_name());
            if is_foreign_hook(&path)? {
                return Err(GitError::ForeignHook {
                    path: path.display().to_string(),
                }
                .into());
            }
        }
    }

    let mut written = Vec::new();
    for kind in HookKind::ALL {
        let path = dir.join(kind.file_name());
        if dry_run {
            info!(hook = %path.display(), "[DRY-RUN] would install hook");
            written.push(path);
            continue;
        }

        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
        std::fs::write(&path, kind.script())
            .with_context(|| format!("failed to write {}", path.display()))?;
        make_executable(&path)?;
        info!(hook = %path.display(), "installed hook");
        written.push(path);
    }
    Ok(written)
}

fn is_foreign_hook(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(!content.contains(HOOK_MARKER))
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .with_context(|| format!("failed to make {} executable", path.display()))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
