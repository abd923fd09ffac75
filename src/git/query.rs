// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git query operations using gix backend.
//!
//! ```text
//! query.rs --> GixBackend --> .git/ (no subprocess)
//! hooks_dir --> GixBackend::workdir + git rev-parse --git-path hooks
//! ```

use crate::error::HookResult;
use std::path::{Path, PathBuf};

use super::backend::{GitQuery, GixBackend, ShellBackend};

#[must_use]
pub fn is_git_repo(path: &Path) -> bool {
    GixBackend::is_git_repo(path)
}

/// Root of the work tree containing `path`.
///
/// # Errors
///
/// Returns a `GitError` if discovery fails or the repository is bare.
pub fn workdir(path: &Path) -> HookResult<PathBuf> {
    GixBackend::workdir(path)
}

/// Git directory holding `COMMIT_EDITMSG`.
///
/// # Errors
///
/// Returns a `GitError` if repository discovery fails.
pub fn git_dir(path: &Path) -> HookResult<PathBuf> {
    GixBackend::git_dir(path)
}

/// Directory git runs hooks from.
///
/// This is `core.hooksPath` when set, otherwise the `hooks` directory shared
/// by all worktrees.
///
/// # Errors
///
/// Returns a `GitError` if discovery fails, the repository is bare, or git
/// cannot resolve the path.
pub fn hooks_dir(path: &Path) -> HookResult<PathBuf> {
    let root = GixBackend::workdir(path)?;
    ShellBackend::hooks_dir(&root)
}
