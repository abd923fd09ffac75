// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! GitQuery (read)     --> GixBackend (pure Rust gix)
//! GitStaging (index)  --> ShellBackend (git CLI)
//! hooks_dir           --> ShellBackend (core.hooksPath)
//! ```

use crate::error::{GitError, GixError, HookResult};
use std::path::{Path, PathBuf};

// --- Query Trait (Read-only operations) ---

/// Read-only git query operations.
///
/// Implementors provide methods to inspect repository layout without modification.
pub trait GitQuery {
    /// Check if path is inside a git repository.
    fn is_git_repo(path: &Path) -> bool;

    /// Root of the work tree containing `path`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if discovery fails or the repository is bare.
    fn workdir(path: &Path) -> HookResult<PathBuf>;

    /// The repository's private git directory (`.git`, or the worktree's).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery fails.
    fn git_dir(path: &Path) -> HookResult<PathBuf>;
}

// --- Staging Trait (Index operations) ---

/// Index operations used around the pre-commit hook.
pub trait GitStaging {
    /// Paths added, copied, modified or renamed in the index, relative to the
    /// work tree root, in git's order.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the diff cannot be computed.
    fn staged_files(repo_path: &Path) -> HookResult<Vec<String>>;

    /// Add paths (relative to the work tree root) to the index.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if `git add` fails.
    fn add_paths(repo_path: &Path, paths: &[String]) -> HookResult<()>;
}

// --- GixBackend Implementation (Pure Rust) ---

/// Pure Rust git backend using gix.
///
/// Provides read-only layout queries without spawning subprocesses.
pub struct GixBackend;

fn discover(path: &Path) -> HookResult<gix::Repository> {
    gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))).into())
}

impl GitQuery for GixBackend {
    fn is_git_repo(path: &Path) -> bool {
        gix::discover(path).is_ok()
    }

    fn workdir(path: &Path) -> HookResult<PathBuf> {
        let repo = discover(path)?;
        let workdir = repo
            .workdir()
            .ok_or(GitError::Gix(GixError::BareRepository))?;
        Ok(workdir.to_path_buf())
    }

    fn git_dir(path: &Path) -> HookResult<PathBuf> {
        Ok(discover(path)?.git_dir().to_path_buf())
    }
}

// --- ShellBackend Implementation (Git CLI) ---

/// Shell-based git backend using git CLI.
///
/// Required for:
/// - Index writes (`git add`), which must honour the user's git configuration
/// - `core.hooksPath` resolution
pub struct ShellBackend;

impl ShellBackend {
    /// Execute a git command and return its raw stdout.
    /// Sets `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0`.
    pub(crate) fn git_command_raw(args: &[&str], cwd: &Path) -> HookResult<String> {
        use std::process::Command;

        let output = Command::new("git")
            .args(args)
            .current_dir(cwd)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .map_err(|e| std::io::Error::new(e.kind(), format!("failed to execute git: {e}")))?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: format!("git {}", args.join(" ")),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Execute a git command and return its trimmed stdout.
    pub(crate) fn git_command(args: &[&str], cwd: &Path) -> HookResult<String> {
        Ok(Self::git_command_raw(args, cwd)?.trim().to_string())
    }

    /// Directory git runs hooks from, honouring `core.hooksPath`.
    ///
    /// `root` must be the work tree root; a relative `core.hooksPath` is
    /// resolved against it, as git does when it runs hooks.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if `git rev-parse` fails.
    pub fn hooks_dir(root: &Path) -> HookResult<PathBuf> {
        let hooks = Self::git_command(&["rev-parse", "--git-path", "hooks"], root)?;
        Ok(root.join(hooks))
    }
}

impl GitStaging for ShellBackend {
    fn staged_files(repo_path: &Path) -> HookResult<Vec<String>> {
        let output = Self::git_command_raw(
            &[
                "diff",
                "--cached",
                "--name-only",
                "--diff-filter=ACMR",
                "-z",
            ],
            repo_path,
        )?;
        Ok(output
            .split('\0')
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn add_paths(repo_path: &Path, paths: &[String]) -> HookResult<()> {
        if paths.is_empty() {
            return Ok(());
        }
        let mut args = vec!["add", "--"];
        args.extend(paths.iter().map(String::as_str));
        Self::git_command(&args, repo_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
