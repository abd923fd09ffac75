// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            HookError (~24 bytes)
//!                    |
//!   +------+------+--+---+-------+------+
//!   |      |      |      |       |      |
//!   v      v      v      v       v      v
//! Bail    Git   Config Process  Lint  Io/Other
//!         Box    Box    Box     Box   Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Git      Gix, CommandFailed, ForeignHook
//!   Config   InvalidValue, InvalidGlob, InvalidIgnore, InvalidOverride
//!   Process  SpawnFailed, NonZeroExit, Timeout
//!   Lint     MessageRead, Rejected
//!
//! All variants boxed => HookError fits in 24 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`HookError`].
pub type HookResult<T> = std::result::Result<T, HookError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum HookError {
    /// Fatal error that should terminate the hook.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Commit message lint error.
    #[error("lint error: {0}")]
    Lint(#[from] Box<LintError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Create a fatal [`HookError::Bailed`] that terminates the hook.
pub fn bail_out(message: impl Into<String>) -> HookError {
    HookError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for HookError {
                fn from(err: $error) -> Self {
                    HookError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    ConfigError => Config,
    ProcessError => Process,
    LintError => Lint,
    std::io::Error => Io,
}

// --- Gix Errors ---

/// Wrapper for gix-specific errors.
///
/// Large error types are boxed to keep enum size manageable.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to discover repository from path.
    #[error("failed to discover repository: {0}")]
    Discover(#[from] Box<gix::discover::Error>),

    /// Repository has no worktree (bare repository).
    #[error("repository has no worktree (bare repository)")]
    BareRepository,
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Git command execution failed.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(#[from] GixError),

    /// A hook file exists and was not written by stagelint.
    #[error("hook '{path}' already exists (use --force to overwrite)")]
    ForeignHook { path: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// A staged rule pattern is not a valid glob.
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// A commit ignore pattern is not a valid regular expression.
    #[error("invalid ignore pattern '{pattern}': {message}")]
    InvalidIgnore { pattern: String, message: String },

    /// A `--set` override is not of the form `key=value`.
    #[error("invalid override '{0}', expected KEY=VALUE")]
    InvalidOverride(String),
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },

    /// Process timed out.
    #[error("process '{command}' timed out after {timeout_secs} seconds")]
    Timeout { command: String, timeout_secs: u64 },
}

// --- Lint Errors ---

/// Commit message lint errors.
#[derive(Debug, Error)]
pub enum LintError {
    /// Failed to read the commit message file.
    #[error("failed to read commit message '{path}': {source}")]
    MessageRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The message violated at least one error-level rule.
    #[error("commit message rejected: {errors} problems, {warnings} warnings")]
    Rejected { errors: usize, warnings: usize },
}
