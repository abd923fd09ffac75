// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Staged rules: a glob selecting files and the commands run per directory.
//!
//! ```toml
//! [[staged.rules]]
//! pattern = "{services,shared}/**/*.go"
//! commands = ["golangci-lint fmt {dir}", "golangci-lint run --fix {dir}"]
//! ```

use serde::{Deserialize, Serialize};
use wax::{Glob, Program as _};

use super::group::DIR_PLACEHOLDER;
use crate::error::ConfigError;

/// Default pattern: Go sources under the service and shared trees.
pub const GO_SOURCES: &str = "{services,shared}/**/*.go";

/// Default formatter invocation.
pub const GO_FORMAT: &str = "golangci-lint fmt {dir}";

/// Default fix-mode lint invocation.
pub const GO_FIX_LINT: &str = "golangci-lint run --fix {dir}";

/// A glob and the command templates applied to each matching directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StagedRule {
    /// Glob matched against repository relative paths.
    pub pattern: String,
    /// Command templates, run in order for each directory.
    pub commands: Vec<String>,
}

impl Default for StagedRule {
    fn default() -> Self {
        Self::go()
    }
}

impl StagedRule {
    pub fn new<P, I, S>(pattern: P, commands: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pattern: pattern.into(),
            commands: commands.into_iter().map(Into::into).collect(),
        }
    }

    /// Format then fix-lint every touched Go package directory.
    #[must_use]
    pub fn go() -> Self {
        Self::new(GO_SOURCES, [GO_FORMAT, GO_FIX_LINT])
    }

    /// Compile the pattern.
    fn glob(&self) -> Result<Glob<'_>, ConfigError> {
        Glob::new(&self.pattern).map_err(|e| ConfigError::InvalidGlob {
            pattern: self.pattern.clone(),
            message: e.to_string(),
        })
    }

    /// Check that the pattern compiles and at least one command is set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidGlob` for a bad pattern and
    /// `ConfigError::InvalidValue` for an empty or blank command list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.glob()?;
        if self.commands.is_empty() || self.commands.iter().any(|c| c.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                section: "staged.rules".to_string(),
                key: "commands".to_string(),
                message: format!("rule '{}' needs at least one non-empty command", self.pattern),
            });
        }
        if let Some(cmd) = self.commands.iter().find(|c| !c.contains(DIR_PLACEHOLDER)) {
            tracing::debug!(
                pattern = %self.pattern,
                command = %cmd,
                "command has no {{dir}} placeholder, it runs once per directory unchanged"
            );
        }
        Ok(())
    }

    /// Whether a single path matches the pattern.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidGlob` if the pattern does not compile.
    pub fn matches(&self, path: &str) -> Result<bool, ConfigError> {
        Ok(self.glob()?.is_match(path))
    }

    /// Paths from `files` matched by the pattern, in input order.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidGlob` if the pattern does not compile.
    pub fn select<'f, S: AsRef<str>>(&self, files: &'f [S]) -> Result<Vec<&'f str>, ConfigError> {
        let glob = self.glob()?;
        Ok(files
            .iter()
            .map(AsRef::as_ref)
            .filter(|path| glob.is_match(*path))
            .collect())
    }

    /// Programs invoked by the commands (first word of each template).
    #[must_use]
    pub fn programs(&self) -> Vec<&str> {
        let mut programs: Vec<&str> = self
            .commands
            .iter()
            .filter_map(|c| c.split_whitespace().next())
            .collect();
        programs.dedup();
        programs
    }
}
