// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for stagelint.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, StagedConfig, CommitConfig
//! StagedConfig.rules: [StagedRule { pattern, commands }]
//! CommitConfig.rules: CommitRulesOverride (merged over the preset)
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::merge::{CommitRulesOverride, merge_commit_rules};
use crate::commit::rules::{CommitRules, Preset};
use crate::logging::LogLevel;
use crate::staged::rule::StagedRule;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Print what would run without running it.
    pub dry: bool,
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// Write the log file as JSON lines.
    pub log_json: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
            log_json: false,
        }
    }
}

/// Pre-commit configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StagedConfig {
    /// Re-add matched files to the index after the commands succeed.
    pub restage: bool,
    /// Per-command timeout in seconds, 0 for none.
    pub timeout_secs: u64,
    /// Rules in evaluation order.
    pub rules: Vec<StagedRule>,
}

impl Default for StagedConfig {
    fn default() -> Self {
        Self {
            restage: true,
            timeout_secs: 0,
            rules: vec![StagedRule::go()],
        }
    }
}

impl StagedConfig {
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        match self.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

/// Commit message configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommitConfig {
    /// Rule set the overrides apply to.
    pub extends: Preset,
    /// Skip merge, revert, fixup and release commits.
    pub default_ignores: bool,
    /// Extra regexes; a match anywhere in the message skips linting.
    pub ignores: Vec<String>,
    /// Field-level rule overrides.
    pub rules: CommitRulesOverride,
}

impl Default for CommitConfig {
    fn default() -> Self {
        Self {
            extends: Preset::Conventional,
            default_ignores: true,
            ignores: Vec::new(),
            rules: CommitRulesOverride::default(),
        }
    }
}

impl CommitConfig {
    /// The preset with the configured overrides applied.
    #[must_use]
    pub fn resolved_rules(&self) -> CommitRules {
        merge_commit_rules(&self.extends.rules(), &self.rules)
    }
}
