// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for stagelint.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. compiled defaults
//! 2. stagelint.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. STAGELINT_* env vars
//! 5. --set / CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! STAGELINT_GLOBAL__DRY=true             → global.dry = true
//! STAGELINT_STAGED__TIMEOUT_SECS=60      → staged.timeout_secs = 60
//! STAGELINT_COMMIT__DEFAULT_IGNORES=false → commit.default_ignores = false
//! ```
//!
//! # Commit Rule Overrides
//!
//! ```toml
//! [commit]
//! extends = "conventional"
//!
//! [commit.rules]
//! header_max_length = { value = 72 } # level and when stay as in the preset
//! ```

pub mod loader;
pub mod merge;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::commit::lint::Linter;
use crate::commit::rules::CommitRules;
use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{CommitConfig, GlobalConfig, StagedConfig};

/// File picked up from the current directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "stagelint.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "STAGELINT";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Pre-commit rules.
    pub staged: StagedConfig,
    /// Commit message rules.
    pub commit: CommitConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use stagelint::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("stagelint.toml")
    ///     .with_env_prefix("STAGELINT")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Check staged rules and commit ignore patterns.
    ///
    /// # Errors
    ///
    /// Returns the first rule whose glob or commands are invalid, or the first
    /// ignore pattern that is not a valid regex.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        for rule in &self.staged.rules {
            rule.validate()?;
        }
        Linter::from_config(&self.commit)?;
        Ok(())
    }

    /// Effective commit rules (preset plus overrides).
    #[must_use]
    pub fn commit_rules(&self) -> CommitRules {
        self.commit.resolved_rules()
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_staged_options(&mut options);
        self.format_commit_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("global.dry".into(), self.global.dry.to_string());
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        if let Some(log_file) = &self.global.log_file {
            options.insert("global.log_file".into(), log_file.display().to_string());
        }
        options.insert("global.log_json".into(), self.global.log_json.to_string());
    }

    fn format_staged_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("staged.restage".into(), self.staged.restage.to_string());
        options.insert(
            "staged.timeout_secs".into(),
            self.staged.timeout_secs.to_string(),
        );
        for (i, rule) in self.staged.rules.iter().enumerate() {
            options.insert(format!("staged.rules.{i}.pattern"), rule.pattern.clone());
            options.insert(
                format!("staged.rules.{i}.commands"),
                format!("{:?}", rule.commands),
            );
        }
    }

    fn format_commit_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("commit.extends".into(), self.commit.extends.to_string());
        options.insert(
            "commit.default_ignores".into(),
            self.commit.default_ignores.to_string(),
        );
        options.insert(
            "commit.ignores".into(),
            format!("{:?}", self.commit.ignores),
        );
        for (name, level, when, value) in self.commit_rules().describe() {
            let setting = format!("{level} {when} {value}");
            options.insert(
                format!("commit.rules.{}", name.replace('-', "_")),
                setting.trim_end().to_string(),
            );
        }
    }
}

/// Split a `section/key=value` or `section.key=value` override.
///
/// # Errors
///
/// Returns an error if there is no `=` or the key is empty.
pub fn parse_override(option: &str) -> std::result::Result<(String, String), ConfigError> {
    let invalid = || ConfigError::InvalidOverride(option.to_string());
    let (key, value) = option.split_once('=').ok_or_else(invalid)?;
    let key = key.trim();
    if key.is_empty() {
        return Err(invalid());
    }
    Ok((key.replace('/', "."), value.trim().to_string()))
}
