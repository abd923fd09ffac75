// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Planning: staged files + rules --> per-rule command lists.
//!
//! ```text
//! files ──normalize──> rule.select() ──> group_directories() ──> expand()
//!                         (glob)            (dedup)            (templates)
//! ```

use serde::Serialize;

use super::group::{DirectoryKey, expand_directories, group_directories};
use super::rule::StagedRule;
use crate::error::ConfigError;

/// Commands planned for one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RulePlan {
    /// Pattern of the rule that produced this plan.
    pub pattern: String,
    /// Matched files, in staging order.
    pub files: Vec<String>,
    /// Unique directories of `files`.
    pub directories: Vec<DirectoryKey>,
    /// Flattened commands, grouped by directory.
    pub commands: Vec<String>,
}

/// Normalize a path reported by git or the user.
///
/// A leading `./` is dropped. On Windows backslashes become `/`; elsewhere
/// `\` is an ordinary file name character and is kept.
#[must_use]
pub fn normalize_path(path: &str) -> String {
    #[cfg(windows)]
    let path = path.replace('\\', "/");
    #[cfg(not(windows))]
    let path = path.to_string();
    path.strip_prefix("./").map_or(path.clone(), str::to_string)
}

/// Plan every rule against `files`.
///
/// Rules matching no file are left out. A file matched by several rules
/// appears in each of their plans.
///
/// # Errors
///
/// Returns `ConfigError::InvalidGlob` if a rule pattern does not compile.
pub fn plan<S: AsRef<str>>(
    rules: &[StagedRule],
    files: &[S],
) -> Result<Vec<RulePlan>, ConfigError> {
    let files: Vec<String> = files.iter().map(|f| normalize_path(f.as_ref())).collect();

    let mut plans = Vec::new();
    for rule in rules {
        let matched = rule.select(&files)?;
        if matched.is_empty() {
            tracing::debug!(pattern = %rule.pattern, "no files matched");
            continue;
        }

        let directories = group_directories(&matched);
        let commands = expand_directories(&directories, &rule.commands);
        tracing::debug!(
            pattern = %rule.pattern,
            files = matched.len(),
            directories = directories.len(),
            commands = commands.len(),
            "planned rule"
        );

        plans.push(RulePlan {
            pattern: rule.pattern.clone(),
            files: matched.into_iter().map(str::to_string).collect(),
            directories,
            commands,
        });
    }
    Ok(plans)
}

/// Files covered by any plan, de-duplicated in first-seen order.
#[must_use]
pub fn planned_files(plans: &[RulePlan]) -> Vec<String> {
    let mut seen = std::collections::BTreeSet::new();
    plans
        .iter()
        .flat_map(|p| p.files.iter())
        .filter(|f| seen.insert(f.as_str()))
        .cloned()
        .collect()
}

/// Render plans as plain text, one block per rule.
#[must_use]
pub fn format_plans(plans: &[RulePlan]) -> String {
    use std::fmt::Write as _;

    let mut out = String::new();
    for plan in plans {
        let _ = writeln!(
            out,
            "{} ({} files, {} directories)",
            plan.pattern,
            plan.files.len(),
            plan.directories.len()
        );
        for command in &plan.commands {
            let _ = writeln!(out, "  {command}");
        }
    }
    out
}
