// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Terminal rendering of lint reports and rule tables.
//!
//! ```text
//! ⧗   input: Feat: Add thing.
//! ✖   subject must not be sentence-case, ... [subject-case]
//! ⚠   body must have leading blank line [body-leading-blank]
//!
//! ✖   found 1 problems, 1 warnings
//! ```

use std::fmt::Write as _;

use super::lint::{LintReport, Problem};
use super::rules::CommitRules;

fn problem_line(out: &mut String, sign: &str, problem: &Problem) {
    let _ = writeln!(out, "{sign}   {} [{}]", problem.message, problem.rule);
}

/// Render a report. Empty for a clean or ignored message.
#[must_use]
pub fn format_report(report: &LintReport) -> String {
    let mut out = String::new();
    if report.errors.is_empty() && report.warnings.is_empty() {
        return out;
    }

    let header = report.input.lines().next().unwrap_or_default();
    let _ = writeln!(out, "⧗   input: {header}");
    for problem in &report.errors {
        problem_line(&mut out, "✖", problem);
    }
    for problem in &report.warnings {
        problem_line(&mut out, "⚠", problem);
    }

    let sign = if report.valid { "⚠" } else { "✖" };
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{sign}   found {} problems, {} warnings",
        report.errors.len(),
        report.warnings.len()
    );
    out
}

/// Render the effective rule set, one rule per line.
#[must_use]
pub fn format_rules(rules: &CommitRules) -> String {
    let mut out = String::new();
    for (name, level, when, value) in rules.describe() {
        let line = format!("{name:<24} {:<9} {:<7} {value}", level.to_string(), when.to_string());
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out
}
