// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Executes rule plans.
//!
//! ```text
//! run_plans(plans)
//!   ├─ rule A: cmd1 -> cmd2 -> ...   (serial, stop at first failure)
//!   ├─ rule B: cmd1 -> ...           (rules run concurrently)
//!   └─ join_all --> Vec<RuleReport>
//! ```

use bon::Builder;
use futures_util::future::join_all;
use std::path::PathBuf;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, info, info_span, warn};

use super::plan::RulePlan;
use crate::core::process::builder::{ProcessBuilder, ProcessFlags};

/// Options shared by every command of a run.
#[derive(Debug, Clone, Builder)]
pub struct RunOptions {
    /// Working directory, normally the work tree root.
    #[builder(setters(name = with_cwd))]
    cwd: PathBuf,
    /// Kill a command after this long.
    #[builder(setters(name = with_timeout))]
    timeout: Option<Duration>,
}

impl RunOptions {
    #[must_use]
    pub const fn cwd(&self) -> &PathBuf {
        &self.cwd
    }

    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

/// How one rule ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    /// Every command exited successfully.
    Succeeded,
    /// A command failed; later commands of the rule were skipped.
    Failed {
        command: String,
        exit_code: i32,
        output: String,
    },
    /// A command could not be started or timed out.
    Errored { command: String, message: String },
    /// The run was cancelled.
    Interrupted,
}

/// Result of running one rule plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleReport {
    pub pattern: String,
    /// Commands that ran to completion successfully.
    pub completed: usize,
    pub outcome: RuleOutcome,
}

impl RuleReport {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.outcome, RuleOutcome::Succeeded)
    }
}

/// Run all plans, rules concurrently, commands of a rule serially.
pub async fn run_plans(
    plans: &[RulePlan],
    options: &RunOptions,
    token: &CancellationToken,
) -> Vec<RuleReport> {
    join_all(plans.iter().map(|plan| {
        let span = info_span!("rule", pattern = %plan.pattern);
        run_plan(plan, options, token.clone()).instrument(span)
    }))
    .await
}

/// Run the commands of a single plan in order.
pub async fn run_plan(
    plan: &RulePlan,
    options: &RunOptions,
    token: CancellationToken,
) -> RuleReport {
    let report = |completed, outcome| RuleReport {
        pattern: plan.pattern.clone(),
        completed,
        outcome,
    };

    for (completed, command) in plan.commands.iter().enumerate() {
        info!(cmd = %command, "running");

        let mut builder = ProcessBuilder::raw(command.as_str())
            .cwd(options.cwd())
            .name(command.as_str())
            .capture_output()
            .flag(ProcessFlags::ALLOW_FAILURE);
        if let Some(timeout) = options.timeout() {
            builder = builder.timeout(timeout);
        }

        let output = match builder.run_with_cancellation(token.clone()).await {
            Ok(output) => output,
            Err(e) => {
                warn!(cmd = %command, error = %e, "command could not run");
                return report(
                    completed,
                    RuleOutcome::Errored {
                        command: command.clone(),
                        message: e.to_string(),
                    },
                );
            }
        };

        if output.is_interrupted() {
            return report(completed, RuleOutcome::Interrupted);
        }
        if output.is_timed_out() {
            let secs = options.timeout().map_or(0, |d| d.as_secs());
            return report(
                completed,
                RuleOutcome::Errored {
                    command: command.clone(),
                    message: format!("timed out after {secs} seconds"),
                },
            );
        }
        if !output.success() {
            warn!(cmd = %command, exit_code = output.exit_code(), "command failed");
            return report(
                completed,
                RuleOutcome::Failed {
                    command: command.clone(),
                    exit_code: output.exit_code(),
                    output: output.combined_output(),
                },
            );
        }
    }

    report(plan.commands.len(), RuleOutcome::Succeeded)
}

/// Render failures for the terminal. Empty when every rule succeeded.
#[must_use]
pub fn format_failures(reports: &[RuleReport]) -> String {
    use std::fmt::Write as _;

    let mut out = String::new();
    for report in reports {
        match &report.outcome {
            RuleOutcome::Succeeded => {}
            RuleOutcome::Failed {
                command,
                exit_code,
                output,
            } => {
                let _ = writeln!(out, "✖ {command} (exit code {exit_code})");
                for line in output.lines() {
                    let _ = writeln!(out, "  {line}");
                }
            }
            RuleOutcome::Errored { command, message } => {
                let _ = writeln!(out, "✖ {command}: {message}");
            }
            RuleOutcome::Interrupted => {
                let _ = writeln!(out, "⚠ {} interrupted", report.pattern);
            }
        }
    }
    out
}
