// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Rule evaluation.
//!
//! ```text
//! text --> ignored? --yes--> LintReport { valid, ignored }
//!           |no
//!           v
//!        CommitMessage::parse --> each enabled rule --> Problem*
//!           --> LintReport { errors, warnings }
//! ```

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use super::message::CommitMessage;
use super::rules::{Applicability, CommitRules, RuleSetting, Severity};
use crate::config::types::CommitConfig;
use crate::error::ConfigError;

/// Messages git or release tooling writes on its own, matched against the header.
const DEFAULT_IGNORES: [&str; 9] = [
    r"^((Merge pull request)|(Merge (.*?) into (.*?))|(Merge branch (.*?)))",
    r"^Merge tag (.*?)$",
    r"^(R|r)evert (.*)",
    r"^(amend|fixup|squash)!",
    r"^(Merged (.*?)(in|into) (.*)|Merged PR (.*): (.*))",
    r"^Merge remote-tracking branch(\s*)(.*)",
    r"^Automatic merge(.*)",
    r"^Auto-merged (.*?) into (.*)",
    r"^v?\d+\.\d+\.\d+(-[0-9A-Za-z.-]+)?(\+[0-9A-Za-z.-]+)?\s*$",
];

/// Reported for a message with nothing but comments and whitespace.
pub const EMPTY_MESSAGE: &str = "empty-message";

/// One rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    pub rule: &'static str,
    pub level: Severity,
    pub message: String,
}

/// Outcome of linting one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintReport {
    /// The message as linted, comments stripped.
    pub input: String,
    /// No error-level problems.
    pub valid: bool,
    /// Matched an ignore pattern and was not evaluated.
    pub ignored: bool,
    pub errors: Vec<Problem>,
    pub warnings: Vec<Problem>,
}

impl LintReport {
    fn from_problems(input: String, problems: Vec<Problem>) -> Self {
        let (errors, warnings): (Vec<_>, Vec<_>) = problems
            .into_iter()
            .partition(|p| p.level == Severity::Error);
        Self {
            input,
            valid: errors.is_empty(),
            ignored: false,
            errors,
            warnings,
        }
    }
}

fn compile(pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|e| ConfigError::InvalidIgnore {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

/// Checks commit messages against a rule set.
#[derive(Debug, Clone)]
pub struct Linter {
    rules: CommitRules,
    header_ignores: Vec<Regex>,
    message_ignores: Vec<Regex>,
}

impl Linter {
    /// Linter without ignore patterns.
    #[must_use]
    pub const fn new(rules: CommitRules) -> Self {
        Self {
            rules,
            header_ignores: Vec::new(),
            message_ignores: Vec::new(),
        }
    }

    /// Linter for the `[commit]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured ignore pattern is not a valid regex.
    pub fn from_config(config: &CommitConfig) -> Result<Self, ConfigError> {
        let mut linter = Self::new(config.resolved_rules());
        if config.default_ignores {
            linter.header_ignores = DEFAULT_IGNORES
                .iter()
                .map(|p| compile(p))
                .collect::<Result<_, _>>()?;
        }
        linter.message_ignores = config
            .ignores
            .iter()
            .map(|p| compile(p))
            .collect::<Result<_, _>>()?;
        Ok(linter)
    }

    #[must_use]
    pub const fn rules(&self) -> &CommitRules {
        &self.rules
    }

    /// Whether a message is skipped without evaluation.
    #[must_use]
    pub fn is_ignored(&self, message: &str) -> bool {
        let header = message.lines().next().unwrap_or_default();
        self.header_ignores.iter().any(|re| re.is_match(header))
            || self.message_ignores.iter().any(|re| re.is_match(message))
    }

    /// Lint a raw commit message as git writes it to the message file.
    #[must_use]
    pub fn lint(&self, text: &str) -> LintReport {
        let message = CommitMessage::parse(text);

        if message.is_empty() {
            return LintReport::from_problems(
                String::new(),
                vec![Problem {
                    rule: EMPTY_MESSAGE,
                    level: Severity::Error,
                    message: "message may not be empty".to_string(),
                }],
            );
        }

        if self.is_ignored(&message.raw) {
            debug!(header = %message.header, "commit message ignored");
            return LintReport {
                input: message.raw,
                valid: true,
                ignored: true,
                errors: Vec::new(),
                warnings: Vec::new(),
            };
        }

        let problems = self.problems(&message);
        LintReport::from_problems(message.raw, problems)
    }

    fn problems(&self, message: &CommitMessage) -> Vec<Problem> {
        let rules = &self.rules;
        let mut problems = Vec::new();
        let mut report = |rule: &'static str, level: Severity, text: String| {
            problems.push(Problem {
                rule,
                level,
                message: text,
            });
        };

        let header = message.header.as_str();
        let subject = message.subject.as_deref().unwrap_or_default();
        let kind = message.kind.as_deref().unwrap_or_default();

        let header_length = header.chars().count();
        if let Some(text) = max_length(&rules.header_max_length, "header", header_length) {
            report("header-max-length", rules.header_max_length.level, text);
        }

        let trim = &rules.header_trim;
        if trim.is_enabled() && trim.when.violated_by(header == header.trim()) {
            report(
                "header-trim",
                trim.level,
                format!("header {} be surrounded by whitespace", negated(trim.when)),
            );
        }

        let body_blank = &rules.body_leading_blank;
        if body_blank.is_enabled()
            && message.body.is_some()
            && body_blank.when.violated_by(message.blank_after_header)
        {
            report(
                "body-leading-blank",
                body_blank.level,
                format!("body {} have leading blank line", must(body_blank.when)),
            );
        }

        let longest_body = longest_line(message.body_lines());
        if let Some(text) = max_line_length(&rules.body_max_line_length, "body", longest_body) {
            report("body-max-line-length", rules.body_max_line_length.level, text);
        }

        let footer_blank = &rules.footer_leading_blank;
        if footer_blank.is_enabled()
            && message.footer.is_some()
            && footer_blank.when.violated_by(message.blank_before_footer)
        {
            report(
                "footer-leading-blank",
                footer_blank.level,
                format!("footer {} have leading blank line", must(footer_blank.when)),
            );
        }

        let longest_footer = longest_line(message.footer_lines());
        let footer_rule = &rules.footer_max_line_length;
        if let Some(text) = max_line_length(footer_rule, "footer", longest_footer) {
            report("footer-max-line-length", footer_rule.level, text);
        }

        let case = &rules.subject_case;
        if case.is_enabled() && subject.starts_with(|c: char| c.is_ascii_alphabetic()) {
            let holds = case.value.iter().any(|style| style.matches(subject));
            if case.when.violated_by(holds) {
                let styles: Vec<&str> = case.value.iter().map(|s| s.as_str()).collect();
                report(
                    "subject-case",
                    case.level,
                    format!("subject {} be {}", must(case.when), styles.join(", ")),
                );
            }
        }

        let empty = &rules.subject_empty;
        if empty.is_enabled() && empty.when.violated_by(subject.trim().is_empty()) {
            report(
                "subject-empty",
                empty.level,
                format!("subject {} be empty", may(empty.when)),
            );
        }

        let stop = &rules.subject_full_stop;
        if stop.is_enabled()
            && !subject.is_empty()
            && stop.when.violated_by(ends_with_full_stop(subject, &stop.value))
        {
            report(
                "subject-full-stop",
                stop.level,
                format!("subject {} end with full stop", may(stop.when)),
            );
        }

        let type_case = &rules.type_case;
        if type_case.is_enabled()
            && !kind.is_empty()
            && type_case.when.violated_by(type_case.value.matches(kind))
        {
            report(
                "type-case",
                type_case.level,
                format!("type {} be {}", must(type_case.when), type_case.value),
            );
        }

        let type_empty = &rules.type_empty;
        if type_empty.is_enabled() && type_empty.when.violated_by(kind.is_empty()) {
            report(
                "type-empty",
                type_empty.level,
                format!("type {} be empty", may(type_empty.when)),
            );
        }

        let type_enum = &rules.type_enum;
        if type_enum.is_enabled()
            && !kind.is_empty()
            && type_enum.when.violated_by(type_enum.value.iter().any(|t| t == kind))
        {
            report(
                "type-enum",
                type_enum.level,
                format!(
                    "type {} be one of [{}]",
                    must(type_enum.when),
                    type_enum.value.join(", ")
                ),
            );
        }

        problems
    }
}

/// A trailing `...` is an ellipsis, not a full stop.
fn ends_with_full_stop(subject: &str, stop: &str) -> bool {
    subject.ends_with(stop) && !(stop == "." && subject.ends_with("..."))
}

fn longest_line<'a>(lines: impl Iterator<Item = &'a str>) -> usize {
    lines.map(|l| l.chars().count()).max().unwrap_or(0)
}

/// Length limits apply in both directions of `when`.
fn max_length(rule: &RuleSetting<usize>, part: &str, length: usize) -> Option<String> {
    (rule.is_enabled() && length > rule.value).then(|| {
        format!(
            "{part} must not be longer than {} characters, current length is {length}",
            rule.value
        )
    })
}

fn max_line_length(rule: &RuleSetting<usize>, part: &str, longest: usize) -> Option<String> {
    (rule.is_enabled() && longest > rule.value)
        .then(|| format!("{part}'s lines must not be longer than {} characters", rule.value))
}

const fn must(when: Applicability) -> &'static str {
    match when {
        Applicability::Always => "must",
        Applicability::Never => "must not",
    }
}

const fn may(when: Applicability) -> &'static str {
    match when {
        Applicability::Always => "must",
        Applicability::Never => "may not",
    }
}

const fn negated(when: Applicability) -> &'static str {
    match when {
        Applicability::Always => "must not",
        Applicability::Never => "must",
    }
}
