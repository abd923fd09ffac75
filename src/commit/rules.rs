// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Commit rule settings.
//!
//! ```text
//! RuleSetting<T> { level: 0 | 1 | 2, when: always | never, value: T }
//!
//! CommitRules::conventional()   preset defaults
//! CommitRules::disabled()       every rule at level 0
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ConfigError;

/// How a rule violation is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Severity {
    Disabled,
    Warning,
    Error,
}

impl TryFrom<u8> for Severity {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, ConfigError> {
        match value {
            0 => Ok(Severity::Disabled),
            1 => Ok(Severity::Warning),
            2 => Ok(Severity::Error),
            _ => Err(ConfigError::InvalidValue {
                section: "commit.rules".to_string(),
                key: "level".to_string(),
                message: format!("expected 0, 1 or 2, got {value}"),
            }),
        }
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Disabled => 0,
            Severity::Warning => 1,
            Severity::Error => 2,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => write!(f, "disabled"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Whether the condition of a rule must hold or must not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Applicability {
    #[default]
    Always,
    Never,
}

impl Applicability {
    /// True when a condition that `holds` breaks the rule.
    #[must_use]
    pub const fn violated_by(self, holds: bool) -> bool {
        match self {
            Self::Always => !holds,
            Self::Never => holds,
        }
    }
}

impl fmt::Display for Applicability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Always => write!(f, "always"),
            Self::Never => write!(f, "never"),
        }
    }
}

/// Letter case styles understood by `subject-case` and `type-case`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseStyle {
    LowerCase,
    UpperCase,
    CamelCase,
    KebabCase,
    PascalCase,
    SentenceCase,
    SnakeCase,
    StartCase,
}

fn starts_upper(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

fn starts_lower(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_lowercase)
}

impl CaseStyle {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LowerCase => "lower-case",
            Self::UpperCase => "upper-case",
            Self::CamelCase => "camel-case",
            Self::KebabCase => "kebab-case",
            Self::PascalCase => "pascal-case",
            Self::SentenceCase => "sentence-case",
            Self::SnakeCase => "snake-case",
            Self::StartCase => "start-case",
        }
    }

    /// Whether `text` is written in this style.
    #[must_use]
    pub fn matches(self, text: &str) -> bool {
        let has_separator = text.contains(|c: char| c.is_whitespace() || c == '-' || c == '_');
        match self {
            Self::LowerCase => text == text.to_lowercase(),
            Self::UpperCase => {
                text == text.to_uppercase() && text.chars().any(char::is_alphabetic)
            }
            Self::CamelCase => !has_separator && starts_lower(text),
            Self::PascalCase => !has_separator && starts_upper(text),
            Self::KebabCase => text == text.to_lowercase() && !text.contains([' ', '_']),
            Self::SnakeCase => text == text.to_lowercase() && !text.contains([' ', '-']),
            Self::SentenceCase => starts_upper(text),
            Self::StartCase => {
                !text.trim().is_empty() && text.split_whitespace().all(starts_upper)
            }
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule values rendered for `stagelint rules` and in problem messages.
pub trait RuleValue {
    fn describe(&self) -> String;
}

impl RuleValue for () {
    fn describe(&self) -> String {
        String::new()
    }
}

impl RuleValue for usize {
    fn describe(&self) -> String {
        self.to_string()
    }
}

impl RuleValue for String {
    fn describe(&self) -> String {
        format!("{self:?}")
    }
}

impl RuleValue for CaseStyle {
    fn describe(&self) -> String {
        self.as_str().to_string()
    }
}

impl<T: fmt::Display> RuleValue for Vec<T> {
    fn describe(&self) -> String {
        let items: Vec<String> = self.iter().map(ToString::to_string).collect();
        format!("[{}]", items.join(", "))
    }
}

/// Severity, applicability and value of one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSetting<T> {
    pub level: Severity,
    pub when: Applicability,
    pub value: T,
}

impl<T> RuleSetting<T> {
    #[must_use]
    pub const fn new(level: Severity, when: Applicability, value: T) -> Self {
        Self { level, when, value }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        !matches!(self.level, Severity::Disabled)
    }

    /// The same rule switched off.
    #[must_use]
    pub fn disabled(self) -> Self {
        Self {
            level: Severity::Disabled,
            ..self
        }
    }
}

impl RuleSetting<()> {
    const fn flag(level: Severity, when: Applicability) -> Self {
        Self::new(level, when, ())
    }
}

/// Rule names in evaluation and display order.
pub const RULE_NAMES: [&str; 12] = [
    "header-max-length",
    "header-trim",
    "body-leading-blank",
    "body-max-line-length",
    "footer-leading-blank",
    "footer-max-line-length",
    "subject-case",
    "subject-empty",
    "subject-full-stop",
    "type-case",
    "type-empty",
    "type-enum",
];

/// Commit types accepted by the conventional preset.
pub const CONVENTIONAL_TYPES: [&str; 11] = [
    "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert", "style", "test",
];

/// The complete commit rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRules {
    pub header_max_length: RuleSetting<usize>,
    pub header_trim: RuleSetting<()>,
    pub body_leading_blank: RuleSetting<()>,
    pub body_max_line_length: RuleSetting<usize>,
    pub footer_leading_blank: RuleSetting<()>,
    pub footer_max_line_length: RuleSetting<usize>,
    pub subject_case: RuleSetting<Vec<CaseStyle>>,
    pub subject_empty: RuleSetting<()>,
    pub subject_full_stop: RuleSetting<String>,
    pub type_case: RuleSetting<CaseStyle>,
    pub type_empty: RuleSetting<()>,
    pub type_enum: RuleSetting<Vec<String>>,
}

impl Default for CommitRules {
    fn default() -> Self {
        Self::conventional()
    }
}

impl CommitRules {
    /// Defaults of the conventional commit preset.
    #[must_use]
    pub fn conventional() -> Self {
        use Applicability::{Always, Never};
        use Severity::{Error, Warning};

        Self {
            header_max_length: RuleSetting::new(Error, Always, 100),
            header_trim: RuleSetting::flag(Error, Always),
            body_leading_blank: RuleSetting::flag(Warning, Always),
            body_max_line_length: RuleSetting::new(Error, Always, 100),
            footer_leading_blank: RuleSetting::flag(Warning, Always),
            footer_max_line_length: RuleSetting::new(Error, Always, 100),
            subject_case: RuleSetting::new(
                Error,
                Never,
                vec![
                    CaseStyle::SentenceCase,
                    CaseStyle::StartCase,
                    CaseStyle::PascalCase,
                    CaseStyle::UpperCase,
                ],
            ),
            subject_empty: RuleSetting::flag(Error, Never),
            subject_full_stop: RuleSetting::new(Error, Never, ".".to_string()),
            type_case: RuleSetting::new(Error, Always, CaseStyle::LowerCase),
            type_empty: RuleSetting::flag(Error, Never),
            type_enum: RuleSetting::new(
                Error,
                Always,
                CONVENTIONAL_TYPES.iter().map(ToString::to_string).collect(),
            ),
        }
    }

    /// The preset with every rule switched off.
    #[must_use]
    pub fn disabled() -> Self {
        let rules = Self::conventional();
        Self {
            header_max_length: rules.header_max_length.disabled(),
            header_trim: rules.header_trim.disabled(),
            body_leading_blank: rules.body_leading_blank.disabled(),
            body_max_line_length: rules.body_max_line_length.disabled(),
            footer_leading_blank: rules.footer_leading_blank.disabled(),
            footer_max_line_length: rules.footer_max_line_length.disabled(),
            subject_case: rules.subject_case.disabled(),
            subject_empty: rules.subject_empty.disabled(),
            subject_full_stop: rules.subject_full_stop.disabled(),
            type_case: rules.type_case.disabled(),
            type_empty: rules.type_empty.disabled(),
            type_enum: rules.type_enum.disabled(),
        }
    }

    /// `(name, level, when, value)` for every rule, in [`RULE_NAMES`] order.
    #[must_use]
    pub fn describe(&self) -> Vec<(&'static str, Severity, Applicability, String)> {
        fn row<T: RuleValue>(
            name: &'static str,
            rule: &RuleSetting<T>,
        ) -> (&'static str, Severity, Applicability, String) {
            (name, rule.level, rule.when, rule.value.describe())
        }

        vec![
            row(RULE_NAMES[0], &self.header_max_length),
            row(RULE_NAMES[1], &self.header_trim),
            row(RULE_NAMES[2], &self.body_leading_blank),
            row(RULE_NAMES[3], &self.body_max_line_length),
            row(RULE_NAMES[4], &self.footer_leading_blank),
            row(RULE_NAMES[5], &self.footer_max_line_length),
            row(RULE_NAMES[6], &self.subject_case),
            row(RULE_NAMES[7], &self.subject_empty),
            row(RULE_NAMES[8], &self.subject_full_stop),
            row(RULE_NAMES[9], &self.type_case),
            row(RULE_NAMES[10], &self.type_empty),
            row(RULE_NAMES[11], &self.type_enum),
        ]
    }
}

/// Rule set a commit configuration starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    Conventional,
    None,
}

impl Preset {
    #[must_use]
    pub fn rules(self) -> CommitRules {
        match self {
            Self::Conventional => CommitRules::conventional(),
            Self::None => CommitRules::disabled(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conventional => write!(f, "conventional"),
            Self::None => write!(f, "none"),
        }
    }
}
