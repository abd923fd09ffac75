// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Commit rule merging.
//!
//! ```text
//! CommitRules (preset) + CommitRulesOverride --> field-by-field merge
//! ```
//!
//! Only explicitly set fields (`Some`) in an override replace preset values.
//! The defaults of [`CommitRulesOverride`] carry the project settings:
//!
//! ```toml
//! [commit.rules]
//! header_max_length = { level = 2, when = "always", value = 60 }
//! body_max_line_length = { level = 0 }
//! ```

use serde::{Deserialize, Serialize};

use crate::commit::rules::{Applicability, CaseStyle, CommitRules, RuleSetting, Severity};

/// Partial rule setting; unset fields keep the base value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleOverride<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<Severity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub when: Option<Applicability>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<T>,
}

impl<T> Default for RuleOverride<T> {
    fn default() -> Self {
        Self {
            level: None,
            when: None,
            value: None,
        }
    }
}

impl<T: Clone> RuleOverride<T> {
    /// Override that only changes the severity.
    #[must_use]
    pub const fn level(level: Severity) -> Self {
        Self {
            level: Some(level),
            when: None,
            value: None,
        }
    }

    fn apply(&self, base: &RuleSetting<T>) -> RuleSetting<T> {
        RuleSetting {
            level: self.level.unwrap_or(base.level),
            when: self.when.unwrap_or(base.when),
            value: self.value.clone().unwrap_or_else(|| base.value.clone()),
        }
    }
}

/// Commit rules with optional fields for field-level merging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommitRulesOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_max_length: Option<RuleOverride<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_trim: Option<RuleOverride<()>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_leading_blank: Option<RuleOverride<()>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_max_line_length: Option<RuleOverride<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_leading_blank: Option<RuleOverride<()>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_max_line_length: Option<RuleOverride<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_case: Option<RuleOverride<Vec<CaseStyle>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_empty: Option<RuleOverride<()>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_full_stop: Option<RuleOverride<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_case: Option<RuleOverride<CaseStyle>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_empty: Option<RuleOverride<()>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_enum: Option<RuleOverride<Vec<String>>>,
}

impl Default for CommitRulesOverride {
    fn default() -> Self {
        Self {
            header_max_length: Some(RuleOverride {
                level: Some(Severity::Error),
                when: Some(Applicability::Always),
                value: Some(60),
            }),
            body_max_line_length: Some(RuleOverride::level(Severity::Disabled)),
            ..Self::empty()
        }
    }
}

impl CommitRulesOverride {
    /// No overrides at all; the preset is used unchanged.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            header_max_length: None,
            header_trim: None,
            body_leading_blank: None,
            body_max_line_length: None,
            footer_leading_blank: None,
            footer_max_line_length: None,
            subject_case: None,
            subject_empty: None,
            subject_full_stop: None,
            type_case: None,
            type_empty: None,
            type_enum: None,
        }
    }
}

fn apply<T: Clone>(
    base: &RuleSetting<T>,
    override_rule: Option<&RuleOverride<T>>,
) -> RuleSetting<T> {
    override_rule.map_or_else(|| base.clone(), |o| o.apply(base))
}

/// Merge rule overrides over a base rule set.
pub(crate) fn merge_commit_rules(
    base: &CommitRules,
    override_rules: &CommitRulesOverride,
) -> CommitRules {
    let o = override_rules;
    CommitRules {
        header_max_length: apply(&base.header_max_length, o.header_max_length.as_ref()),
        header_trim: apply(&base.header_trim, o.header_trim.as_ref()),
        body_leading_blank: apply(&base.body_leading_blank, o.body_leading_blank.as_ref()),
        body_max_line_length: apply(&base.body_max_line_length, o.body_max_line_length.as_ref()),
        footer_leading_blank: apply(&base.footer_leading_blank, o.footer_leading_blank.as_ref()),
        footer_max_line_length: apply(
            &base.footer_max_line_length,
            o.footer_max_line_length.as_ref(),
        ),
        subject_case: apply(&base.subject_case, o.subject_case.as_ref()),
        subject_empty: apply(&base.subject_empty, o.subject_empty.as_ref()),
        subject_full_stop: apply(&base.subject_full_stop, o.subject_full_stop.as_ref()),
        type_case: apply(&base.type_case, o.type_case.as_ref()),
        type_empty: apply(&base.type_empty, o.type_empty.as_ref()),
        type_enum: apply(&base.type_enum, o.type_enum.as_ref()),
    }
}
