// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Conventional commit message parsing.
//!
//! ```text
//! feat(user)!: add session refresh      <- header: type(scope)!: subject
//!                                       <- blank
//! Tokens are rotated on every request.  <- body
//!                                       <- blank
//! BREAKING CHANGE: old tokens rejected  <- footer (trailers)
//! Refs: #42
//! ```

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Everything below this line is dropped by `git commit --cleanup=scissors`.
const SCISSORS: &str = "# ------------------------ >8 ------------------------";

fn header_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\w*)(?:\(([^()\r\n]*)\))?(!)?: (.*)$").expect("header pattern is valid")
    })
}

fn trailer_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:BREAKING[ -]CHANGE: |[A-Za-z][\w-]*(?:: | #)\S)")
            .expect("trailer pattern is valid")
    })
}

fn breaking_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^BREAKING[ -]CHANGE: ").expect("breaking pattern is valid"))
}

/// A parsed commit message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommitMessage {
    /// Message after comment and scissors removal.
    pub raw: String,
    /// First line, untrimmed.
    pub header: String,
    /// Commit type (`feat`, `fix`, ...); `None` if the header is not conventional.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub scope: Option<String>,
    /// `!` after type/scope or a `BREAKING CHANGE:` footer.
    pub breaking: bool,
    pub subject: Option<String>,
    pub body: Option<String>,
    pub footer: Option<String>,
    /// Whether the line after the header is blank (or absent).
    pub(crate) blank_after_header: bool,
    /// Whether the footer, if any, is preceded by a blank line.
    pub(crate) blank_before_footer: bool,
}

/// Strip git comment lines and everything below a scissors line.
#[must_use]
pub fn strip_comments(text: &str) -> String {
    let mut kept = Vec::new();
    for line in text.lines() {
        if line == SCISSORS {
            break;
        }
        if line.starts_with('#') {
            continue;
        }
        kept.push(line.trim_end_matches('\r'));
    }
    kept.join("\n").trim_end().to_string()
}

/// Index of the first footer line, if the message has a footer.
///
/// A footer is the final run of trailer lines (continuations indented) that
/// follows a blank line, or anything from a `BREAKING CHANGE:` line onward.
fn footer_start(lines: &[&str]) -> Option<usize> {
    if let Some(i) = lines.iter().skip(1).position(|l| breaking_regex().is_match(l)) {
        return Some(i + 1);
    }

    let mut start = None;
    for i in (1..lines.len()).rev() {
        let line = lines[i];
        if line.trim().is_empty() {
            break;
        }
        if trailer_regex().is_match(line) {
            start = Some(i);
        } else if !line.starts_with(char::is_whitespace) {
            return None;
        }
    }
    start.filter(|&i| lines[i - 1].trim().is_empty())
}

fn paragraph(lines: &[&str]) -> Option<String> {
    let text = lines.join("\n");
    let text = text.trim_matches('\n').trim_end();
    (!text.trim().is_empty()).then(|| text.to_string())
}

impl CommitMessage {
    /// Parse a commit message as written by git into the message file.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let raw = strip_comments(text);
        let lines: Vec<&str> = raw.lines().collect();
        let Some(&header) = lines.first() else {
            return Self {
                blank_after_header: true,
                blank_before_footer: true,
                ..Self::default()
            };
        };

        let (kind, scope, bang, subject) = header_regex().captures(header).map_or(
            (None, None, false, None),
            |caps| {
                let text = |i| caps.get(i).map(|m| m.as_str().to_string());
                (text(1), text(2), caps.get(3).is_some(), text(4))
            },
        );

        let footer_at = footer_start(&lines);
        let body_end = footer_at.unwrap_or(lines.len());
        let body = lines.get(1..body_end).and_then(paragraph);
        let footer = footer_at.and_then(|i| paragraph(&lines[i..]));

        let breaking = bang
            || footer
                .as_deref()
                .is_some_and(|f| f.lines().any(|l| breaking_regex().is_match(l)));

        Self {
            header: header.to_string(),
            kind,
            scope,
            breaking,
            subject,
            body,
            footer,
            blank_after_header: lines.get(1).is_none_or(|l| l.trim().is_empty()),
            blank_before_footer: footer_at.is_none_or(|i| lines[i - 1].trim().is_empty()),
            raw,
        }
    }

    /// True when nothing but comments and whitespace was written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.trim().is_empty()
    }

    /// Body lines, empty when there is no body.
    pub fn body_lines(&self) -> impl Iterator<Item = &str> {
        self.body.as_deref().unwrap_or_default().lines()
    }

    /// Footer lines, empty when there is no footer.
    pub fn footer_lines(&self) -> impl Iterator<Item = &str> {
        self.footer.as_deref().unwrap_or_default().lines()
    }
}
