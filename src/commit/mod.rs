// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Commit message linting.
//!
//! ```text
//! COMMIT_EDITMSG
//!      |
//!      v
//! message::CommitMessage::parse   header / body / footer
//!      |
//!      v
//! lint::Linter (rules::CommitRules + ignores)
//!      |
//!      v
//! report::format_report           ⧗ input, ✖ / ⚠ lines, summary
//! ```

pub mod lint;
pub mod message;
pub mod report;
pub mod rules;
