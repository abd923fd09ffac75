// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Staged-file dispatch.
//!
//! ```text
//! ChangeSet (git diff --cached)
//!      |
//!      v
//!   rule.select()        glob filter per rule
//!      |
//!      v
//!   group_directories()  strip file name, dedup
//!      |
//!      v
//!   expand_directories() {dir} -> fmt cmd, fix cmd
//!      |
//!      v
//!   run_plans()          shell, serial per rule
//! ```
//!
//! Everything up to the runner is pure: the same staged list always yields
//! the same plan.

pub mod group;
pub mod plan;
pub mod rule;
pub mod runner;

#[cfg(test)]
mod tests;
