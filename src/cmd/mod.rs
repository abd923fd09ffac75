// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   staged, plan, commit-msg, rules, install, options, inis
//! ```

pub mod commit;
pub mod config;
pub mod hooks;
pub mod staged;
