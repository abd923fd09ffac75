// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core process management.
//!
//! ```text
//!      core
//!       |
//!       v
//!    process
//!       |
//!    Builder --> tokio::process --> Output
//! ```

pub mod process;
