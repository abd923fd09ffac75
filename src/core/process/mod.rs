// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning and management.
//!
//! ```text
//! ProcessBuilder::raw("golangci-lint fmt services/user")
//!   .cwd() .capture_output() .timeout()
//!   .run() / .run_with_cancellation(token)
//!       --> tokio::process::Command
//!           stream stdout/stderr
//!       --> ProcessOutput { exit_code, stdout, stderr }
//! ```

pub mod builder;
mod io;
mod runner;
