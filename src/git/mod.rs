// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!        Public API
//!      query.rs   ops.rs
//!          \        /
//!           v      v
//!      ,------------------,
//!      | backend (traits) |
//!      '--+----------+----'
//!         |          |
//!         v          v
//!    GitQuery    GitStaging
//!   (gix, read)  (CLI, index)
//!         |          |
//!         v          v
//!    GixBackend  ShellBackend
//!    .workdir    .staged_files
//!    .git_dir    .add_paths
//!                .hooks_dir
//! ```
//!
//! **`GixBackend`**: pure Rust, no subprocess, read-only.
//! **`ShellBackend`**: git CLI for index reads and writes, and for the hooks
//! directory, which depends on `core.hooksPath`.

pub mod backend;
pub mod ops;
pub mod query;
