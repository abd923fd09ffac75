// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities with parallel traversal.
//!
//! ```text
//! walk:  parallel_walk()    ignore::WalkParallel (multi-core)
//!        work_tree_files()  relative, `/`-separated, sorted
//!        WalkOptions        max_depth, hidden, gitignore
//! ```

pub mod walk;
