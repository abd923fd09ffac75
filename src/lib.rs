// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |        staged / commit-msg / install
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!              staged      commit     git
//!           glob, group,   parse,   gix/CLI,
//!           plan, run      lint     hooks
//!
//!   +-----------------------------------------+
//!   |  core      process (spawn, timeout)     |
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod commit;
pub mod config;
pub mod core;
pub mod error;
pub mod git;
pub mod logging;
pub mod staged;
pub mod utility;
