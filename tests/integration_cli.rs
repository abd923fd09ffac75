// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the command line.
//!
//! Parses realistic argument lists and runs the built binary for the
//! commands that need no repository.

use clap::Parser;
use stagelint::cli::global::GlobalOptions;
use stagelint::cli::{Cli, Command as CliCommand, OutputFormat};
use std::process::{Command, Output};

fn stagelint() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stagelint"));
    cmd.arg("--no-default-config");
    cmd
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["stagelint", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(CliCommand::Version)));
}

#[test]
fn cli_hook_invocations() {
    // What the installed hooks run.
    let cli = Cli::try_parse_from(["stagelint", "staged"]).unwrap();
    assert!(matches!(cli.command, Some(CliCommand::Staged(_))));

    let cli = Cli::try_parse_from(["stagelint", "commit-msg", ".git/COMMIT_EDITMSG"]).unwrap();
    assert!(matches!(cli.command, Some(CliCommand::CommitMsg(_))));
}

#[test]
fn cli_global_options_file_log_level_overrides() {
    let cli = Cli::try_parse_from([
        "stagelint",
        "-l",
        "2",
        "--file-log-level",
        "4",
        "--log-file",
        "hook.log",
        "rules",
    ])
    .unwrap();

    insta::assert_debug_snapshot!(cli.global.to_config_overrides(), @r#"
    [
        "global/output_log_level=2",
        "global/file_log_level=4",
        "global/log_file=hook.log",
    ]
    "#);
}

#[test]
fn cli_global_options_default_has_no_overrides() {
    assert!(GlobalOptions::default().to_config_overrides().is_empty());
}

#[test]
fn cli_plan_defaults_to_text() {
    let cli = Cli::try_parse_from(["stagelint", "plan"]).unwrap();
    let Some(CliCommand::Plan(args)) = cli.command else {
        panic!("expected plan command");
    };
    assert_eq!(args.format, OutputFormat::Text);
    assert!(args.paths.is_empty());
}

#[test]
fn cli_unknown_format_rejected() {
    assert!(Cli::try_parse_from(["stagelint", "plan", "--format", "yaml"]).is_err());
}

// =============================================================================
// Binary
// =============================================================================

#[test]
fn binary_version() {
    let output = stagelint().arg("version").output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), env!("CARGO_PKG_VERSION"));
}

#[test]
fn binary_without_command_fails() {
    let output = stagelint().output().unwrap();
    assert!(!output.status.success());
    assert!(stderr(&output).contains("No command specified"));
}

#[test]
fn binary_rules() {
    let output = stagelint().arg("rules").output().unwrap();
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.starts_with("header-max-length        error     always  60\n"));
    assert!(text.contains("body-max-line-length     disabled  always  100\n"));
}

#[test]
fn binary_plan_for_paths() {
    let temp = tempfile::tempdir().unwrap();
    let output = stagelint()
        .args([
            "plan",
            "services/user/handler.go",
            "services/user/handler_test.go",
            "shared/log/log.go",
            "docs/readme.md",
        ])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", stderr(&output));

    insta::assert_snapshot!(stdout(&output).trim_end(), @r"
    {services,shared}/**/*.go (3 files, 2 directories)
      golangci-lint fmt services/user
      golangci-lint run --fix services/user
      golangci-lint fmt shared/log
      golangci-lint run --fix shared/log
    ");
}

#[test]
fn binary_plan_json() {
    let temp = tempfile::tempdir().unwrap();
    let output = stagelint()
        .args(["plan", "--format", "json", "shared/x.go"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", stderr(&output));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["directories"][0], "shared");
    assert_eq!(json[0]["commands"][1], "golangci-lint run --fix shared");
}

#[test]
fn binary_plan_no_match() {
    let temp = tempfile::tempdir().unwrap();
    let output = stagelint()
        .args(["plan", "README.md"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "No files match any staged rule");
}

#[test]
fn binary_invalid_set_option_fails() {
    let output = stagelint()
        .args(["-s", "staged.restage", "rules"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(stderr(&output).contains("expected KEY=VALUE"));
}

#[test]
fn binary_missing_config_file_fails() {
    let temp = tempfile::tempdir().unwrap();
    let output = stagelint()
        .args(["-c", "missing.toml", "rules"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to load config"));
}
