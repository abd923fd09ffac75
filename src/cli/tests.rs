// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command, OutputFormat};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["stagelint", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "stagelint",
        "-l",
        "5",
        "-c",
        "a.toml",
        "--config",
        "b.toml",
        "--dry",
        "-s",
        "staged/restage=false",
        "staged",
    ])
    .unwrap();

    assert_eq!(cli.global.configs, [PathBuf::from("a.toml"), PathBuf::from("b.toml")]);
    insta::assert_debug_snapshot!(cli.global.to_config_overrides(), @r#"
    [
        "staged/restage=false",
        "global/output_log_level=5",
        "global/file_log_level=5",
        "global/dry=true",
    ]
    "#);
}

#[test]
fn test_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["stagelint", "-l", "7", "version"]).is_err());
}

#[test]
fn test_parse_staged() {
    let cli = Cli::try_parse_from(["stagelint", "staged", "--no-restage"]).unwrap();
    let Some(Command::Staged(args)) = cli.command else {
        panic!("expected staged command");
    };
    assert!(args.no_restage);
    assert!(!args.all_files);
    assert!(args.files.is_empty());

    let cli = Cli::try_parse_from([
        "stagelint",
        "staged",
        "--files",
        "services/a/x.go",
        "shared/y.go",
    ])
    .unwrap();
    let Some(Command::Staged(args)) = cli.command else {
        panic!("expected staged command");
    };
    assert_eq!(args.files, ["services/a/x.go", "shared/y.go"]);
}

#[test]
fn test_all_files_conflicts_with_files() {
    assert!(
        Cli::try_parse_from(["stagelint", "staged", "--all-files", "--files", "a.go"]).is_err()
    );
}

#[test]
fn test_parse_plan() {
    let cli = Cli::try_parse_from(["stagelint", "plan", "--format", "json", "shared/a.go"]).unwrap();
    let Some(Command::Plan(args)) = cli.command else {
        panic!("expected plan command");
    };
    assert_eq!(args.format, OutputFormat::Json);
    assert_eq!(args.paths, ["shared/a.go"]);
}

#[test]
fn test_parse_commit_msg() {
    let cli = Cli::try_parse_from(["stagelint", "commit-msg", ".git/COMMIT_EDITMSG"]).unwrap();
    let Some(Command::CommitMsg(args)) = cli.command else {
        panic!("expected commit-msg command");
    };
    assert_eq!(args.file, Some(PathBuf::from(".git/COMMIT_EDITMSG")));
    assert_eq!(args.format, OutputFormat::Text);

    let cli = Cli::try_parse_from(["stagelint", "commit-msg"]).unwrap();
    let Some(Command::CommitMsg(args)) = cli.command else {
        panic!("expected commit-msg command");
    };
    assert!(args.file.is_none());
}

#[test]
fn test_parse_install() {
    let cli = Cli::try_parse_from(["stagelint", "install", "--force"]).unwrap();
    let Some(Command::Install(args)) = cli.command else {
        panic!("expected install command");
    };
    assert!(args.force);
}

#[test]
fn test_cli_definition() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
