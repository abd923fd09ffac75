// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::group::{DirectoryKey, directory_commands, group_directories, render_command};
use super::plan::{format_plans, normalize_path, plan, planned_files};
use super::rule::{GO_FIX_LINT, GO_FORMAT, StagedRule};
use super::runner::{RuleOutcome, RunOptions, format_failures, run_plan, run_plans};
use std::collections::BTreeSet;
use tokio_util::sync::CancellationToken;

fn go_templates() -> [&'static str; 2] {
    [GO_FORMAT, GO_FIX_LINT]
}

fn fmt(dir: &str) -> String {
    format!("golangci-lint fmt {dir}")
}

fn fix(dir: &str) -> String {
    format!("golangci-lint run --fix {dir}")
}

// =============================================================================
// Directory grouping
// =============================================================================

#[test]
fn test_directory_key_strips_file_name() {
    assert_eq!(DirectoryKey::of("services/a/x.go").as_str(), "services/a");
    assert_eq!(DirectoryKey::of("shared/x.go").as_str(), "shared");
    assert_eq!(DirectoryKey::of("services/a/Makefile").as_str(), "services/a");
}

#[test]
fn test_directory_key_without_separator_is_root() {
    assert_eq!(DirectoryKey::of("main.go").as_str(), ".");
    assert_eq!(DirectoryKey::of("/main.go").as_str(), "/");
}

#[test]
fn test_grouping_example_from_three_files() {
    let files = ["services/a/x.go", "services/a/y.go", "services/b/z.go"];
    let commands = directory_commands(files, &go_templates());

    assert_eq!(
        commands,
        vec![
            fmt("services/a"),
            fix("services/a"),
            fmt("services/b"),
            fix("services/b"),
        ]
    );
}

#[test]
fn test_grouping_empty_input() {
    let files: [&str; 0] = [];
    assert!(directory_commands(files, &go_templates()).is_empty());
}

#[test]
fn test_grouping_single_file() {
    let commands = directory_commands(["shared/db/conn.go"], &go_templates());
    assert_eq!(commands, vec![fmt("shared/db"), fix("shared/db")]);
}

#[test]
fn test_grouping_collapses_duplicates() {
    let files = [
        "services/user/main.go",
        "services/user/main.go",
        "services/user/handler.go",
    ];
    let commands = directory_commands(files, &go_templates());
    assert_eq!(commands, vec![fmt("services/user"), fix("services/user")]);
}

#[test]
fn test_grouping_output_is_twice_the_directory_count() {
    let inputs: [&[&str]; 4] = [
        &[],
        &["a/x.go"],
        &["a/x.go", "a/y.go", "b/z.go", "c/d/e.go", "a/w.go"],
        &["x.go", "y.go", "services/u/z.go", "services/u/z.go"],
    ];
    for files in inputs {
        let distinct: BTreeSet<_> = files.iter().map(|f| DirectoryKey::of(f)).collect();
        let commands = directory_commands(files, &go_templates());
        assert_eq!(commands.len(), 2 * distinct.len(), "input: {files:?}");
    }
}

#[test]
fn test_grouping_keeps_pairs_adjacent_and_ordered() {
    let files = ["b/1.go", "a/2.go", "c/3.go", "a/4.go"];
    let commands = directory_commands(files, &go_templates());

    for pair in commands.chunks(2) {
        let dir = pair[0].strip_prefix("golangci-lint fmt ").expect("format first");
        assert_eq!(pair[1], fix(dir));
    }
}

#[test]
fn test_grouping_is_idempotent() {
    let files = ["services/a/x.go", "shared/y.go", "services/a/z.go"];
    let first = directory_commands(files, &go_templates());
    let second = directory_commands(files, &go_templates());
    assert_eq!(first, second);
}

#[test]
fn test_group_directories_first_appearance_order() {
    let dirs = group_directories(["b/x.go", "a/y.go", "b/z.go"]);
    let dirs: Vec<_> = dirs.iter().map(DirectoryKey::as_str).collect();
    assert_eq!(dirs, ["b", "a"]);
}

#[test]
fn test_render_command_replaces_every_placeholder() {
    let dir = DirectoryKey::of("services/a/x.go");
    assert_eq!(
        render_command("cd {dir} && go vet ./{dir}/...", &dir),
        "cd services/a && go vet ./services/a/..."
    );
}

// =============================================================================
// Rules
// =============================================================================

#[test]
fn test_default_rule_matches_go_sources() {
    let rule = StagedRule::go();
    let matches = |p: &str| rule.matches(p).expect("default glob is valid");

    assert!(matches("services/user/main.go"));
    assert!(matches("services/user/internal/repository/user_repository.go"));
    assert!(matches("shared/logger/logger.go"));
    assert!(!matches("gateway/main.go"));
    assert!(!matches("services/user/README.md"));
    assert!(!matches("migration/001_init.sql"));
}

#[test]
fn test_rule_select_preserves_input_order() {
    let files = vec![
        "shared/b.go".to_string(),
        "gateway/main.go".to_string(),
        "services/a.go".to_string(),
    ];
    let selected = StagedRule::go().select(&files).unwrap();
    assert_eq!(selected, ["shared/b.go", "services/a.go"]);
}

#[test]
fn test_rule_validate_rejects_bad_glob() {
    let rule = StagedRule::new("services/[", ["true"]);
    assert!(rule.validate().is_err());
}

#[test]
fn test_rule_validate_rejects_empty_commands() {
    let rule = StagedRule::new("**/*.go", Vec::<String>::new());
    assert!(rule.validate().is_err());
    let rule = StagedRule::new("**/*.go", ["  "]);
    assert!(rule.validate().is_err());
    assert!(StagedRule::go().validate().is_ok());
}

#[test]
fn test_rule_programs() {
    assert_eq!(StagedRule::go().programs(), ["golangci-lint"]);
}

// =============================================================================
// Planning
// =============================================================================

#[test]
fn test_normalize_path() {
    assert_eq!(normalize_path("./services/a.go"), "services/a.go");
    assert_eq!(normalize_path("shared/a.go"), "shared/a.go");
}

#[cfg(windows)]
#[test]
fn test_normalize_path_backslashes() {
    assert_eq!(normalize_path("services\\user\\a.go"), "services/user/a.go");
}

#[cfg(not(windows))]
#[test]
fn test_normalize_path_keeps_backslash_in_name() {
    assert_eq!(normalize_path("services/user/a\\b.go"), "services/user/a\\b.go");

    let plans = plan(&[StagedRule::go()], &["services/user/a\\b.go"]).unwrap();
    assert_eq!(plans[0].files, ["services/user/a\\b.go"]);
    assert_eq!(plans[0].commands, [fmt("services/user"), fix("services/user")]);
}

#[test]
fn test_plan_default_rule() {
    let staged = [
        "services/user/main.go",
        "gateway/main.go",
        "services/user/handler/http_handler.go",
        "shared/config/config.go",
        "services/user/main.go",
    ];
    let plans = plan(&[StagedRule::go()], &staged).unwrap();
    assert_eq!(plans.len(), 1);

    insta::assert_snapshot!(format_plans(&plans).trim_end(), @r"
    {services,shared}/**/*.go (4 files, 3 directories)
      golangci-lint fmt services/user
      golangci-lint run --fix services/user
      golangci-lint fmt services/user/handler
      golangci-lint run --fix services/user/handler
      golangci-lint fmt shared/config
      golangci-lint run --fix shared/config
    ");
}

#[test]
fn test_plan_skips_rules_without_matches() {
    let rules = [
        StagedRule::go(),
        StagedRule::new("**/*.proto", ["buf format -w {dir}"]),
    ];
    let plans = plan(&rules, &["services/user/main.go"]).unwrap();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].pattern, "{services,shared}/**/*.go");
}

#[test]
fn test_plan_file_in_several_rules() {
    let rules = [
        StagedRule::go(),
        StagedRule::new("services/**", ["echo {dir}"]),
    ];
    let plans = plan(&rules, &["services/user/main.go"]).unwrap();
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[1].commands, ["echo services/user"]);
    assert_eq!(planned_files(&plans), ["services/user/main.go"]);
}

#[test]
fn test_plan_empty_change_set() {
    let staged: [&str; 0] = [];
    assert!(plan(&[StagedRule::go()], &staged).unwrap().is_empty());
}

#[test]
fn test_plan_serializes_to_json() {
    let plans = plan(&[StagedRule::go()], &["shared/a.go"]).unwrap();
    let json = serde_json::to_value(&plans).unwrap();
    assert_eq!(json[0]["directories"][0], "shared");
    assert_eq!(json[0]["commands"][1], "golangci-lint run --fix shared");
}

// =============================================================================
// Runner
// =============================================================================

fn options(dir: &std::path::Path) -> RunOptions {
    RunOptions::builder().with_cwd(dir.to_path_buf()).build()
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_run_plan_runs_commands_in_directory_order() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(temp.path().join("services/a")).unwrap();
    std::fs::create_dir_all(temp.path().join("shared")).unwrap();

    let rule = StagedRule::new(
        "**/*.go",
        ["echo fmt {dir} >> log.txt", "echo fix {dir} >> log.txt"],
    );
    let plans = plan(&[rule], &["services/a/x.go", "shared/y.go"]).unwrap();

    let reports = run_plans(&plans, &options(temp.path()), &CancellationToken::new()).await;
    assert!(reports.iter().all(super::runner::RuleReport::is_success));
    assert_eq!(reports[0].completed, 4);

    let log = std::fs::read_to_string(temp.path().join("log.txt")).unwrap();
    insta::assert_snapshot!(log.trim_end(), @r"
    fmt services/a
    fix services/a
    fmt shared
    fix shared
    ");
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_run_plan_stops_at_first_failure() {
    let temp = tempfile::tempdir().unwrap();
    let rule = StagedRule::new(
        "**/*.go",
        ["echo broken {dir}; exit 1", "touch never-{dir}"],
    );
    let plans = plan(&[rule], &["x/a.go"]).unwrap();

    let report = run_plan(&plans[0], &options(temp.path()), CancellationToken::new()).await;
    assert_eq!(report.completed, 0);
    assert_eq!(
        report.outcome,
        RuleOutcome::Failed {
            command: "echo broken x; exit 1".to_string(),
            exit_code: 1,
            output: "broken x".to_string(),
        }
    );
    assert!(!temp.path().join("never-x").exists());

    insta::assert_snapshot!(format_failures(&[report]).trim_end(), @r"
    ✖ echo broken x; exit 1 (exit code 1)
      broken x
    ");
}

#[tokio::test]
async fn test_run_plan_interrupted() {
    let temp = tempfile::tempdir().unwrap();
    let plans = plan(&[StagedRule::new("**/*.go", ["exit 0"])], &["x/a.go"]).unwrap();
    let token = CancellationToken::new();
    token.cancel();

    let report = run_plan(&plans[0], &options(temp.path()), token).await;
    assert_eq!(report.outcome, RuleOutcome::Interrupted);
    assert!(!report.is_success());
}

#[test]
fn test_format_failures_empty_on_success() {
    let report = super::runner::RuleReport {
        pattern: "**/*.go".to_string(),
        completed: 2,
        outcome: RuleOutcome::Succeeded,
    };
    assert!(format_failures(&[report]).is_empty());
}
