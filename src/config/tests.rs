// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::merge::{CommitRulesOverride, RuleOverride};
use super::{Config, ConfigLoader, parse_override};
use crate::commit::rules::{Applicability, CaseStyle, CommitRules, Preset, Severity};
use crate::logging::LogLevel;
use std::time::Duration;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(!config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert!(config.global.log_file.is_none());
    assert!(config.staged.restage);
    assert_eq!(config.staged.timeout(), None);
    assert_eq!(config.staged.rules.len(), 1);
    assert_eq!(config.staged.rules[0].pattern, "{services,shared}/**/*.go");
    assert_eq!(config.commit.extends, Preset::Conventional);
    assert!(config.commit.default_ignores);
    assert!(config.validate().is_ok());
}

#[test]
fn test_default_commit_rules_carry_project_overrides() {
    let rules = Config::default().commit_rules();

    assert_eq!(rules.header_max_length.level, Severity::Error);
    assert_eq!(rules.header_max_length.when, Applicability::Always);
    assert_eq!(rules.header_max_length.value, 60);
    assert_eq!(rules.body_max_line_length.level, Severity::Disabled);

    let preset = CommitRules::conventional();
    assert_eq!(rules.type_enum, preset.type_enum);
    assert_eq!(rules.subject_case, preset.subject_case);
    assert_eq!(rules.footer_max_line_length, preset.footer_max_line_length);
}

#[test]
fn test_config_parse() {
    let toml = r#"
[global]
dry = true
output_log_level = 4

[staged]
restage = false
timeout_secs = 30

[[staged.rules]]
pattern = "**/*.proto"
commands = ["buf format -w {dir}", "buf lint {dir}"]
"#;

    let config = Config::parse(toml).unwrap();
    assert!(config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert!(!config.staged.restage);
    assert_eq!(config.staged.timeout(), Some(Duration::from_secs(30)));
    assert_eq!(config.staged.rules.len(), 1);
    assert_eq!(config.staged.rules[0].commands[1], "buf lint {dir}");
}

#[test]
fn test_partial_rule_override_keeps_project_defaults() {
    let toml = r#"
[commit.rules]
type_enum = { value = ["feat", "fix"] }
"#;
    let rules = Config::parse(toml).unwrap().commit_rules();

    assert_eq!(rules.type_enum.value, ["feat", "fix"]);
    assert_eq!(rules.type_enum.level, Severity::Error);
    assert_eq!(rules.header_max_length.value, 60);
    assert_eq!(rules.body_max_line_length.level, Severity::Disabled);
}

#[test]
fn test_rule_override_fields_merge_individually() {
    let toml = r#"
[commit.rules]
header_max_length = { value = 72 }
body_leading_blank = { level = 2 }
subject_case = { when = "always", value = ["lower-case"] }
"#;
    let rules = Config::parse(toml).unwrap().commit_rules();

    assert_eq!(rules.header_max_length.value, 72);
    assert_eq!(rules.header_max_length.level, Severity::Error);
    assert_eq!(rules.body_leading_blank.level, Severity::Error);
    assert_eq!(rules.subject_case.when, Applicability::Always);
    assert_eq!(rules.subject_case.value.len(), 1);
}

#[test]
fn test_case_style_override() {
    let toml = r#"
[commit.rules]
type_case = { value = "upper-case" }
"#;
    let rules = Config::parse(toml).unwrap().commit_rules();

    assert_eq!(rules.type_case.value, CaseStyle::UpperCase);
    assert_eq!(rules.type_case.level, Severity::Error);
    assert_eq!(rules.type_case.when, Applicability::Always);
}

#[test]
fn test_extends_none_disables_preset() {
    let config = Config::parse("[commit]\nextends = \"none\"\n").unwrap();
    let rules = config.commit_rules();

    assert_eq!(rules.type_enum.level, Severity::Disabled);
    assert_eq!(rules.subject_empty.level, Severity::Disabled);
    // The project overrides still apply on top.
    assert_eq!(rules.header_max_length.level, Severity::Error);
    assert_eq!(rules.header_max_length.value, 60);
}

#[test]
fn test_empty_override_is_preset() {
    let merged = super::merge::merge_commit_rules(
        &CommitRules::conventional(),
        &CommitRulesOverride::empty(),
    );
    assert_eq!(merged, CommitRules::conventional());
}

#[test]
fn test_rule_override_level_only() {
    let o: RuleOverride<usize> = RuleOverride::level(Severity::Warning);
    assert_eq!(o.level, Some(Severity::Warning));
    assert!(o.when.is_none() && o.value.is_none());
}

#[test]
fn test_invalid_level_rejected() {
    let result = Config::parse("[commit.rules]\nheader_max_length = { level = 3 }\n");
    assert!(result.is_err());
}

#[test]
fn test_unknown_field_rejected() {
    assert!(Config::parse("[staged]\nrestagee = true\n").is_err());
    assert!(Config::parse("[commit.rules]\nheader_length = { value = 1 }\n").is_err());
}

#[test]
fn test_invalid_glob_rejected() {
    let toml = r#"
[[staged.rules]]
pattern = "services/["
commands = ["true"]
"#;
    let err = Config::parse(toml).unwrap_err();
    assert!(format!("{err:#}").contains("services/["));
}

#[test]
fn test_invalid_ignore_rejected() {
    let err = Config::parse("[commit]\nignores = [\"(unclosed\"]\n").unwrap_err();
    assert!(format!("{err:#}").contains("(unclosed"));
}

#[test]
fn test_config_builder_set_override() {
    let config = Config::builder()
        .set("staged.timeout_secs", "15")
        .unwrap()
        .set("global.dry", "true")
        .unwrap()
        .build()
        .unwrap();

    assert!(config.global.dry);
    assert_eq!(config.staged.timeout_secs, 15);
}

#[test]
fn test_later_sources_win() {
    let config = Config::builder()
        .add_toml_str("[staged]\ntimeout_secs = 10\nrestage = false\n")
        .add_toml_str("[staged]\ntimeout_secs = 20\n")
        .build()
        .unwrap();

    assert_eq!(config.staged.timeout_secs, 20);
    assert!(!config.staged.restage);
}

#[test]
fn test_required_file_loaded() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("stagelint.toml");
    std::fs::write(&path, "[commit]\ndefault_ignores = false\n").unwrap();

    let config = Config::builder().add_toml_file(&path).build().unwrap();
    assert!(!config.commit.default_ignores);
}

#[test]
fn test_missing_required_file() {
    let result = Config::builder()
        .add_toml_file("/nonexistent/stagelint.toml")
        .build();
    assert!(result.is_err());
}

#[test]
fn test_config_loader_tracks_files() {
    let loader = ConfigLoader::new().add_toml_str("[global]\n dry = true");

    let files: Vec<_> = loader
        .loaded_files()
        .iter()
        .map(|(source, path)| format!("{source}:{}", path.display()))
        .collect();
    assert_eq!(files, ["string:<string>"]);
}

#[test]
fn test_config_loader_format_loaded_files() {
    let loader = ConfigLoader::new()
        .add_toml_str("[global]\n dry = true")
        .add_toml_str("[staged]\n restage = false");

    insta::assert_snapshot!(loader.format_loaded_files().join("\n"), @r"
    1. [string] <string>
    2. [string] <string>
    ");
}

#[test]
fn test_config_loader_optional_only_tracks_existing() {
    let loader = ConfigLoader::new().add_toml_file_optional("/nonexistent/path.toml");
    assert!(loader.loaded_files().is_empty());
    assert!(loader.build().is_ok());
}

#[test]
fn test_format_options() {
    let options = Config::default().format_options();
    insta::assert_snapshot!(options.join("\n"), @r#"
    commit.default_ignores              = true
    commit.extends                      = conventional
    commit.ignores                      = []
    commit.rules.body_leading_blank     = warning always
    commit.rules.body_max_line_length   = disabled always 100
    commit.rules.footer_leading_blank   = warning always
    commit.rules.footer_max_line_length = error always 100
    commit.rules.header_max_length      = error always 60
    commit.rules.header_trim            = error always
    commit.rules.subject_case           = error never [sentence-case, start-case, pascal-case, upper-case]
    commit.rules.subject_empty          = error never
    commit.rules.subject_full_stop      = error never "."
    commit.rules.type_case              = error always lower-case
    commit.rules.type_empty             = error never
    commit.rules.type_enum              = error always [build, chore, ci, docs, feat, fix, perf, refactor, revert, style, test]
    global.dry                          = false
    global.file_log_level               = 5
    global.log_json                     = false
    global.output_log_level             = 3
    staged.restage                      = true
    staged.rules.0.commands             = ["golangci-lint fmt {dir}", "golangci-lint run --fix {dir}"]
    staged.rules.0.pattern              = {services,shared}/**/*.go
    staged.timeout_secs                 = 0
    "#);
}

#[test]
fn test_parse_override() {
    assert_eq!(
        parse_override("global/dry=true").unwrap(),
        ("global.dry".to_string(), "true".to_string())
    );
    assert_eq!(
        parse_override("staged.timeout_secs = 5").unwrap(),
        ("staged.timeout_secs".to_string(), "5".to_string())
    );
    assert!(parse_override("global.dry").is_err());
    assert!(parse_override("=true").is_err());
}
