// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};
use tracing::Level;

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(6).is_ok());
    assert!(LogLevel::new(7).is_err());
    assert_eq!(LogLevel::from_u8(4), Some(LogLevel::DEBUG));
    assert_eq!(LogLevel::from_u8(9), None);
}

#[test]
fn test_log_level_tracing_mapping() {
    assert_eq!(LogLevel::SILENT.to_tracing_level(), None);
    assert_eq!(LogLevel::ERROR.to_tracing_level(), Some(Level::ERROR));
    assert_eq!(LogLevel::INFO.to_tracing_level(), Some(Level::INFO));
    assert_eq!(LogLevel::DUMP.to_tracing_level(), Some(Level::TRACE));
}

#[test]
fn test_log_level_filter_strings() {
    let filters: Vec<_> = (0..=6)
        .filter_map(LogLevel::from_u8)
        .map(LogLevel::to_filter_string)
        .collect();
    insta::assert_debug_snapshot!(filters, @r#"
    [
        "off",
        "error",
        "warn",
        "warn,stagelint=info",
        "warn,stagelint=debug",
        "warn,stagelint=trace",
        "trace",
    ]
    "#);
}

#[test]
fn test_log_level_serde() {
    let level: LogLevel = serde_json::from_str("4").unwrap();
    assert_eq!(level, LogLevel::DEBUG);
    assert_eq!(serde_json::to_string(&LogLevel::WARN).unwrap(), "2");
    assert!(serde_json::from_str::<LogLevel>("7").is_err());
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
    assert!(!config.json_file());
}
