// glenv: GitLab CI/CD variables for local commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel, open_log_file};

#[test]
fn test_log_level_from_u8() {
    assert_eq!(LogLevel::from_u8(0), Some(LogLevel::SILENT));
    assert_eq!(LogLevel::from_u8(6), Some(LogLevel::DUMP));
    assert_eq!(LogLevel::from_u8(7), None);
}

#[test]
fn test_filter_strings_scope_dependencies() {
    let filters: Vec<_> = (0..=6)
        .filter_map(LogLevel::from_u8)
        .map(LogLevel::to_filter_string)
        .collect();
    assert_eq!(
        filters,
        [
            "off",
            "error",
            "warn",
            "warn,glenv=info",
            "warn,glenv=debug",
            "warn,glenv=trace",
            "trace",
        ]
    );
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
}

#[test]
fn test_open_log_file_creates_parent() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let path = temp.path().join("logs").join("nested").join("glenv.log");

    let file = open_log_file(&path);

    assert!(file.is_ok(), "open_log_file failed: {:?}", file.err());
    assert!(path.exists());
}
