// glenv: GitLab CI/CD variables for local commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, DEFAULT_URL};
use clap::Parser;

#[test]
fn test_parse_short_options() {
    let cli = Cli::try_parse_from([
        "glenv", "-u", "https://gitlab.example.com", "-p", "42", "-t", "glpat-x", "-e",
        "production", "make", "deploy",
    ])
    .unwrap();

    assert_eq!(cli.url, "https://gitlab.example.com");
    assert_eq!(cli.project, "42");
    assert_eq!(cli.access_token, "glpat-x");
    assert_eq!(cli.environment.as_deref(), Some("production"));
    assert_eq!(cli.command, ["make", "deploy"]);
}

#[test]
fn test_parse_long_options_and_default_url() {
    let cli = Cli::try_parse_from([
        "glenv",
        "--project",
        "group/app",
        "--access-token",
        "glpat-x",
        "--environment=staging",
        "env",
    ])
    .unwrap();

    assert_eq!(cli.url, DEFAULT_URL);
    assert_eq!(cli.project, "group/app");
    assert_eq!(cli.environment.as_deref(), Some("staging"));
    assert_eq!(cli.command, ["env"]);
}

#[test]
fn test_command_arguments_pass_through() {
    let cli = Cli::try_parse_from([
        "glenv", "-p", "1", "-t", "x", "npm", "run", "build", "--prod", "-e", "x",
    ])
    .unwrap();

    assert_eq!(
        cli.command,
        ["npm", "run", "build", "--prod", "-e", "x"]
    );
}

#[test]
fn test_double_dash_separator() {
    let cli = Cli::try_parse_from(["glenv", "-p", "1", "-t", "x", "--", "-weird-name", "a"])
        .unwrap();
    assert_eq!(cli.command, ["-weird-name", "a"]);
}

#[test]
fn test_command_is_required() {
    let result = Cli::try_parse_from(["glenv", "-p", "1", "-t", "x"]);
    assert!(result.is_err());
}

#[test]
fn test_log_options() {
    let cli = Cli::try_parse_from([
        "glenv",
        "-p",
        "1",
        "-t",
        "x",
        "-l",
        "4",
        "--file-log-level",
        "5",
        "--log-file",
        "glenv.log",
        "true",
    ])
    .unwrap();

    assert_eq!(cli.global.log_level, Some(4));
    assert_eq!(cli.global.file_log_level, Some(5));
    assert_eq!(
        cli.global.log_file.as_deref(),
        Some(std::path::Path::new("glenv.log"))
    );
}

#[test]
fn test_log_level_out_of_range() {
    let result = Cli::try_parse_from(["glenv", "-p", "1", "-t", "x", "-l", "7", "true"]);
    assert!(result.is_err());
}
