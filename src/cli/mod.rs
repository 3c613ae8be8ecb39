// glenv: GitLab CI/CD variables for local commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for glenv using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! glenv [options] [--] <command> [args...]
//!
//! -u --url           GitLab base URL      (https://gitlab.com)
//! -p --project       project id or path   ($CI_PROJECT_ID)
//! -t --access-token  API token            ($GITLAB_ACCESS_TOKEN)
//! -e --environment   target environment   ($CI_ENVIRONMENT_NAME)
//! ```
//!
//! Everything from the first positional argument on belongs to the command.

pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use clap::Parser;

/// Default GitLab instance.
pub const DEFAULT_URL: &str = "https://gitlab.com";

/// Run a command with GitLab CI/CD variables in its environment.
#[derive(Debug, Parser)]
#[command(
    name = "glenv",
    author,
    version,
    about = "Run a command with GitLab CI/CD variables in its environment",
    long_about = "Fetches the CI/CD variables of a GitLab project, keeps the ones\n\
                  scoped to the target environment (falling back to variables\n\
                  scoped to '*'), and runs the given command with those variables\n\
                  added to the current environment. The exit code of the command\n\
                  becomes the exit code of glenv.",
    after_help = "EXAMPLES:\n\n\
                  glenv -p 1234 -e production -- ./deploy.sh --verbose\n\
                  CI_PROJECT_ID=group/app glenv -u https://gitlab.example.com npm run build"
)]
pub struct Cli {
    /// GitLab base URL.
    #[arg(short = 'u', long = "url", value_name = "URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// GitLab project id, or its full path (e.g. group/project).
    #[arg(short = 'p', long = "project", value_name = "PROJECT", env = "CI_PROJECT_ID")]
    pub project: String,

    /// GitLab API access token.
    #[arg(
        short = 't',
        long = "access-token",
        value_name = "TOKEN",
        env = "GITLAB_ACCESS_TOKEN",
        hide_env_values = true
    )]
    pub access_token: String,

    /// Only export variables for this environment name.
    #[arg(
        short = 'e',
        long = "environment",
        value_name = "ENVIRONMENT",
        env = "CI_ENVIRONMENT_NAME"
    )]
    pub environment: Option<String>,

    /// Logging options
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to run, followed by its arguments.
    #[arg(
        value_name = "COMMAND",
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Tries to parse command-line arguments from an iterator.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse_from<I, T>(iter: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(iter)
}
