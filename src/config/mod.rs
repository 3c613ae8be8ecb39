// glenv: GitLab CI/CD variables for local commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Run configuration.
//!
//! # Sources
//!
//! ```text
//! Priority (low → high)
//! 1. defaults             url = https://gitlab.com
//! 2. environment          CI_PROJECT_ID, GITLAB_ACCESS_TOKEN, CI_ENVIRONMENT_NAME
//! 3. command line         -u -p -t -e
//!        |
//!        v
//!   Config::from_cli()    url parsed + checked, command split
//! ```
//!
//! There is no configuration file.


use bon::Builder;
use reqwest::Url;

use crate::cli::Cli;
use crate::error::{ConfigError, GlenvResult};

/// Validated settings for one invocation.
#[derive(Clone, Builder)]
pub struct Config {
    base_url: Url,
    #[builder(into)]
    project: String,
    #[builder(into)]
    access_token: String,
    #[builder(into)]
    environment: Option<String>,
    #[builder(into)]
    program: String,
    #[builder(default)]
    args: Vec<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url.as_str())
            .field("project", &self.project)
            .field("access_token", &"<redacted>")
            .field("environment", &self.environment)
            .field("program", &self.program)
            .field("args", &self.args)
            .finish()
    }
}

/// Parses the GitLab base URL given on the command line.
///
/// # Errors
///
/// Returns `ConfigError::InvalidUrl` if the URL doesn't parse, is not
/// `http`/`https`, or has no host.
pub fn parse_base_url(raw: &str) -> GlenvResult<Url> {
    let invalid = |message: &str| ConfigError::InvalidUrl {
        url: raw.to_string(),
        message: message.to_string(),
    };

    let url = Url::parse(raw).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https").into());
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid("url has no host").into());
    }

    Ok(url)
}

impl Config {
    /// Builds the configuration from parsed command-line arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or no command was given.
    pub fn from_cli(cli: &Cli) -> GlenvResult<Self> {
        let (program, args) = cli
            .command
            .split_first()
            .ok_or(ConfigError::MissingCommand)?;

        Ok(Self::builder()
            .base_url(parse_base_url(&cli.url)?)
            .project(cli.project.as_str())
            .access_token(cli.access_token.as_str())
            .maybe_environment(cli.environment.as_deref())
            .program(program.as_str())
            .args(args.to_vec())
            .build())
    }

    /// Returns the GitLab base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the project id or path.
    #[must_use]
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Returns the API access token.
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Returns the target environment, if any.
    #[must_use]
    pub fn environment(&self) -> Option<&str> {
        self.environment.as_deref()
    }

    /// Returns the executable to run.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Returns the executable's arguments.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }
}
