// glenv: GitLab CI/CD variables for local commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fetch, resolve, run.
//!
//! ```text
//! GitlabClient::list_variables()   all pages, fail fast
//!        |
//!        v
//! resolve(variables, environment)  one value per key
//!        |
//!        v
//! current_env().overlay(resolved)  resolved keys win
//!        |
//!        v
//! ProcessBuilder::run()            inherited stdio, wait
//!        |
//!        v
//! ProcessStatus   exit code forwarded by main
//! ```

use anyhow::Context;
use tracing::{debug, info};

use crate::config::Config;
use crate::core::env::container::Env;
use crate::core::env::current_env;
use crate::core::process::builder::{ProcessBuilder, ProcessStatus};
use crate::error::Result;
use crate::gitlab::{GitlabClient, Variable};
use crate::resolve::resolve;

/// Fetches every variable of the configured project.
///
/// # Errors
///
/// Returns an error if the client cannot be built or any page request fails.
pub async fn fetch_variables(config: &Config) -> Result<Vec<Variable>> {
    let client = GitlabClient::new(config.base_url().clone(), config.access_token())?;

    client
        .list_variables(config.project())
        .await
        .with_context(|| format!("failed to fetch variables of project '{}'", config.project()))
}

/// Builds the child environment: `inherited` with the resolved variables on top.
#[must_use]
pub fn child_env(variables: &[Variable], environment: Option<&str>, inherited: &Env) -> Env {
    let resolved = resolve(variables, environment);
    info!(
        environment = environment.unwrap_or("*"),
        count = resolved.len(),
        "resolved variables"
    );
    for key in resolved.keys() {
        debug!(key = %key, "exporting");
    }

    inherited.overlay(&resolved)
}

/// Runs the configured command with the project's variables in its environment.
///
/// Nothing is spawned unless every page was fetched.
///
/// # Errors
///
/// Returns an error if fetching fails or the command cannot be started.
pub async fn run_command(config: &Config) -> Result<ProcessStatus> {
    let variables = fetch_variables(config).await?;
    let env = child_env(&variables, config.environment(), &current_env());

    ProcessBuilder::new(config.program())
        .args(config.args())
        .env(env)
        .run()
        .await
        .with_context(|| format!("failed to run '{}'", config.program()))
}
