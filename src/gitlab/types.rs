// glenv: GitLab CI/CD variables for local commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Wire types for the project variables API.

use serde::Deserialize;

/// Scope that applies a variable to every environment.
pub const WILDCARD_SCOPE: &str = "*";

/// Kind of variable as reported by GitLab.
///
/// Every kind is exported as a plain string; `File` variables are not
/// written to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableType {
    #[default]
    EnvVar,
    File,
    #[serde(other)]
    Unknown,
}

/// A project CI/CD variable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Variable {
    #[serde(default)]
    pub variable_type: VariableType,
    pub key: String,
    pub value: String,
    #[serde(default = "wildcard_scope")]
    pub environment_scope: String,
}

fn wildcard_scope() -> String {
    WILDCARD_SCOPE.to_string()
}

impl Variable {
    /// Creates an `env_var` variable with the given scope.
    pub fn new(
        key: impl Into<String>,
        value: impl Into<String>,
        environment_scope: impl Into<String>,
    ) -> Self {
        Self {
            variable_type: VariableType::EnvVar,
            key: key.into(),
            value: value.into(),
            environment_scope: environment_scope.into(),
        }
    }

    /// Returns true if this variable applies to all environments.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.environment_scope == WILDCARD_SCOPE
    }

    /// Returns true if this variable is scoped to exactly `environment`.
    #[must_use]
    pub fn is_scoped_to(&self, environment: Option<&str>) -> bool {
        environment.is_some_and(|env| self.environment_scope == env)
    }
}
