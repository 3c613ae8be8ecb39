// glenv: GitLab CI/CD variables for local commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! GitLab project variables API.
//!
//! ```text
//! GitlabClient::new(base_url, token)
//!   variable_pages(project)  --> Stream<Vec<Variable>>
//!   list_variables(project)  --> Vec<Variable> (all pages, server order)
//! ```

pub mod client;
pub mod types;


pub use client::GitlabClient;
pub use types::{Variable, VariableType, WILDCARD_SCOPE};
