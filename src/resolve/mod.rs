// glenv: GitLab CI/CD variables for local commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment scope resolution.
//!
//! ```text
//! target = "prod"
//!
//!   A=1  scope *      dropped (A has a prod entry)
//!   A=2  scope prod   kept
//!   B=3  scope *      kept    (no prod entry for B)
//!   C=4  scope stage  dropped
//!
//!   --> { A: "2", B: "3" }
//! ```
//!
//! When several entries qualify for one key, the later one in fetch order wins.

use std::collections::{BTreeMap, BTreeSet};

use tracing::trace;

use crate::gitlab::Variable;

/// Key to value mapping produced by [`resolve`].
pub type Resolved = BTreeMap<String, String>;

/// Collapses `variables` into one value per key for `environment`.
///
/// A variable is kept if its scope equals `environment`, or if it is a
/// wildcard and no variable with the same key is scoped to `environment`.
/// With no target environment only wildcard variables are kept.
#[must_use]
pub fn resolve(variables: &[Variable], environment: Option<&str>) -> Resolved {
    let overridden: BTreeSet<&str> = variables
        .iter()
        .filter(|v| v.is_scoped_to(environment))
        .map(|v| v.key.as_str())
        .collect();

    let mut resolved = Resolved::new();
    for variable in variables {
        let selected = variable.is_scoped_to(environment)
            || (variable.is_wildcard() && !overridden.contains(variable.key.as_str()));
        if !selected {
            continue;
        }

        trace!(
            key = %variable.key,
            scope = %variable.environment_scope,
            "selected variable"
        );
        resolved.insert(variable.key.clone(), variable.value.clone());
    }

    resolved
}

#[cfg(test)]
mod tests;
