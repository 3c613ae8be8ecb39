// glenv: GitLab CI/CD variables for local commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Resolved, resolve};
use crate::gitlab::Variable;

fn map(pairs: &[(&str, &str)]) -> Resolved {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn test_environment_entry_overrides_wildcard() {
    let variables = [Variable::new("A", "1", "*"), Variable::new("A", "2", "prod")];
    assert_eq!(resolve(&variables, Some("prod")), map(&[("A", "2")]));
}

#[test]
fn test_environment_entry_overrides_wildcard_regardless_of_order() {
    let variables = [Variable::new("A", "2", "prod"), Variable::new("A", "1", "*")];
    assert_eq!(resolve(&variables, Some("prod")), map(&[("A", "2")]));
}

#[test]
fn test_wildcard_used_when_no_environment_entry() {
    let variables = [Variable::new("A", "1", "*")];
    assert_eq!(resolve(&variables, Some("staging")), map(&[("A", "1")]));
}

#[test]
fn test_other_environments_are_excluded() {
    let variables = [
        Variable::new("A", "1", "*"),
        Variable::new("A", "2", "prod"),
        Variable::new("B", "3", "staging"),
        Variable::new("C", "4", "review/*"),
        Variable::new("D", "5", "prod"),
    ];

    let resolved = resolve(&variables, Some("staging"));

    assert_eq!(resolved, map(&[("A", "1"), ("B", "3")]));
}

#[test]
fn test_no_environment_keeps_only_wildcards() {
    let variables = [
        Variable::new("A", "1", "*"),
        Variable::new("A", "2", "prod"),
        Variable::new("B", "3", "prod"),
    ];
    assert_eq!(resolve(&variables, None), map(&[("A", "1")]));
}

#[test]
fn test_duplicate_wildcards_last_wins() {
    let variables = [
        Variable::new("A", "first", "*"),
        Variable::new("A", "second", "*"),
    ];
    assert_eq!(resolve(&variables, Some("prod")), map(&[("A", "second")]));
}

#[test]
fn test_scope_match_is_exact() {
    let variables = [
        Variable::new("A", "1", "*"),
        Variable::new("A", "2", "Prod"),
        Variable::new("A", "3", "prod "),
    ];
    assert_eq!(resolve(&variables, Some("prod")), map(&[("A", "1")]));
}

#[test]
fn test_never_includes_foreign_scopes() {
    let scopes = ["*", "prod", "staging", "dev", "review/*"];
    let variables: Vec<Variable> = scopes
        .iter()
        .enumerate()
        .flat_map(|(i, scope)| {
            ["A", "B", "C"]
                .into_iter()
                .skip(i % 3)
                .map(move |key| Variable::new(key, format!("{key}@{scope}"), *scope))
        })
        .collect();

    for target in ["prod", "staging", "dev", "unknown"] {
        for (key, value) in resolve(&variables, Some(target)) {
            let scope = value.split_once('@').map(|(_, s)| s).unwrap();
            assert!(
                scope == "*" || scope == target,
                "{key}={value} leaked into {target}"
            );
            let has_scoped = variables
                .iter()
                .any(|v| v.key == key && v.environment_scope == target);
            if has_scoped {
                assert_eq!(scope, target, "{key} should use the {target} value");
            }
        }
    }
}

#[test]
fn test_empty_input() {
    assert!(resolve(&[], Some("prod")).is_empty());
    assert!(resolve(&[], None).is_empty());
}
