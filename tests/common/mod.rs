// glenv: GitLab CI/CD variables for local commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared helpers for integration tests.

#![allow(dead_code)]

use serde_json::{Value, json};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "glpat-test-token";

/// Builds `count` variables named `VAR_{offset}..`, all scoped to `*`.
pub fn page_body(offset: usize, count: usize) -> Value {
    let items: Vec<Value> = (offset..offset + count)
        .map(|i| {
            json!({
                "variable_type": "env_var",
                "key": format!("VAR_{i}"),
                "value": format!("value-{i}"),
                "protected": false,
                "masked": false,
                "environment_scope": "*",
            })
        })
        .collect();
    Value::Array(items)
}

/// Mounts one page of the variables endpoint for `project_path`.
pub async fn mount_page(
    server: &MockServer,
    project_path: &str,
    page: u32,
    body: Value,
    expected_calls: u64,
) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v4/projects/{project_path}/variables")))
        .and(query_param("per_page", "100"))
        .and(query_param("page", page.to_string()))
        .and(header("PRIVATE-TOKEN", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// Mounts a status-only response for one page.
pub async fn mount_status(
    server: &MockServer,
    project_path: &str,
    page: u32,
    status: u16,
    expected_calls: u64,
) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v4/projects/{project_path}/variables")))
        .and(query_param("page", page.to_string()))
        .respond_with(
            ResponseTemplate::new(status).set_body_json(json!({ "message": format!("{status}") })),
        )
        .expect(expected_calls)
        .mount(server)
        .await;
}
