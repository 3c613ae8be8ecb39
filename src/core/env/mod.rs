// glenv: GitLab CI/CD variables for local commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! Env (BTreeMap<EnvKey, OsString>)
//! Sources: current_env(), Env::new(), FromIterator
//! Ops: set/get/overlay
//!
//! current_env() --overlay(resolved)--> child env
//!   inherited keys pass through, resolved keys win
//! ```
//!
//! - **Case-insensitive on Windows**
//! - **Lossless**: values are `OsString`, non-UTF-8 inherited values survive

pub mod container;
pub mod types;


/// Captures the current process environment.
#[must_use]
pub fn current_env() -> container::Env {
    std::env::vars_os().collect()
}
