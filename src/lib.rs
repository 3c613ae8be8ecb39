// glenv: GitLab CI/CD variables for local commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                      main.rs
//!                         |
//!              +----------+----------+
//!              v                     v
//!          cli (clap)          cmd::run (handler)
//!              |                     |
//!              v           +---------+---------+
//!           config         v         v         v
//!                       gitlab    resolve    core
//!                      reqwest    scopes   env/process
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod gitlab;
pub mod logging;
pub mod resolve;
