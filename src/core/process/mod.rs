// glenv: GitLab CI/CD variables for local commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning with inherited standard streams.
//!
//! ```text
//! ProcessBuilder::new("npm")
//!   .args() .env()
//!   .run()
//!       --> which_in(program, env PATH)
//!       --> tokio::process::Command (stdin/stdout/stderr inherited)
//!       --> wait
//!       --> ProcessStatus { code, signal }
//! ```

pub mod builder;
mod runner;
