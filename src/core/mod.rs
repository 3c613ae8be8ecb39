// glenv: GitLab CI/CD variables for local commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for process and environment management.
//!
//! ```text
//!        core
//!         |
//!     +---+-----+
//!     |         |
//!     v         v
//!    env     process
//!     |         |
//!    Env     Builder
//!  overlay   Status
//! ```

pub mod env;
pub mod process;
