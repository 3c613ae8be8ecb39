// glenv: GitLab CI/CD variables for local commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Key type for environment maps.
//!
//! ```text
//! EnvKey: case-insensitive on Windows (PATH == Path == path)
//!         exact on every other platform
//! ```

use std::cmp::Ordering;
use std::ffi::{OsStr, OsString};

/// An environment variable name with platform comparison rules.
#[derive(Debug, Clone)]
pub(super) struct EnvKey(OsString);

impl EnvKey {
    pub(super) fn new(s: impl Into<OsString>) -> Self {
        Self(s.into())
    }

    pub(super) fn as_os_str(&self) -> &OsStr {
        &self.0
    }

    #[cfg(windows)]
    fn folded(&self) -> String {
        self.0.to_string_lossy().to_ascii_lowercase()
    }
}

impl PartialEq for EnvKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EnvKey {}

impl PartialOrd for EnvKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EnvKey {
    #[cfg(windows)]
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded().cmp(&other.folded())
    }

    #[cfg(not(windows))]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}
