// glenv: GitLab CI/CD variables for local commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process builder and termination status.
//!
//! ```text
//! ProcessBuilder
//!  • new
//!  • arg/args/env
//!
//! ProcessStatus
//!  • code (None when killed by a signal)
//!  • signal (Unix only)
//!  • exit_code() -> code, or 0 without one
//! ```

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::core::env::container::Env;

/// How a child process terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStatus {
    code: Option<i32>,
    signal: Option<i32>,
}

impl ProcessStatus {
    #[must_use]
    pub const fn new(code: Option<i32>, signal: Option<i32>) -> Self {
        Self { code, signal }
    }

    /// Returns the numeric exit code, if the process reported one.
    #[must_use]
    pub const fn code(&self) -> Option<i32> {
        self.code
    }

    /// Returns the terminating signal (Unix only).
    #[must_use]
    pub const fn signal(&self) -> Option<i32> {
        self.signal
    }

    /// Returns the exit code to forward; `0` when the process has none.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self.code {
            Some(code) => code,
            None => 0,
        }
    }

    /// Returns true if the process exited with code 0.
    #[must_use]
    pub const fn success(&self) -> bool {
        matches!(self.code, Some(0))
    }
}

impl From<std::process::ExitStatus> for ProcessStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        #[cfg(unix)]
        let signal = std::os::unix::process::ExitStatusExt::signal(&status);
        #[cfg(not(unix))]
        let signal = None;

        Self::new(status.code(), signal)
    }
}

/// Builder for configuring and running a child process.
///
/// The child always inherits stdin, stdout and stderr from this process.
#[derive(Debug)]
pub struct ProcessBuilder {
    /// Executable name or path
    program: PathBuf,
    /// Command-line arguments
    args: Vec<String>,
    /// Complete environment for the child; inherited when `None`
    env: Option<Env>,
}

impl ProcessBuilder {
    /// Creates a new `ProcessBuilder` for the given program.
    ///
    /// A bare name is resolved via the child's `PATH` when `run()` is called.
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            env: None,
        }
    }

    /// Adds an argument to the command.
    #[must_use]
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_string_lossy().into_owned());
        self
    }

    /// Adds multiple arguments to the command.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        for arg in args {
            self.args.push(arg.as_ref().to_string_lossy().into_owned());
        }
        self
    }

    /// Sets the complete environment for the process.
    ///
    /// The child sees exactly these variables and nothing else.
    #[must_use]
    pub fn env(mut self, env: Env) -> Self {
        self.env = Some(env);
        self
    }

    /// Returns a reference to the program path.
    #[must_use]
    pub const fn program(&self) -> &PathBuf {
        &self.program
    }

    pub(super) fn args_slice(&self) -> &[String] {
        &self.args
    }

    pub(super) const fn environment(&self) -> Option<&Env> {
        self.env.as_ref()
    }
}
