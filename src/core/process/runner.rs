// glenv: GitLab CI/CD variables for local commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution and lifecycle management.
//!
//! ```text
//! run()
//!   |
//!   v
//! resolve_program()   which_in(program, env PATH, cwd)
//!   |
//!   v
//! build_command()     args, env_clear + env, stdio inherit
//!   |
//!   v
//! spawn() --> wait()
//!   |
//!   v
//! ProcessStatus { code, signal }
//! ```

use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, trace, warn};

use super::builder::{ProcessBuilder, ProcessStatus};
use crate::error::{GlenvResult, ProcessError};

impl ProcessBuilder {
    /// Returns the display name for this process: the program's file stem.
    fn display_name(&self) -> String {
        self.program().file_stem().map_or_else(
            || "process".to_string(),
            |s| s.to_string_lossy().into_owned(),
        )
    }

    /// Returns the full command line as a string (for logging).
    fn command_line(&self) -> String {
        use std::fmt::Write as _;

        let mut cmd = format!("{}", self.program().display());
        for arg in self.args_slice() {
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Finds the executable, searching the child's `PATH` for bare names.
    fn resolve_program(&self) -> GlenvResult<PathBuf> {
        let cwd = std::env::current_dir()?;
        let search_path = match self.environment() {
            Some(env) => env.get("PATH").map(std::ffi::OsStr::to_os_string),
            None => std::env::var_os("PATH"),
        };

        which::which_in(self.program(), search_path, cwd).map_err(|_| {
            ProcessError::ExecutableNotFound {
                name: self.program().display().to_string(),
            }
            .into()
        })
    }

    /// Builds the tokio Command from this builder's configuration.
    fn build_command(&self, program: &Path) -> Command {
        let mut command = Command::new(program);

        command.args(self.args_slice());

        if let Some(env) = self.environment() {
            command.env_clear();
            command.envs(env.iter());
        }

        command.stdin(Stdio::inherit());
        command.stdout(Stdio::inherit());
        command.stderr(Stdio::inherit());

        command.kill_on_drop(true);

        command
    }

    /// Spawns the process and waits until it terminates.
    ///
    /// A non-zero exit is not an error; it is reported in the returned status.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The executable cannot be found (`ProcessError::ExecutableNotFound`).
    /// - Spawning the child process fails (`ProcessError::SpawnFailed`).
    /// - Waiting for the child fails (`ProcessError::WaitFailed`).
    pub async fn run(self) -> GlenvResult<ProcessStatus> {
        let name = self.display_name();
        let cmd_line = self.command_line();

        let program = self.resolve_program()?;
        debug!(cmd = %cmd_line, program = %program.display(), "exec");

        let mut child = self
            .build_command(&program)
            .spawn()
            .map_err(|source| ProcessError::SpawnFailed {
                command: cmd_line.clone(),
                source,
            })?;

        trace!(process = %name, pid = ?child.id(), "spawned");

        let status: ProcessStatus = child
            .wait()
            .await
            .map_err(|source| ProcessError::WaitFailed {
                command: cmd_line,
                source,
            })?
            .into();

        if let Some(signal) = status.signal() {
            warn!(process = %name, signal, "terminated by signal");
        }
        trace!(process = %name, code = ?status.code(), "completed");

        Ok(status)
    }
}
