// glenv: GitLab CI/CD variables for local commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            GlenvError (~24 bytes)
//!                    |
//!     +--------+-----+-----+--------+
//!     |        |           |        |
//!     v        v           v        v
//!    Net      Cfg        Proc      Io
//!    Box      Box        Box       Box
//!
//! Sub-errors (unboxed internally):
//!   Network Reqwest, HttpError, Unauthorized, Decode
//!   Config  InvalidUrl, MissingCommand
//!   Process ExecutableNotFound, SpawnFailed, WaitFailed
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`GlenvError`].
pub type GlenvResult<T> = std::result::Result<T, GlenvError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum GlenvError {
    /// Network operation failed.
    #[error("network error: {0}")]
    Network(#[from] Box<NetworkError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for GlenvError {
                fn from(err: $error) -> Self {
                    GlenvError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    NetworkError => Network,
    ConfigError => Config,
    ProcessError => Process,
    std::io::Error => Io,
}

// --- Network Errors ---

/// Errors talking to the GitLab API.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// The server rejected the access token.
    #[error("authentication failed ({status}): {url}")]
    Unauthorized { status: u16, url: String },

    /// HTTP error response.
    #[error("http error {status}: {url}")]
    HttpError { status: u16, url: String },

    /// Response body was not the expected JSON.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Error from reqwest library.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

// --- Config Errors ---

/// Errors in the options given on the command line or environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The API base URL could not be used.
    #[error("invalid url '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// No command was given to run.
    #[error("no command given")]
    MissingCommand,
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed while waiting for the process to finish.
    #[error("failed to wait for process '{command}': {source}")]
    WaitFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}
