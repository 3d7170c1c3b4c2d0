//! Error types for collection and rendering
//!
//! [`LookupError`] covers a single host query and never leaves the collector:
//! it is folded into the group's `error` marker. [`OsInfoError`] is everything
//! that reaches `main` and turns into exit code 1.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors that abort a run
#[derive(Error, Debug)]
pub enum OsInfoError {
    /// The requested output format is not one of the supported renderers
    #[error("unsupported output format: {0}")]
    InvalidFormat(String),

    /// The output file could not be created or written
    #[error("failed to write {}: {source}", path.display())]
    Io {
        /// Path given with `--output`
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to standard output failed
    #[error("failed to write to stdout: {0}")]
    Stdout(#[source] io::Error),

    /// The record could not be serialized
    #[error("failed to serialize record: {0}")]
    Serialize(String),

    /// The user interrupted the run
    #[error("operation cancelled")]
    Interrupted,
}

impl From<serde_json::Error> for OsInfoError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialize(e.to_string())
    }
}

impl From<serde_yaml::Error> for OsInfoError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Serialize(e.to_string())
    }
}

/// Result type alias for os-info operations
pub type OsInfoResult<T> = Result<T, OsInfoError>;

/// A failed host query, recovered inside the collector
#[derive(Error, Debug)]
pub enum LookupError {
    /// The OS did not report a required value
    #[error("{0} is unavailable")]
    Unavailable(&'static str),

    /// Reading a value from the OS failed
    #[error("failed to read {what}: {source}")]
    Io {
        what: &'static str,
        #[source]
        source: io::Error,
    },

    /// A helper program could not be started
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: io::Error,
    },

    /// A helper program ran but reported failure
    #[error("{program} exited with {status}")]
    CommandFailed {
        program: &'static str,
        status: ExitStatus,
    },
}
