//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to
//! `anyhow::Error` via the `?` operator.

use thiserror::Error;

/// Errors raised by the precondition gate before any service is probed.
#[derive(Debug, Error)]
pub enum PreflightError {
    #[error("{0} doesn't seem to be installed or is not on your PATH")]
    MissingDependency(&'static str),

    #[error("the docker daemon is not running or you don't have permission to talk to it")]
    DaemonUnreachable,

    #[error("could not verify the shared docker network '{name}': {reason}")]
    NetworkLookup { name: String, reason: String },

    #[error("could not create the shared docker network '{name}': {reason}")]
    NetworkCreate { name: String, reason: String },
}
