//! Errors surfaced at the command boundary.

use std::time::Duration;

use thiserror::Error;

use crate::cluster::ClusterError;
use crate::config::ConfigError;

/// Exit code for a genuine failure.
pub const EXIT_FAILURE: u8 = 1;
/// Exit code for invalid input.
pub const EXIT_USAGE: u8 = 2;
/// Exit code when the operator interrupted the command (128 + SIGINT).
pub const EXIT_CANCELLED: u8 = 130;

/// Fatal outcomes of a `scan` invocation.
#[derive(Debug, Error)]
pub enum ScbError {
    /// Config file could not be loaded.
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    /// No cluster connection could be established.
    #[error("error initializing Kubernetes client: {0}")]
    Configuration(#[source] ClusterError),

    /// Required input missing or malformed.
    #[error("invalid input: {0}")]
    Validation(String),

    /// The cluster rejected the scan.
    #[error("failed to create Scan '{name}': {source}")]
    Submission {
        name: String,
        #[source]
        source: ClusterError,
    },

    /// Listing worker processes failed.
    #[error("error listing worker processes: {0}")]
    Discovery(#[source] ClusterError),

    /// No matching worker appeared within the retry budget.
    #[error("no worker process for scan '{scan}' after {attempts} attempts ({elapsed:?})")]
    DiscoveryTimeout {
        scan: String,
        attempts: u32,
        elapsed: Duration,
    },

    /// The log stream failed after it was opened (or could not be opened).
    #[error("error streaming logs from '{worker}': {source}")]
    Stream {
        worker: String,
        #[source]
        source: ClusterError,
    },

    /// Writing scan output to the local sink failed.
    #[error("error writing scan output: {0}")]
    Output(#[source] std::io::Error),

    /// The operator interrupted the command.
    #[error("cancelled")]
    Cancelled,
}

impl ScbError {
    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> u8 {
        match self {
            ScbError::Cancelled => EXIT_CANCELLED,
            ScbError::Validation(_) => EXIT_USAGE,
            _ => EXIT_FAILURE,
        }
    }

    /// Whether this is an operator abort rather than a failure.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ScbError::Cancelled)
    }
}

/// Result type for command operations.
pub type ScbResult<T> = Result<T, ScbError>;
