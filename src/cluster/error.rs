//! Errors raised at the cluster boundary.

use thiserror::Error;

/// Errors that can occur while talking to the cluster.
#[derive(Debug, Error)]
pub enum ClusterError {
    /// Kubeconfig could not be read, parsed or turned into a client.
    #[error("invalid cluster configuration: {0}")]
    Config(String),

    /// A resource with the same name already exists.
    #[error("resource already exists: {0}")]
    AlreadyExists(String),

    /// The apiserver rejected the request.
    #[error("API error {code} ({reason}): {message}")]
    Api {
        code: u16,
        reason: String,
        message: String,
    },

    /// The request never got a response (network, TLS, auth plumbing).
    #[error("transport error: {0}")]
    Transport(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    /// The worker's pod never left `Pending`.
    #[error("no running pod for job '{job}' after {waited_secs} seconds")]
    PodNotReady { job: String, waited_secs: u64 },

    /// Reading an open log stream failed.
    #[error("log stream read failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for cluster operations.
pub type ClusterResult<T> = Result<T, ClusterError>;

impl From<kube::Error> for ClusterError {
    fn from(err: kube::Error) -> Self {
        match err {
            kube::Error::Api(resp) if resp.code == 409 => ClusterError::AlreadyExists(resp.message),
            kube::Error::Api(resp) => ClusterError::Api {
                code: resp.code,
                reason: resp.reason,
                message: resp.message,
            },
            other => ClusterError::Transport(other.to_string()),
        }
    }
}
