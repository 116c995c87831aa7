//! Worker and log stream types shared by the cluster boundary.

use futures_util::stream::BoxStream;

use crate::cluster::error::ClusterError;

/// Reference to a worker `Job` created by the operator for a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerHandle {
    /// Kubernetes UID of the job.
    pub id: String,
    /// Job name (e.g. `scan-nmap-1a2b`).
    pub name: String,
    /// Namespace the job lives in.
    pub namespace: String,
    /// Creation timestamp in Unix seconds, when the apiserver reported one.
    pub created_at: Option<i64>,
}

impl WorkerHandle {
    /// Build a handle with no creation timestamp.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            namespace: namespace.into(),
            created_at: None,
        }
    }

    /// Attach a creation timestamp (Unix seconds).
    pub fn created_at(mut self, secs: i64) -> Self {
        self.created_at = Some(secs);
        self
    }
}

/// Options for opening a worker's log stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOptions {
    /// Output channel (container name) to read from.
    pub channel: String,
    /// Keep the stream open and deliver new output as it is produced.
    pub follow: bool,
}

impl LogOptions {
    /// Follow the given channel until the worker finishes.
    pub fn follow(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            follow: true,
        }
    }

    /// Read what the channel has produced so far and close.
    pub fn snapshot(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            follow: false,
        }
    }
}

/// Chunks of worker output. Dropping the stream closes the connection.
pub type LogStream = BoxStream<'static, Result<Vec<u8>, ClusterError>>;
