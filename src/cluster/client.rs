//! The capability surface the submitter and log follower consume.

use async_trait::async_trait;

use crate::cluster::error::ClusterResult;
use crate::cluster::types::{LogOptions, LogStream, WorkerHandle};
use crate::scan::resource::Scan;

/// Narrow client over the cluster API.
///
/// Production code uses [`KubeClient`](crate::cluster::KubeClient); tests
/// script responses with an in-memory implementation.
#[async_trait]
pub trait ClusterClient: Send + Sync {
    /// Persist a new `Scan` resource and return the accepted copy.
    async fn create_scan(&self, scan: &Scan) -> ClusterResult<Scan>;

    /// List worker jobs in `namespace`, in the order the apiserver returned them.
    async fn list_workers(&self, namespace: &str) -> ClusterResult<Vec<WorkerHandle>>;

    /// Open a byte stream over one output channel of a worker.
    async fn open_log_stream(
        &self,
        worker: &WorkerHandle,
        options: &LogOptions,
    ) -> ClusterResult<LogStream>;
}
