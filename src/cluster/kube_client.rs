//! `ClusterClient` backed by the kube crate.
//!
//! # Responsibilities
//! - Create `Scan` resources
//! - List worker jobs
//! - Resolve a job to its pod and stream the container log
//! - Bound every unary call with the configured request timeout

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::io::AsyncBufReadExt;
use futures_util::stream::{self, StreamExt};
use k8s_openapi::api::batch::v1::Job;
use k8s_openapi::api::core::v1::Pod;
use kube::api::{ListParams, LogParams, PostParams};
use kube::{Api, Client};
use tokio::time::{sleep, timeout, Instant};

use crate::cluster::client::ClusterClient;
use crate::cluster::error::{ClusterError, ClusterResult};
use crate::cluster::types::{LogOptions, LogStream, WorkerHandle};
use crate::scan::resource::Scan;

/// Label the job controller stamps on every pod it creates.
const JOB_NAME_LABEL: &str = "job-name";

/// Cluster client wrapper with per-request timeouts.
#[derive(Clone)]
pub struct KubeClient {
    client: Client,
    request_timeout: Duration,
    pod_ready_timeout: Duration,
    pod_poll_interval: Duration,
}

impl KubeClient {
    /// Wrap an established kube client.
    pub fn new(client: Client, request_timeout: Duration) -> Self {
        Self {
            client,
            request_timeout,
            pod_ready_timeout: Duration::from_secs(20),
            pod_poll_interval: Duration::from_secs(1),
        }
    }

    /// How long to wait for a worker's pod to leave `Pending` before giving up.
    pub fn with_pod_ready_timeout(mut self, pod_ready_timeout: Duration) -> Self {
        self.pod_ready_timeout = pod_ready_timeout;
        self
    }

    async fn bounded<T, F>(&self, fut: F) -> ClusterResult<T>
    where
        F: Future<Output = Result<T, kube::Error>>,
    {
        match timeout(self.request_timeout, fut).await {
            Ok(result) => result.map_err(ClusterError::from),
            Err(_) => Err(ClusterError::Timeout(self.request_timeout.as_secs())),
        }
    }

    /// Find a pod of `worker` whose containers can serve logs.
    async fn resolve_pod(&self, pods: &Api<Pod>, worker: &WorkerHandle) -> ClusterResult<String> {
        let params = ListParams::default().labels(&format!("{}={}", JOB_NAME_LABEL, worker.name));
        let started = Instant::now();

        loop {
            let list = self.bounded(pods.list(&params)).await?;
            if let Some(name) = list.items.iter().find_map(loggable_pod_name) {
                return Ok(name);
            }

            if started.elapsed() >= self.pod_ready_timeout {
                return Err(ClusterError::PodNotReady {
                    job: worker.name.clone(),
                    waited_secs: self.pod_ready_timeout.as_secs(),
                });
            }

            tracing::debug!(
                job = %worker.name,
                pods = list.items.len(),
                "Worker pod not ready, waiting"
            );
            sleep(self.pod_poll_interval).await;
        }
    }
}

/// A pod can serve logs once it is past `Pending`.
fn loggable_pod_name(pod: &Pod) -> Option<String> {
    let phase = pod.status.as_ref()?.phase.as_deref()?;
    match phase {
        "Running" | "Succeeded" | "Failed" => pod.metadata.name.clone(),
        _ => None,
    }
}

fn worker_from_job(job: Job, fallback_namespace: &str) -> Option<WorkerHandle> {
    let meta = job.metadata;
    let name = meta.name?;
    Some(WorkerHandle {
        id: meta.uid.unwrap_or_default(),
        name,
        namespace: meta.namespace.unwrap_or_else(|| fallback_namespace.to_string()),
        created_at: meta.creation_timestamp.map(|t| t.0.timestamp()),
    })
}

#[async_trait]
impl ClusterClient for KubeClient {
    async fn create_scan(&self, scan: &Scan) -> ClusterResult<Scan> {
        let namespace = scan.metadata.namespace.as_deref().unwrap_or("default");
        let scans: Api<Scan> = Api::namespaced(self.client.clone(), namespace);
        self.bounded(scans.create(&PostParams::default(), scan)).await
    }

    async fn list_workers(&self, namespace: &str) -> ClusterResult<Vec<WorkerHandle>> {
        let jobs: Api<Job> = Api::namespaced(self.client.clone(), namespace);
        let list = self.bounded(jobs.list(&ListParams::default())).await?;
        Ok(list
            .items
            .into_iter()
            .filter_map(|job| worker_from_job(job, namespace))
            .collect())
    }

    async fn open_log_stream(
        &self,
        worker: &WorkerHandle,
        options: &LogOptions,
    ) -> ClusterResult<LogStream> {
        let pods: Api<Pod> = Api::namespaced(self.client.clone(), &worker.namespace);
        let pod = self.resolve_pod(&pods, worker).await?;

        tracing::debug!(
            job = %worker.name,
            pod = %pod,
            container = %options.channel,
            follow = options.follow,
            "Opening log stream"
        );

        let params = LogParams {
            container: Some(options.channel.clone()),
            follow: options.follow,
            ..LogParams::default()
        };
        let reader = self.bounded(pods.log_stream(&pod, &params)).await?;

        // One item per line so stdout interleaves cleanly with notices.
        let lines = stream::try_unfold(Box::pin(reader), |mut reader| async move {
            let mut line = Vec::new();
            let read = reader.read_until(b'\n', &mut line).await?;
            Ok::<_, std::io::Error>(if read == 0 { None } else { Some((line, reader)) })
        });

        Ok(lines.map(|chunk| chunk.map_err(ClusterError::Io)).boxed())
    }
}
