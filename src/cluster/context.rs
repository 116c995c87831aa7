//! Connection discovery: kubeconfig to client plus namespace.

use std::sync::Arc;
use std::time::Duration;

use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};

use crate::cluster::client::ClusterClient;
use crate::cluster::error::{ClusterError, ClusterResult};
use crate::cluster::kube_client::KubeClient;
use crate::config::schema::{ClusterConfig, FollowConfig};

/// A connected client and the namespace it operates in.
///
/// Built once at process start and handed to the submitter and follower.
#[derive(Clone)]
pub struct ClusterContext {
    pub client: Arc<dyn ClusterClient>,
    pub namespace: String,
}

impl ClusterContext {
    pub fn new(client: Arc<dyn ClusterClient>, namespace: impl Into<String>) -> Self {
        Self {
            client,
            namespace: namespace.into(),
        }
    }

    /// Replace the namespace taken from the kubeconfig context.
    pub fn with_namespace(mut self, namespace: Option<String>) -> Self {
        if let Some(namespace) = namespace {
            self.namespace = namespace;
        }
        self
    }
}

impl std::fmt::Debug for ClusterContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClusterContext")
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}

/// Load the cluster connection described by `cluster` and build a client.
///
/// Lookup order: explicit kubeconfig file, then a named context in the
/// default kubeconfig, then full inference (in-cluster, `$KUBECONFIG`,
/// `~/.kube/config`). Failures are configuration errors and are never retried.
pub async fn acquire(
    cluster: &ClusterConfig,
    follow: &FollowConfig,
) -> ClusterResult<ClusterContext> {
    let options = KubeConfigOptions {
        context: cluster.context.clone(),
        ..KubeConfigOptions::default()
    };

    let mut config = match (&cluster.kubeconfig, &cluster.context) {
        (Some(path), _) => {
            let kubeconfig = Kubeconfig::read_from(path).map_err(|e| {
                ClusterError::Config(format!(
                    "failed to read kubeconfig '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            Config::from_custom_kubeconfig(kubeconfig, &options)
                .await
                .map_err(|e| ClusterError::Config(e.to_string()))?
        }
        (None, Some(_)) => Config::from_kubeconfig(&options)
            .await
            .map_err(|e| ClusterError::Config(e.to_string()))?,
        (None, None) => Config::infer()
            .await
            .map_err(|e| ClusterError::Config(e.to_string()))?,
    };

    // Followed log streams may stay quiet for a long time.
    config.read_timeout = None;

    let namespace = config.default_namespace.clone();
    let client = Client::try_from(config).map_err(|e| ClusterError::Config(e.to_string()))?;

    tracing::debug!(
        namespace = %namespace,
        context = cluster.context.as_deref().unwrap_or("<current>"),
        "Cluster client initialized"
    );

    let kube = KubeClient::new(client, Duration::from_secs(cluster.request_timeout_secs))
        .with_pod_ready_timeout(Duration::from_secs(follow.pod_ready_timeout_secs));

    Ok(ClusterContext::new(Arc::new(kube), namespace))
}
