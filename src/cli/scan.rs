//! `scbctl scan`: submit a scan, then optionally follow its output.

use tokio::io::AsyncWrite;

use crate::cli::args::ScanArgs;
use crate::cluster::{self, ClusterContext};
use crate::config::{ClusterConfig, FollowConfig};
use crate::console::write_line;
use crate::error::{ScbError, ScbResult};
use crate::follow::{FollowReport, LogFollower};
use crate::lifecycle::CancelSignal;
use crate::scan::{submit, Acknowledged, ScanIntent};

/// What a successful `scan` invocation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    pub ack: Acknowledged,
    /// Present when `--follow` was given.
    pub follow: Option<FollowReport>,
}

impl ScanOutcome {
    /// One-line summary printed on success.
    pub fn summary(&self) -> String {
        match &self.follow {
            Some(report) => format!(
                "Scan '{}' finished, streamed {} bytes from worker '{}'",
                self.ack.name, report.bytes_streamed, report.worker.name
            ),
            None => format!(
                "Scan '{}' submitted to namespace '{}'",
                self.ack.name, self.ack.namespace
            ),
        }
    }
}

/// Connect to the cluster, optionally pinning the namespace.
pub async fn connect<E>(
    cluster_config: &ClusterConfig,
    follow_config: &FollowConfig,
    namespace: Option<String>,
    err: &mut E,
) -> ScbResult<ClusterContext>
where
    E: AsyncWrite + Unpin,
{
    write_line(err, "Initializing Kubernetes client").await?;
    let context = cluster::acquire(cluster_config, follow_config)
        .await
        .map_err(ScbError::Configuration)?
        .with_namespace(namespace);

    tracing::info!(namespace = %context.namespace, "Cluster client ready");
    Ok(context)
}

/// Run the scan command against an already-acquired cluster context.
///
/// Submission always completes before discovery starts. Scan output goes to
/// `out`, progress notices to `err`.
pub async fn run_scan<O, E>(
    context: &ClusterContext,
    args: &ScanArgs,
    follow_config: &FollowConfig,
    cancel: CancelSignal,
    out: &mut O,
    err: &mut E,
) -> ScbResult<ScanOutcome>
where
    O: AsyncWrite + Unpin,
    E: AsyncWrite + Unpin,
{
    let intent = ScanIntent::new(&args.name, &args.target, &context.namespace)?;

    write_line(
        err,
        &format!(
            "Creating a new scan with name '{}' and target '{}' in namespace '{}'",
            intent.name(),
            intent.target(),
            intent.namespace()
        ),
    )
    .await?;

    let ack = submit(context.client.as_ref(), &intent).await?;
    write_line(err, &format!("Successfully created a new Scan '{}'", ack.name)).await?;

    let follow = if args.follow {
        write_line(err, "Following the scan logs").await?;
        let follower = LogFollower::new(context, follow_config, cancel);
        Some(follower.follow(intent.name(), out, err).await?)
    } else {
        None
    };

    Ok(ScanOutcome { ack, follow })
}
