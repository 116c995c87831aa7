//! Discover a scan's worker process and stream its output.
//!
//! # Responsibilities
//! - Poll worker listings until one matches the scan (bounded by [`PollPolicy`])
//! - Attach to the worker's output channel in follow mode
//! - Copy output to the caller's sink until the worker finishes
//! - Observe cancellation at every suspension point

use std::sync::Arc;

use futures_util::StreamExt;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::time::{sleep, Instant};

use crate::cluster::{ClusterClient, ClusterContext, LogOptions, LogStream, WorkerHandle};
use crate::config::{FollowConfig, SelectionPolicy};
use crate::console::write_line;
use crate::error::{ScbError, ScbResult};
use crate::follow::discovery::{select_worker, Discovery};
use crate::follow::state::FollowState;
use crate::lifecycle::CancelSignal;
use crate::resilience::PollPolicy;

/// Summary of a completed follow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowReport {
    /// Worker the output was read from.
    pub worker: WorkerHandle,
    /// Output channel (container) that was streamed.
    pub channel: String,
    /// Number of listings performed; one more than the number of waits.
    pub discovery_attempts: u32,
    /// Bytes copied to the output sink.
    pub bytes_streamed: u64,
}

/// Polling controller that attaches to the worker of one scan.
pub struct LogFollower {
    client: Arc<dyn ClusterClient>,
    namespace: String,
    policy: PollPolicy,
    selection: SelectionPolicy,
    cancel: CancelSignal,
}

impl LogFollower {
    /// Create a follower bound to the context's client and namespace.
    pub fn new(context: &ClusterContext, config: &FollowConfig, cancel: CancelSignal) -> Self {
        Self {
            client: context.client.clone(),
            namespace: context.namespace.clone(),
            policy: PollPolicy::from(config),
            selection: config.selection,
            cancel,
        }
    }

    pub fn with_policy(mut self, policy: PollPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Follow the output of the worker for `scan_name`.
    ///
    /// Log bytes go to `out`; progress notices go to `err`. Returns
    /// [`ScbError::Cancelled`] if the cancel signal fires first. A failure
    /// after the stream is open is returned as is, without re-discovery.
    pub async fn follow<O, E>(
        &self,
        scan_name: &str,
        out: &mut O,
        err: &mut E,
    ) -> ScbResult<FollowReport>
    where
        O: AsyncWrite + Unpin,
        E: AsyncWrite + Unpin,
    {
        let mut state = FollowState::Discovering;
        let result = self.run(scan_name, &mut state, out, err).await;

        let terminal = match &result {
            Ok(_) => FollowState::Done,
            Err(e) if e.is_cancelled() => FollowState::Cancelled,
            Err(_) => FollowState::Failed,
        };
        state.enter(terminal);

        match &result {
            Ok(report) => tracing::info!(
                scan = scan_name,
                worker = %report.worker.name,
                bytes = report.bytes_streamed,
                "Log stream finished"
            ),
            Err(e) if e.is_cancelled() => tracing::info!(scan = scan_name, "Log follow cancelled"),
            Err(e) => tracing::warn!(scan = scan_name, error = %e, "Log follow failed"),
        }

        result
    }

    async fn run<O, E>(
        &self,
        scan_name: &str,
        state: &mut FollowState,
        out: &mut O,
        err: &mut E,
    ) -> ScbResult<FollowReport>
    where
        O: AsyncWrite + Unpin,
        E: AsyncWrite + Unpin,
    {
        let (worker, discovery_attempts) = self.discover(scan_name, state, err).await?;

        // The operator names the worker's primary container after the scan.
        let channel = scan_name.to_string();
        state.enter(FollowState::Streaming);
        write_line(
            err,
            &format!(
                "Streaming logs for worker '{}' and container '{}'",
                worker.name, channel
            ),
        )
        .await?;

        let options = LogOptions::follow(&channel);
        let stream = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => return Err(ScbError::Cancelled),
            opened = self.client.open_log_stream(&worker, &options) => {
                opened.map_err(|source| ScbError::Stream { worker: worker.name.clone(), source })?
            }
        };

        let bytes_streamed = self.pump(stream, &worker, out).await?;

        Ok(FollowReport {
            worker,
            channel,
            discovery_attempts,
            bytes_streamed,
        })
    }

    /// List until a worker matches. Returns the worker and the number of listings.
    async fn discover<E>(
        &self,
        scan_name: &str,
        state: &mut FollowState,
        err: &mut E,
    ) -> ScbResult<(WorkerHandle, u32)>
    where
        E: AsyncWrite + Unpin,
    {
        let started = Instant::now();
        let mut attempts = 0u32;

        loop {
            if *state == FollowState::WaitingForHandle {
                state.enter(FollowState::Discovering);
            }
            attempts += 1;

            let listing = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => return Err(ScbError::Cancelled),
                listing = self.client.list_workers(&self.namespace) => {
                    listing.map_err(ScbError::Discovery)?
                }
            };

            let message = match select_worker(&listing, scan_name, self.selection) {
                Discovery::Found(worker) => {
                    tracing::debug!(
                        scan = scan_name,
                        worker = %worker.name,
                        attempts,
                        "Worker process selected"
                    );
                    return Ok((worker.clone(), attempts));
                }
                Discovery::Empty => "No worker processes found yet, retrying...",
                Discovery::NoMatch => "Waiting for the worker process to be created...",
            };

            tracing::debug!(
                scan = scan_name,
                namespace = %self.namespace,
                listed = listing.len(),
                attempts,
                "No matching worker process"
            );
            write_line(err, message).await?;

            let elapsed = started.elapsed();
            let Some(delay) = self.policy.next_delay(attempts, elapsed) else {
                return Err(ScbError::DiscoveryTimeout {
                    scan: scan_name.to_string(),
                    attempts,
                    elapsed,
                });
            };

            state.enter(FollowState::WaitingForHandle);
            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => return Err(ScbError::Cancelled),
                _ = sleep(delay) => {}
            }
        }
    }

    /// Copy the stream into `out` chunk by chunk. The stream is dropped on every exit.
    async fn pump<O>(
        &self,
        mut stream: LogStream,
        worker: &WorkerHandle,
        out: &mut O,
    ) -> ScbResult<u64>
    where
        O: AsyncWrite + Unpin,
    {
        let mut bytes = 0u64;

        loop {
            let next = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => return Err(ScbError::Cancelled),
                next = stream.next() => next,
            };

            match next {
                None => return Ok(bytes),
                Some(Ok(chunk)) => {
                    out.write_all(&chunk).await.map_err(ScbError::Output)?;
                    out.flush().await.map_err(ScbError::Output)?;
                    bytes += chunk.len() as u64;
                }
                Some(Err(source)) => {
                    return Err(ScbError::Stream {
                        worker: worker.name.clone(),
                        source,
                    })
                }
            }
        }
    }
}
