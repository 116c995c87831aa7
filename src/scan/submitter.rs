//! Scan submission.

use crate::cluster::ClusterClient;
use crate::error::{ScbError, ScbResult};
use crate::scan::types::{Acknowledged, ScanIntent};

/// Persist `intent` as a `Scan` resource with exactly one create call.
///
/// Not idempotent: a second submission with the same name fails with the
/// cluster's conflict error. Returns as soon as the apiserver accepts the
/// resource; the operator reacts asynchronously.
pub async fn submit(client: &dyn ClusterClient, intent: &ScanIntent) -> ScbResult<Acknowledged> {
    let resource = intent.to_resource();

    tracing::debug!(
        scan = intent.name(),
        target = intent.target(),
        namespace = intent.namespace(),
        "Submitting scan"
    );

    let accepted = client
        .create_scan(&resource)
        .await
        .map_err(|source| ScbError::Submission {
            name: intent.name().to_string(),
            source,
        })?;

    let ack = Acknowledged {
        name: accepted
            .metadata
            .name
            .unwrap_or_else(|| intent.name().to_string()),
        namespace: accepted
            .metadata
            .namespace
            .unwrap_or_else(|| intent.namespace().to_string()),
        uid: accepted.metadata.uid,
    };

    tracing::info!(scan = %ack.name, namespace = %ack.namespace, "Scan accepted");
    Ok(ack)
}
