//! Worker selection by name prefix.

use crate::cluster::WorkerHandle;
use crate::config::SelectionPolicy;

/// Outcome of inspecting one listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discovery<'a> {
    /// The namespace has no workers at all.
    Empty,
    /// Workers exist but none belongs to this scan.
    NoMatch,
    Found(&'a WorkerHandle),
}

/// Name prefix the operator gives workers of scan `scan_name`.
pub fn worker_prefix(scan_name: &str) -> String {
    format!("scan-{}", scan_name)
}

/// Pick at most one worker for `scan_name` from `listing`.
///
/// Only names starting with `scan-<scan_name>` qualify. With
/// [`SelectionPolicy::FirstListed`] the first qualifying entry wins; with
/// [`SelectionPolicy::NewestCreated`] the latest creation timestamp wins and
/// ties (or missing timestamps) fall back to listing order.
pub fn select_worker<'a>(
    listing: &'a [WorkerHandle],
    scan_name: &str,
    policy: SelectionPolicy,
) -> Discovery<'a> {
    if listing.is_empty() {
        return Discovery::Empty;
    }

    let prefix = worker_prefix(scan_name);
    let mut candidates = listing.iter().filter(|w| w.name.starts_with(&prefix));

    let selected = match policy {
        SelectionPolicy::FirstListed => candidates.next(),
        SelectionPolicy::NewestCreated => {
            candidates.fold(None::<&'a WorkerHandle>, |best, w| match best {
                Some(b) if w.created_at <= b.created_at => Some(b),
                _ => Some(w),
            })
        }
    };

    selected.map_or(Discovery::NoMatch, Discovery::Found)
}
