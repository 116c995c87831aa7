//! Cancellation coordination.

use tokio_util::sync::CancellationToken;

/// Cooperative cancellation shared between the interrupt handler and the
/// log follower.
///
/// Clones observe the same signal. Waiting on [`CancelSignal::cancelled`]
/// can happen any number of times, at every suspension point.
#[derive(Debug, Clone, Default)]
pub struct CancelSignal {
    token: CancellationToken,
}

impl CancelSignal {
    /// Create a new, untriggered signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire the signal. Idempotent.
    pub fn trigger(&self) {
        self.token.cancel();
    }

    /// Whether the signal has fired.
    pub fn is_triggered(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Completes once the signal fires.
    pub async fn cancelled(&self) {
        self.token.cancelled().await
    }
}
