//! Fixed-interval polling with an attempt cap and a deadline.
//!
//! Worker discovery waits on an operator with a fixed reconcile period, so
//! the delay between listings is constant rather than exponential.

use std::time::Duration;

use crate::config::FollowConfig;

/// Retry schedule for discovery polling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Delay between attempts.
    pub interval: Duration,
    /// Maximum number of attempts, `None` for unbounded.
    pub max_attempts: Option<u32>,
    /// Total time budget, `None` for unbounded.
    pub deadline: Option<Duration>,
}

impl PollPolicy {
    /// Unbounded polling at `interval`.
    pub fn fixed(interval: Duration) -> Self {
        Self {
            interval,
            max_attempts: None,
            deadline: None,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Delay before the next attempt, or `None` once the budget is spent.
    ///
    /// `attempts` is the number of attempts already made. The last delay is
    /// shortened so the next attempt still lands inside the deadline.
    pub fn next_delay(&self, attempts: u32, elapsed: Duration) -> Option<Duration> {
        if let Some(max) = self.max_attempts {
            if attempts >= max {
                return None;
            }
        }

        match self.deadline {
            Some(deadline) if elapsed >= deadline => None,
            Some(deadline) => Some(self.interval.min(deadline - elapsed)),
            None => Some(self.interval),
        }
    }
}

impl From<&FollowConfig> for PollPolicy {
    fn from(config: &FollowConfig) -> Self {
        Self {
            interval: config.poll_interval(),
            max_attempts: config.max_attempts(),
            deadline: config.deadline(),
        }
    }
}
