//! Log follower state machine.
//!
//! # States
//! - Discovering: listing worker processes
//! - WaitingForHandle: no match yet, sleeping before the next listing
//! - Streaming: attached to the selected worker's output
//! - Done / Failed / Cancelled: terminal
//!
//! # State Transitions
//! ```text
//! Discovering → WaitingForHandle → Discovering   (retry loop)
//! Discovering → Streaming                        (worker matched)
//! Streaming → Done                               (stream closed)
//! any non-terminal → Failed | Cancelled
//! ```

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowState {
    Discovering,
    WaitingForHandle,
    Streaming,
    Done,
    Failed,
    Cancelled,
}

impl FollowState {
    pub fn is_terminal(self) -> bool {
        matches!(self, FollowState::Done | FollowState::Failed | FollowState::Cancelled)
    }

    pub fn can_transition_to(self, next: FollowState) -> bool {
        use FollowState::*;
        match (self, next) {
            (from, Failed | Cancelled) => !from.is_terminal(),
            (Discovering, WaitingForHandle | Streaming) => true,
            (WaitingForHandle, Discovering) => true,
            (Streaming, Done) => true,
            _ => false,
        }
    }

    /// Move to `next`, logging the transition.
    ///
    /// Streaming must never start before discovery matched a worker; an
    /// illegal transition is a bug in the follower loop.
    pub fn enter(&mut self, next: FollowState) {
        debug_assert!(
            self.can_transition_to(next),
            "illegal follow transition {} -> {}",
            self,
            next
        );
        tracing::trace!(from = %self, to = %next, "Follow state transition");
        *self = next;
    }
}

impl fmt::Display for FollowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FollowState::Discovering => "DISCOVERING",
            FollowState::WaitingForHandle => "WAITING_FOR_HANDLE",
            FollowState::Streaming => "STREAMING",
            FollowState::Done => "DONE",
            FollowState::Failed => "FAILED",
            FollowState::Cancelled => "CANCELLED",
        };
        f.write_str(name)
    }
}
