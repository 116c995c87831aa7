//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Worker discovery:
//!     → backoff.rs (fixed delay between listings)
//!     → attempt cap / deadline exhausted → discovery timeout
//! Cluster calls:
//!     → request timeout enforced by the cluster client
//! ```
//!
//! # Design Decisions
//! - Only "worker not there yet" is retried
//! - Stream failures are never retried (output cannot be resumed from an offset)
//! - Every wait has an upper bound unless explicitly configured away

pub mod backoff;

pub use backoff::PollPolicy;
