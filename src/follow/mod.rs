//! Log follow subsystem.
//!
//! # Data Flow
//! ```text
//! scan name
//!     → controller.rs lists workers (fixed-interval retry)
//!     → discovery.rs picks the worker named `scan-<name>...`
//!     → controller.rs opens the container log in follow mode
//!     → output copied to stdout until the worker finishes
//! ```
//!
//! # Design Decisions
//! - Absence of a worker is expected and retried; everything else is fatal
//! - A stream that fails after opening is not re-attached (no resume offset)
//! - Cancellation wins every race (`biased` select)

pub mod controller;
pub mod discovery;
pub mod state;

pub use controller::{FollowReport, LogFollower};
pub use discovery::{select_worker, worker_prefix, Discovery};
pub use state::FollowState;
