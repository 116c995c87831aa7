//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → CancelSignal::trigger
//!
//! Cancellation (cancel.rs):
//!     CancelSignal → observed by every wait, list and stream read
//!     → log follower unwinds, dropping any open stream
//! ```
//!
//! # Design Decisions
//! - One signal per process, cloned into each consumer
//! - Cancellation is a distinct outcome, not a failure

pub mod cancel;
pub mod signals;

pub use cancel::CancelSignal;
