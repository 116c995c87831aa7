//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields (scan, job, namespace)
//!     → logging.rs subscriber → stderr
//! ```
//!
//! # Design Decisions
//! - Progress notices for the operator are written by the command layer;
//!   tracing carries diagnostics
//! - Quiet by default (`warn`), verbose via config or `RUST_LOG`

pub mod logging;

pub use logging::init_logging;
