//! Scan submission subsystem.
//!
//! # Data Flow
//! ```text
//! CLI (name, target) + namespace
//!     → types.rs (validate, ScanIntent)
//!     → resource.rs (Scan custom resource)
//!     → submitter.rs (one create call)
//!     → Acknowledged
//! ```

pub mod resource;
pub mod submitter;
pub mod types;

pub use resource::{Scan, ScanSpec};
pub use submitter::submit;
pub use types::{validate_scan_args, Acknowledged, ScanIntent};
