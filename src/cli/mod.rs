//! Command layer.
//!
//! # Data Flow
//! ```text
//! argv → args.rs (clap) → config overrides
//!     → scan.rs: validate → submit → (follow)
//!     → ScanOutcome | ScbError → exit code (main.rs)
//! ```

pub mod args;
pub mod scan;

pub use args::{Cli, Commands, ScanArgs};
pub use scan::{connect, run_scan, ScanOutcome};
