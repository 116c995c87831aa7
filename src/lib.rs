//! scbctl: launch secureCodeBox scans and follow their output.

pub mod cli;
pub mod cluster;
pub mod config;
pub mod console;
pub mod error;
pub mod follow;
pub mod lifecycle;
pub mod observability;
pub mod resilience;
pub mod scan;

pub use cluster::{ClusterClient, ClusterContext};
pub use config::ScbctlConfig;
pub use error::{ScbError, ScbResult};
pub use follow::LogFollower;
pub use lifecycle::CancelSignal;
