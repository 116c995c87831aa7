//! Cluster client adapter.
//!
//! # Data Flow
//! ```text
//! ClusterConfig (kubeconfig path, context, timeout)
//!     → context.rs (discover config, build client, read namespace)
//!     → ClusterContext { Arc<dyn ClusterClient>, namespace }
//!     → shared by scan submission and log following
//! ```
//!
//! # Design Decisions
//! - One client per process, passed explicitly; no global state
//! - Callers see the narrow `ClusterClient` trait, never raw kube APIs
//! - Unary calls are bounded by a timeout; follow streams are not

pub mod client;
pub mod context;
pub mod error;
pub mod kube_client;
pub mod types;

pub use client::ClusterClient;
pub use context::{acquire, ClusterContext};
pub use error::{ClusterError, ClusterResult};
pub use kube_client::KubeClient;
pub use types::{LogOptions, LogStream, WorkerHandle};
