//! Configuration schema definitions.
//!
//! This module defines the configuration structure for `scbctl`.
//! All types derive Serde traits for deserialization from config files.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ScbctlConfig {
    /// Cluster connection settings.
    pub cluster: ClusterConfig,

    /// Log follow settings.
    pub follow: FollowConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Cluster connection configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ClusterConfig {
    /// Kubeconfig file. Inferred from the environment when unset.
    pub kubeconfig: Option<PathBuf>,

    /// Kubeconfig context to use instead of the current one.
    pub context: Option<String>,

    /// Timeout for create and list calls in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            kubeconfig: None,
            context: None,
            request_timeout_secs: 30,
        }
    }
}

/// How the follower picks among several matching workers.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionPolicy {
    /// First match in the order the apiserver listed them.
    #[default]
    FirstListed,
    /// Match with the latest creation timestamp.
    NewestCreated,
}

/// Log follow configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct FollowConfig {
    /// Fixed delay between worker listings in milliseconds.
    pub poll_interval_ms: u64,

    /// Maximum number of listings before giving up (0 = unbounded).
    pub max_attempts: u32,

    /// Total time allowed for discovery in seconds (0 = unbounded).
    pub deadline_secs: u64,

    /// How long to wait for the worker's pod to start in seconds.
    pub pod_ready_timeout_secs: u64,

    /// Tie-break among several matching workers.
    pub selection: SelectionPolicy,
}

impl Default for FollowConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 2000,
            max_attempts: 0,
            deadline_secs: 600,
            pod_ready_timeout_secs: 20,
            selection: SelectionPolicy::FirstListed,
        }
    }
}

impl FollowConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn max_attempts(&self) -> Option<u32> {
        (self.max_attempts > 0).then_some(self.max_attempts)
    }

    pub fn deadline(&self) -> Option<Duration> {
        (self.deadline_secs > 0).then(|| Duration::from_secs(self.deadline_secs))
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}
