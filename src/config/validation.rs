//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (intervals and timeouts > 0)
//! - Validate the log level
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ScbctlConfig → Result<(), Vec<ValidationError>>

use std::fmt;

use crate::config::schema::ScbctlConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check every semantic constraint on `config`.
pub fn validate_config(config: &ScbctlConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.cluster.request_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "cluster.request_timeout_secs",
            "must be greater than zero",
        ));
    }

    if let Some(path) = &config.cluster.kubeconfig {
        if path.as_os_str().is_empty() {
            errors.push(ValidationError::new("cluster.kubeconfig", "must not be empty"));
        }
    }

    if config.follow.poll_interval_ms == 0 {
        errors.push(ValidationError::new(
            "follow.poll_interval_ms",
            "must be greater than zero",
        ));
    }

    if config.follow.pod_ready_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "follow.pod_ready_timeout_secs",
            "must be greater than zero",
        ));
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::new(
            "observability.log_level",
            format!("unknown level '{}'", config.observability.log_level),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
