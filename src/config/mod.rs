//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! scbctl.toml (optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ScbctlConfig (validated, immutable)
//!     → CLI flags override individual fields
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded and overridden
//! - All fields have defaults so no file is required
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, ConfigError};
pub use schema::{ClusterConfig, FollowConfig, ObservabilityConfig, ScbctlConfig, SelectionPolicy};
pub use validation::{validate_config, ValidationError};
