//! Domain-driven configuration for the dvdstore data-access layer
//!
//! Configuration is split by functional domain (database, logging), with
//! serde defaults, validation, and environment variable overrides.

pub mod error;
pub mod loader;
pub mod validation;

pub mod domains;

// Re-export main types
pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;

pub use domains::{database::DatabaseConfig, logging::LoggingConfig, DvdStoreConfig};

pub use domains::utils::serde_duration;
