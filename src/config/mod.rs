//! Configuration management for Porter.
//!
//! Porter uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for optional settings
//! - Validation on load
//! - Type-safe configuration structs
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! name = "porter"
//! log_level = "info"
//!
//! [store]
//! base_url = "https://lookup.example.org"
//! token = "${PORTER_STORE_TOKEN}"
//! timeout_seconds = 30
//!
//! [push]
//! manifest_variant = "folder"
//! object_store_scheme = "s3"
//! prefix_scheme = "icav2"
//! chunk_size = 100
//!
//! [logging]
//! file_enabled = false
//! ```
//!
//! # Environment Variables
//!
//! Use `${VAR_NAME}` syntax for substitution inside the TOML, or the
//! `PORTER_STORE_BASE_URL` / `PORTER_STORE_TOKEN` / `PORTER_LOG_LEVEL`
//! overrides which always win over the file.

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, LoggingConfig, ManifestVariant, PorterConfig, PushConfig, StoreConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
