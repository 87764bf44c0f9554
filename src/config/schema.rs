//! Configuration schema types
//!
//! This module defines the configuration structure for Porter.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};

/// Manifest addressing variant selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ManifestVariant {
    /// Object-store folder push (copy rows relative to a group folder)
    #[default]
    Folder,
    /// External CMS prefix push (destination URI per parent directory)
    Prefix,
}

/// Main Porter configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Serialize, Deserialize)]
pub struct PorterConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Lookup-store gateway configuration
    pub store: StoreConfig,

    /// Push planning configuration
    #[serde(default)]
    pub push: PushConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PorterConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.store.validate()?;
        self.push.validate()?;
        Ok(())
    }
}

/// Application-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name used in log output
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("application.name must not be empty".to_string());
        }
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(format!(
                "application.log_level '{other}' is invalid; use trace, debug, info, warn or error"
            )),
        }
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

/// Lookup-store gateway settings
#[derive(Debug, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the lookup-store API
    pub base_url: String,

    /// Bearer token for the API; usually supplied via `${PORTER_STORE_TOKEN}`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Index context the planner queries (`file` for the relocation core)
    #[serde(default = "default_context")]
    pub context: String,
}

impl StoreConfig {
    fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("store.base_url must not be empty".to_string());
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(format!(
                "store.base_url '{}' must be an http(s) URL",
                self.base_url
            ));
        }
        if self.timeout_seconds == 0 {
            return Err("store.timeout_seconds must be positive".to_string());
        }
        if self.context.trim().is_empty() {
            return Err("store.context must not be empty".to_string());
        }
        Ok(())
    }
}

/// Push planning settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushConfig {
    /// Which manifest addressing variant to build
    #[serde(default)]
    pub manifest_variant: ManifestVariant,

    /// Scheme the object-store folder variant validates destinations against
    #[serde(default = "default_object_store_scheme")]
    pub object_store_scheme: String,

    /// Scheme the external prefix variant validates destinations against
    #[serde(default = "default_prefix_scheme")]
    pub prefix_scheme: String,

    /// Default pagination window size for `porter windows`
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

impl PushConfig {
    fn validate(&self) -> Result<(), String> {
        if self.object_store_scheme.trim().is_empty() {
            return Err("push.object_store_scheme must not be empty".to_string());
        }
        if self.prefix_scheme.trim().is_empty() {
            return Err("push.prefix_scheme must not be empty".to_string());
        }
        if self.chunk_size == 0 {
            return Err("push.chunk_size must be positive".to_string());
        }
        Ok(())
    }

    /// The destination scheme the active variant expects
    pub fn expected_scheme(&self) -> &str {
        match self.manifest_variant {
            ManifestVariant::Folder => &self.object_store_scheme,
            ManifestVariant::Prefix => &self.prefix_scheme,
        }
    }
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            manifest_variant: ManifestVariant::default(),
            object_store_scheme: default_object_store_scheme(),
            prefix_scheme: default_prefix_scheme(),
            chunk_size: default_chunk_size(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable JSON file logging in addition to console output
    #[serde(default)]
    pub file_enabled: bool,

    /// Directory file logs are written to
    #[serde(default = "default_log_path")]
    pub file_path: String,

    /// Log file rotation: `daily` or `hourly`
    #[serde(default = "default_rotation")]
    pub file_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file_enabled: false,
            file_path: default_log_path(),
            file_rotation: default_rotation(),
        }
    }
}

fn default_app_name() -> String {
    "porter".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_context() -> String {
    "file".to_string()
}

fn default_object_store_scheme() -> String {
    "s3".to_string()
}

fn default_prefix_scheme() -> String {
    "icav2".to_string()
}

fn default_chunk_size() -> usize {
    100
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}
