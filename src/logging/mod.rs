//! Logging and observability
//!
//! Structured logging via `tracing`: console output always, JSON file
//! logging with rotation when enabled in configuration.
//!
//! # Example
//!
//! ```no_run
//! use porter::logging::init_logging;
//! use porter::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Planner started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};
