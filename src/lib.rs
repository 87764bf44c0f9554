// Porter - Data Relocation Planning Tool
// Copyright (c) 2025 Porter Contributors
// Licensed under the MIT License

//! # Porter - Data Relocation Planning
//!
//! Porter is a planning tool for bulk data pushes: it classifies the file
//! records of a packaging job into relocation groups and builds the push
//! manifests a copy orchestrator consumes.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Classifying** file records into primary (instrument-run) and
//!   secondary (portal-run) relocation groups by path convention
//! - **Indexing** groups deterministically so a fan-out orchestrator can
//!   address each group by a plain integer
//! - **Building** folder manifests for object-store pushes and prefix
//!   manifests for CMS pushes
//! - **Enumerating** pagination window start tokens for chunked, parallel
//!   record processing
//!
//! ## Architecture
//!
//! Porter follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (classify, group, manifest, paginate, plan)
//! - [`adapters`] - External integrations (lookup store, manifest sinks)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use porter::adapters::store::HttpRecordStore;
//! use porter::config::load_config;
//! use porter::core::plan::{PlanRequest, RelocationPlanner};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("porter.toml")?;
//!
//!     let context = config.store.context.clone();
//!     let store = Arc::new(HttpRecordStore::new(config.store)?);
//!     let planner = RelocationPlanner::new(store, config.push, context);
//!
//!     let outcome = planner
//!         .plan(&PlanRequest::count("job-1", "s3://archive/releases"))
//!         .await?;
//!
//!     println!("{}", serde_json::to_string_pretty(&outcome)?);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
