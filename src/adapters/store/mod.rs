//! Lookup-store gateway
//!
//! The packaging lookup store indexes every file record belonging to a
//! packaging job. This module provides the [`RecordStore`] seam the planning
//! core reads through, the HTTP client that implements it in production, and
//! an in-memory implementation for tests and dry runs.

pub mod http;
pub mod memory;
pub mod models;
pub mod traits;

pub use http::HttpRecordStore;
pub use memory::MemoryRecordStore;
pub use traits::{RecordPage, RecordStore};
