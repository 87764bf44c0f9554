//! Domain models and types for Porter.
//!
//! This module contains the core domain models, types, and business rules.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`JobId`], [`InstrumentRunId`], [`PortalRunId`])
//! - **Record and group models** ([`FileRecord`], [`Group`], [`GroupKey`])
//! - **Manifest payloads** ([`FolderManifest`], [`PrefixManifest`])
//! - **Validated destinations** ([`DestinationUri`])
//! - **Error types** ([`PorterError`], [`StoreError`], [`ClassificationError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Porter uses the newtype pattern for identifiers so the two grouping keys
//! can never be mixed up:
//!
//! ```rust
//! use porter::domain::{InstrumentRunId, PortalRunId};
//!
//! # fn example() -> Result<(), String> {
//! let instrument_run = InstrumentRunId::new("240101_A01052_0001_BH5LJVDSX7")?;
//! let portal_run = PortalRunId::new("20240101abcdef12")?;
//!
//! // This won't compile - type safety prevents mixing IDs
//! // let wrong: InstrumentRunId = portal_run;  // Compile error!
//! # Ok(())
//! # }
//! ```

pub mod destination;
pub mod errors;
pub mod ids;
pub mod manifest;
pub mod record;
pub mod result;
pub mod token;

// Re-export commonly used types for convenience
pub use destination::DestinationUri;
pub use errors::{ClassificationError, PorterError, StoreError};
pub use ids::{InstrumentRunId, JobId, PortalRunId};
pub use manifest::{CopyRow, FolderManifest, PrefixManifest, PrefixMapping};
pub use record::{DataType, FileRecord, Group, GroupKey};
pub use result::Result;
pub use token::PageToken;
