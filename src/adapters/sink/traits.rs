//! Manifest sink abstraction
//!
//! Persisting a manifest is an optional, explicit side effect that happens
//! only after the manifest is fully built. The sink owns where the bytes go;
//! the planner only hands over a payload and a relative location.

use crate::domain::result::Result;
use async_trait::async_trait;

/// Write-only destination for serialized manifests
#[async_trait]
pub trait ManifestSink: Send + Sync {
    /// Writes a payload at a sink-relative location
    ///
    /// # Errors
    ///
    /// Returns a `Sink` error if the write fails. A failed write aborts the
    /// invocation; there is no partial output to clean up because the
    /// payload is written in one call.
    async fn put(&self, payload: &[u8], location: &str) -> Result<()>;
}
