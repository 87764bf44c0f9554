//! Filesystem manifest sink
//!
//! Writes manifests beneath a base directory, creating intermediate
//! directories as needed. Locations are slash-separated relative paths, the
//! same shape an object-store sink would take as a key.

use crate::adapters::sink::traits::ManifestSink;
use crate::domain::result::Result;
use crate::domain::PorterError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Sink writing manifests under a local base directory
#[derive(Debug, Clone)]
pub struct FileSink {
    base_dir: PathBuf,
}

impl FileSink {
    /// Creates a sink rooted at a base directory
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn resolve(&self, location: &str) -> Result<PathBuf> {
        let relative = Path::new(location.trim_start_matches('/'));
        if relative
            .components()
            .any(|c| matches!(c, std::path::Component::ParentDir))
        {
            return Err(PorterError::Sink(format!(
                "location '{location}' escapes the sink base directory"
            )));
        }
        Ok(self.base_dir.join(relative))
    }
}

#[async_trait]
impl ManifestSink for FileSink {
    async fn put(&self, payload: &[u8], location: &str) -> Result<()> {
        let path = self.resolve(location)?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| PorterError::Sink(format!("Failed to create {parent:?}: {e}")))?;
        }

        tokio::fs::write(&path, payload)
            .await
            .map_err(|e| PorterError::Sink(format!("Failed to write {path:?}: {e}")))?;

        tracing::info!(
            path = %path.display(),
            bytes = payload.len(),
            "Wrote manifest"
        );

        Ok(())
    }
}
