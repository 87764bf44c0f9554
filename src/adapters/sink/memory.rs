//! In-memory manifest sink for tests

use crate::adapters::sink::traits::ManifestSink;
use crate::domain::result::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Sink that captures written payloads in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    writes: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemorySink {
    /// Creates an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the payload written at a location, if any
    pub fn payload(&self, location: &str) -> Option<Vec<u8>> {
        self.writes
            .lock()
            .expect("sink mutex poisoned")
            .get(location)
            .cloned()
    }

    /// Number of writes captured
    pub fn len(&self) -> usize {
        self.writes.lock().expect("sink mutex poisoned").len()
    }

    /// Whether nothing was written
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ManifestSink for MemorySink {
    async fn put(&self, payload: &[u8], location: &str) -> Result<()> {
        self.writes
            .lock()
            .expect("sink mutex poisoned")
            .insert(location.to_string(), payload.to_vec());
        Ok(())
    }
}
