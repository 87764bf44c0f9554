//! In-memory record store
//!
//! Deterministic stand-in for the HTTP gateway, used by tests and dry
//! planning runs. Pages over an ordered record list with offset-based
//! continuation tokens.

use crate::adapters::store::traits::{RecordPage, RecordStore};
use crate::domain::ids::JobId;
use crate::domain::record::FileRecord;
use crate::domain::result::Result;
use crate::domain::token::PageToken;
use crate::domain::{PorterError, StoreError};
use async_trait::async_trait;
use std::collections::HashMap;

/// In-memory lookup store keyed by `{jobId}__{context}`
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: HashMap<String, Vec<FileRecord>>,
}

impl MemoryRecordStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with records for a job and context
    pub fn with_records(
        mut self,
        job_id: &JobId,
        context: &str,
        records: Vec<FileRecord>,
    ) -> Self {
        self.records.insert(job_id.context_key(context), records);
        self
    }

    fn records_for(&self, job_id: &JobId, context: &str) -> &[FileRecord] {
        self.records
            .get(&job_id.context_key(context))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn query(&self, job_id: &JobId, context: &str) -> Result<Vec<FileRecord>> {
        Ok(self.records_for(job_id, context).to_vec())
    }

    async fn query_page(
        &self,
        job_id: &JobId,
        context: &str,
        token: Option<&PageToken>,
        chunk_size: usize,
    ) -> Result<RecordPage> {
        if chunk_size == 0 {
            return Err(PorterError::validation("chunkSize", "must be positive"));
        }

        let records = self.records_for(job_id, context);
        let offset = match token {
            Some(token) => token.as_str().parse::<usize>().map_err(|_| {
                PorterError::Store(StoreError::InvalidResponse(format!(
                    "unparseable continuation token '{token}'"
                )))
            })?,
            None => 0,
        };

        let end = (offset + chunk_size).min(records.len());
        let next_token = if end < records.len() {
            Some(PageToken::new(end.to_string()))
        } else {
            None
        };

        Ok(RecordPage {
            records: records[offset.min(records.len())..end].to_vec(),
            next_token,
        })
    }
}
