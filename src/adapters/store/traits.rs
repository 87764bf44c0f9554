//! Record store abstraction
//!
//! The planning core never talks to the lookup store directly; it goes
//! through this trait so tests and dry runs can substitute an in-memory
//! store for the HTTP gateway.

use crate::domain::ids::JobId;
use crate::domain::record::FileRecord;
use crate::domain::result::Result;
use crate::domain::token::PageToken;
use async_trait::async_trait;

/// One window of a paged query
#[derive(Debug, Clone)]
pub struct RecordPage {
    /// Records in this window, in index order
    pub records: Vec<FileRecord>,

    /// Continuation token for the next window; absent when this window is
    /// the last one
    pub next_token: Option<PageToken>,
}

/// Read-only gateway to the packaging lookup store
///
/// The store is the only shared resource of the planning core and is never
/// written through this interface. Failures propagate as fatal; retry and
/// backoff policy belongs to the orchestrator.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetches every record for a job and context
    ///
    /// # Errors
    ///
    /// Returns a `Store` error if any underlying page query fails.
    async fn query(&self, job_id: &JobId, context: &str) -> Result<Vec<FileRecord>>;

    /// Fetches one window of records for a job and context
    ///
    /// # Arguments
    ///
    /// * `token` - Continuation token from the previous window, or `None`
    ///   for the first window
    /// * `chunk_size` - Maximum number of records in the window
    ///
    /// # Errors
    ///
    /// Returns a `Store` error if the query fails.
    async fn query_page(
        &self,
        job_id: &JobId,
        context: &str,
        token: Option<&PageToken>,
        chunk_size: usize,
    ) -> Result<RecordPage>;
}
