//! Pagination window enumeration
//!
//! A fan-out orchestrator processes a large indexed result set as parallel
//! chunks, one chunk per pagination window. Before launching the chunks it
//! needs the continuation token that opens each window. This enumerator walks
//! the store's paged query once and collects those tokens: element 0 is the
//! absent token (start of sequence), element N is the token that opens window
//! N. The sequence length equals the number of windows, never the item count.
//!
//! Walk states: INIT (no query yet) -> FETCHING while the store keeps
//! returning a token -> DONE when the token is absent. Store failures abort
//! the walk; retries belong to the orchestrator.

use crate::adapters::store::RecordStore;
use crate::domain::ids::JobId;
use crate::domain::result::Result;
use crate::domain::token::PageToken;
use crate::domain::PorterError;
use std::sync::Arc;

/// Enumerates the pagination windows of a keyed index query
pub struct PaginationKeyEnumerator {
    store: Arc<dyn RecordStore>,
}

impl PaginationKeyEnumerator {
    /// Creates an enumerator over a record store
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Collects the ordered continuation-token sequence for a query
    ///
    /// # Arguments
    ///
    /// * `job_id` - Packaging job to enumerate
    /// * `context` - Index context (e.g. `file`)
    /// * `chunk_size` - Window size in records
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error for a zero chunk size and propagates
    /// store failures unchanged.
    pub async fn enumerate(
        &self,
        job_id: &JobId,
        context: &str,
        chunk_size: usize,
    ) -> Result<Vec<Option<PageToken>>> {
        if chunk_size == 0 {
            return Err(PorterError::validation("chunkSize", "must be positive"));
        }

        // The absent token is the start-of-sequence sentinel, so the fan-out
        // map has one entry per window.
        let mut tokens: Vec<Option<PageToken>> = vec![None];
        let mut current: Option<PageToken> = None;

        loop {
            let page = self
                .store
                .query_page(job_id, context, current.as_ref(), chunk_size)
                .await?;

            match page.next_token {
                Some(next) => {
                    tokens.push(Some(next.clone()));
                    current = Some(next);
                }
                None => break,
            }
        }

        tracing::info!(
            job_id = %job_id,
            context = context,
            chunk_size = chunk_size,
            windows = tokens.len(),
            "Enumerated pagination windows"
        );

        Ok(tokens)
    }
}
