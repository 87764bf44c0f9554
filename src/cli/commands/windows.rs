//! Windows command implementation
//!
//! Enumerates the pagination windows of a job's indexed record set and
//! prints the continuation-token sequence an orchestrator feeds to its
//! parallel chunk workers. The first element is always null, the start of
//! sequence.

use crate::adapters::store::HttpRecordStore;
use crate::config::load_config;
use crate::core::paginate::PaginationKeyEnumerator;
use crate::domain::ids::JobId;
use crate::domain::PorterError;
use clap::Args;
use std::sync::Arc;

/// Arguments for the windows command
#[derive(Args, Debug)]
pub struct WindowsArgs {
    /// Packaging job to enumerate
    #[arg(long, value_name = "JOB_ID")]
    pub job_id: String,

    /// Window size in records (defaults to push.chunk_size from config)
    #[arg(long, value_name = "N")]
    pub chunk_size: Option<usize>,

    /// Index context to walk (defaults to store.context from config)
    #[arg(long, value_name = "CONTEXT")]
    pub context: Option<String>,
}

impl WindowsArgs {
    /// Execute the windows command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = load_config(config_path)?;

        let chunk_size = self.chunk_size.unwrap_or(config.push.chunk_size);
        let context = self
            .context
            .clone()
            .unwrap_or_else(|| config.store.context.clone());

        let job_id = match JobId::new(self.job_id.clone()) {
            Ok(job_id) => job_id,
            Err(e) => {
                eprintln!("Invalid job ID: {e}");
                return Ok(2);
            }
        };

        let store = Arc::new(HttpRecordStore::new(config.store)?);
        let enumerator = PaginationKeyEnumerator::new(store);

        let tokens = match enumerator.enumerate(&job_id, &context, chunk_size).await {
            Ok(tokens) => tokens,
            Err(e @ PorterError::Validation { .. }) => {
                eprintln!("{e}");
                return Ok(2);
            }
            Err(e) => {
                tracing::error!(error = %e, "Window enumeration failed");
                eprintln!("Window enumeration failed: {e}");
                return Ok(1);
            }
        };

        let output = serde_json::json!({ "startKeyList": tokens });
        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(0)
    }
}
