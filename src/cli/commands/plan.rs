//! Plan command implementation
//!
//! Builds either the fan-out count or one group's manifest for a packaging
//! job and prints the outcome as JSON. With `--write-manifest` the built
//! manifest is also persisted as line-delimited JSON under the given
//! directory.

use crate::adapters::sink::FileSink;
use crate::adapters::store::HttpRecordStore;
use crate::config::load_config;
use crate::core::plan::{PlanRequest, RelocationPlanner};
use crate::domain::PorterError;
use clap::Args;
use std::sync::Arc;

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Packaging job to plan for
    #[arg(long, value_name = "JOB_ID")]
    pub job_id: String,

    /// Destination base URI (s3:// for the folder variant, the configured
    /// CMS scheme for the prefix variant)
    #[arg(long, value_name = "URI")]
    pub destination: String,

    /// Report the number of addressable groups instead of building a manifest
    #[arg(long)]
    pub count: bool,

    /// Build the manifest for this addressable group index
    #[arg(long, value_name = "N")]
    pub index: Option<usize>,

    /// Also write the manifest as JSONL under this directory
    #[arg(long, value_name = "DIR")]
    pub write_manifest: Option<String>,
}

impl PlanArgs {
    /// Execute the plan command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = load_config(config_path)?;

        let context = config.store.context.clone();
        let store = Arc::new(HttpRecordStore::new(config.store)?);
        let planner = RelocationPlanner::new(store, config.push, context);

        let request = PlanRequest {
            job_id: self.job_id.clone(),
            destination: self.destination.clone(),
            count_only: self.count,
            pagination_index: self.index,
        };

        let outcome = match planner.plan(&request).await {
            Ok(outcome) => outcome,
            Err(e @ PorterError::Validation { .. })
            | Err(e @ PorterError::IndexOutOfRange { .. }) => {
                eprintln!("{e}");
                return Ok(2);
            }
            Err(e) => {
                tracing::error!(error = %e, "Planning failed");
                eprintln!("Planning failed: {e}");
                return Ok(1);
            }
        };

        if let Some(dir) = &self.write_manifest {
            let sink = FileSink::new(dir);
            let location = format!(
                "{}/{}.jsonl",
                self.job_id,
                self.index.unwrap_or_default()
            );
            planner.persist(&outcome, &sink, &location).await?;
        }

        println!("{}", serde_json::to_string_pretty(&outcome)?);
        Ok(0)
    }
}
