//! Relocation planner - entry point of the planning core
//!
//! One planner invocation is one unit of work: either a count of the
//! addressable groups (so an orchestrator knows its fan-out width) or the
//! manifest of a single group. Planning is a pure function of the immutable
//! record set, so index-mode invocations can run concurrently and re-run
//! idempotently; the only shared resource is the read-only record store.

use crate::adapters::sink::ManifestSink;
use crate::adapters::store::RecordStore;
use crate::config::schema::{ManifestVariant, PushConfig};
use crate::core::classify::PathClassifier;
use crate::core::group::GroupIndexer;
use crate::core::manifest::{FolderManifestBuilder, PrefixManifestBuilder};
use crate::core::plan::request::{PlanMode, PlanRequest};
use crate::domain::destination::DestinationUri;
use crate::domain::manifest::{FolderManifest, PrefixManifest};
use crate::domain::result::Result;
use crate::domain::PorterError;
use serde::Serialize;
use std::sync::Arc;

/// Result of one planning invocation
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PlanOutcome {
    /// Count mode: the fan-out width
    #[serde(rename_all = "camelCase")]
    Count {
        /// Number of addressable groups
        list_count: usize,
    },
    /// Index mode, folder variant
    Folder(FolderManifest),
    /// Index mode, prefix variant
    Prefix(PrefixManifest),
}

/// Plans data relocations for packaging jobs
pub struct RelocationPlanner {
    store: Arc<dyn RecordStore>,
    classifier: PathClassifier,
    push: PushConfig,
    context: String,
}

impl RelocationPlanner {
    /// Creates a planner over a record store
    pub fn new(store: Arc<dyn RecordStore>, push: PushConfig, context: impl Into<String>) -> Self {
        Self {
            store,
            classifier: PathClassifier::new(),
            push,
            context: context.into(),
        }
    }

    /// Executes one planning invocation
    ///
    /// Count mode reports the fan-out width. Index mode builds the manifest
    /// of the addressed group under the configured variant. All validation
    /// happens before the store is queried, and fatal errors abort with no
    /// partial output.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for a bad request or destination,
    /// `IndexOutOfRange` for an index past the fan-out width, and `Store`
    /// when the record query fails.
    pub async fn plan(&self, request: &PlanRequest) -> Result<PlanOutcome> {
        let (job_id, mode) = request.validate()?;
        let destination =
            DestinationUri::parse(&request.destination, self.push.expected_scheme())?;

        tracing::info!(
            job_id = %job_id,
            destination = %destination,
            mode = ?mode,
            variant = ?self.push.manifest_variant,
            "Planning relocation"
        );

        let records = self.store.query(&job_id, &self.context).await?;
        let indexer = GroupIndexer::from_records(&self.classifier, records);

        match mode {
            PlanMode::Count => Ok(PlanOutcome::Count {
                list_count: indexer.count(),
            }),
            PlanMode::Index(index) => {
                let group = indexer.group_at(index)?;
                tracing::debug!(
                    group_key = %group.key,
                    records = group.len(),
                    "Building manifest for group"
                );

                match self.push.manifest_variant {
                    ManifestVariant::Folder => {
                        let manifest =
                            FolderManifestBuilder::new().build(&group, &destination)?;
                        Ok(PlanOutcome::Folder(manifest))
                    }
                    ManifestVariant::Prefix => {
                        let manifest =
                            PrefixManifestBuilder::new().build(&group, &destination)?;
                        Ok(PlanOutcome::Prefix(manifest))
                    }
                }
            }
        }
    }

    /// Persists a manifest outcome through a sink as line-delimited JSON
    ///
    /// An optional, explicit step: planning never writes anywhere on its
    /// own. Only index-mode outcomes carry a manifest payload.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for a count outcome and `Sink` when the write
    /// fails.
    pub async fn persist(
        &self,
        outcome: &PlanOutcome,
        sink: &dyn ManifestSink,
        location: &str,
    ) -> Result<()> {
        let payload = match outcome {
            PlanOutcome::Count { .. } => {
                return Err(PorterError::validation(
                    "mode",
                    "count outcome has no manifest payload to persist",
                ))
            }
            PlanOutcome::Folder(manifest) => manifest.to_jsonl()?,
            PlanOutcome::Prefix(manifest) => manifest.to_jsonl()?,
        };

        sink.put(&payload, location).await
    }
}
