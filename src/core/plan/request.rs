//! Typed relocation-planning request
//!
//! The request enumerates every field the entry point accepts, with explicit
//! constraints: a non-empty job ID, a destination base URI, and exactly one
//! of the two modes. Validation happens once, up front, and yields the typed
//! values the planner works with.

use crate::domain::ids::JobId;
use crate::domain::result::Result;
use crate::domain::PorterError;
use serde::{Deserialize, Serialize};

/// Mode of one planning invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanMode {
    /// Report the fan-out width (number of addressable groups) only
    Count,
    /// Build the manifest for one addressable group
    Index(usize),
}

/// Raw planning request, as it arrives from the CLI or an orchestrator event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    /// Packaging job to plan for
    pub job_id: String,

    /// Destination base URI (scheme depends on the configured variant)
    pub destination: String,

    /// Count mode: report fan-out width instead of building a manifest
    #[serde(default)]
    pub count_only: bool,

    /// Index mode: which addressable group to build
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination_index: Option<usize>,
}

impl PlanRequest {
    /// Count-mode request
    pub fn count(job_id: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            destination: destination.into(),
            count_only: true,
            pagination_index: None,
        }
    }

    /// Index-mode request
    pub fn index(
        job_id: impl Into<String>,
        destination: impl Into<String>,
        index: usize,
    ) -> Self {
        Self {
            job_id: job_id.into(),
            destination: destination.into(),
            count_only: false,
            pagination_index: Some(index),
        }
    }

    /// Validates the request, yielding the typed job ID and mode
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error naming `jobId` when the job ID is empty
    /// and `mode` when both or neither of count/index are supplied.
    pub fn validate(&self) -> Result<(JobId, PlanMode)> {
        let job_id = JobId::new(self.job_id.clone())
            .map_err(|e| PorterError::validation("jobId", e))?;

        let mode = match (self.count_only, self.pagination_index) {
            (true, None) => PlanMode::Count,
            (false, Some(index)) => PlanMode::Index(index),
            (true, Some(_)) => {
                return Err(PorterError::validation(
                    "mode",
                    "countOnly and paginationIndex are mutually exclusive",
                ))
            }
            (false, None) => {
                return Err(PorterError::validation(
                    "mode",
                    "either countOnly or paginationIndex is required",
                ))
            }
        };

        Ok((job_id, mode))
    }
}
