//! Relative-path classification
//!
//! Every file record carries a path relative to the package root. The path
//! convention encodes which dataset the record belongs to:
//!
//! - `fastq/{instrumentRunId}/...` - primary data, keyed by the instrument run
//! - `secondary-analysis/.../{portalRunId}/...` - secondary data, keyed by the
//!   first directory segment that is a portal run ID token
//!
//! Anything else is unclassified and excluded from every group. Group keys
//! are derived from the *parent* directory of the path, so a file name that
//! happens to look like a portal run ID never classifies a record.

use crate::domain::errors::ClassificationError;
use crate::domain::ids::{InstrumentRunId, PortalRunId};
use crate::domain::record::{DataType, FileRecord, GroupKey};

/// Path prefix of primary data
pub const PRIMARY_PREFIX: &str = "fastq/";

/// Path prefix of secondary-analysis data
pub const SECONDARY_PREFIX: &str = "secondary-analysis/";

/// Result of classifying one relative path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Derived data type
    pub data_type: DataType,

    /// Derived group key
    pub key: GroupKey,
}

/// Classifies relative paths into data types and group keys
///
/// Stateless; classification is a pure function of the path string.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathClassifier;

impl PathClassifier {
    /// Creates a classifier
    pub fn new() -> Self {
        Self
    }

    /// Classifies a record by its relative path
    ///
    /// # Errors
    ///
    /// Returns a `ClassificationError` when the path matches no known prefix,
    /// or matches a prefix but yields no group key. Callers treat these as
    /// non-fatal and drop the record from all groups.
    pub fn classify_record(
        &self,
        record: &FileRecord,
    ) -> Result<Classification, ClassificationError> {
        self.classify(&record.relative_path)
    }

    /// Classifies a relative path
    pub fn classify(&self, relative_path: &str) -> Result<Classification, ClassificationError> {
        if relative_path.starts_with(PRIMARY_PREFIX) {
            return self.classify_primary(relative_path);
        }
        if relative_path.starts_with(SECONDARY_PREFIX) {
            return self.classify_secondary(relative_path);
        }
        Err(ClassificationError::UnknownPrefix(relative_path.to_string()))
    }

    /// Primary data: the instrument run ID is the second segment of the
    /// parent path, `fastq/{instrumentRunId}/...`.
    fn classify_primary(
        &self,
        relative_path: &str,
    ) -> Result<Classification, ClassificationError> {
        let instrument_run_id = parent_segments(relative_path)
            .nth(1)
            .and_then(|segment| InstrumentRunId::new(segment).ok())
            .ok_or_else(|| {
                ClassificationError::MissingInstrumentRunId(relative_path.to_string())
            })?;

        Ok(Classification {
            data_type: DataType::Primary,
            key: GroupKey::Primary(instrument_run_id),
        })
    }

    /// Secondary data: the portal run ID is the first parent-path segment
    /// that fully matches the portal run ID token shape. Segments are tested
    /// individually; substrings never match.
    fn classify_secondary(
        &self,
        relative_path: &str,
    ) -> Result<Classification, ClassificationError> {
        let portal_run_id = parent_segments(relative_path)
            .find(|segment| PortalRunId::is_valid(segment))
            .and_then(|segment| PortalRunId::new(segment).ok())
            .ok_or_else(|| ClassificationError::MissingPortalRunId(relative_path.to_string()))?;

        Ok(Classification {
            data_type: DataType::Secondary,
            key: GroupKey::Secondary(portal_run_id),
        })
    }
}

/// Segments of the parent directory of a relative path (the file name itself
/// is never a grouping candidate)
fn parent_segments(relative_path: &str) -> impl Iterator<Item = &str> {
    let parent = match relative_path.rfind('/') {
        Some(idx) => &relative_path[..idx],
        None => "",
    };
    parent.split('/').filter(|s| !s.is_empty())
}
