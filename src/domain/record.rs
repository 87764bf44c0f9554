//! File record and group models
//!
//! A `FileRecord` is one indexed object in the packaging lookup store. Records
//! are produced upstream by the ingestion crawl and are read-only here: the
//! planning core only classifies, groups and maps them.

use crate::domain::ids::{InstrumentRunId, PortalRunId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Derived data-type classification of a file record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DataType {
    /// Raw per-run sequencing output, keyed by instrument run ID
    Primary,
    /// Downstream workflow output, keyed by portal run ID
    Secondary,
}

/// One indexed file object belonging to a packaging job
///
/// Field names mirror the lookup-store wire shape (camelCase JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Source bucket the object lives in
    pub bucket: String,

    /// Full source object key
    pub key: String,

    /// Path relative to the package root, e.g.
    /// `fastq/240101_A01052_0001_BH5LJVDSX7/Sample1/a.fastq.gz`
    pub relative_path: String,

    /// Ingestion identifier assigned by the crawl
    pub ingest_id: Uuid,

    /// Object size in bytes, when the crawl recorded it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// Last ingestion event time, when the crawl recorded it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_time: Option<DateTime<Utc>>,
}

impl FileRecord {
    /// Source object URI, `s3://{bucket}/{key}`
    pub fn source_uri(&self) -> String {
        format!("s3://{}/{}", self.bucket, self.key)
    }

    /// Parent directory of the relative path, without a trailing slash
    ///
    /// Returns an empty string for a bare file name.
    pub fn relative_parent(&self) -> &str {
        match self.relative_path.rfind('/') {
            Some(idx) => &self.relative_path[..idx],
            None => "",
        }
    }
}

/// Grouping key of an addressable group
///
/// Exactly one of the two run identifiers; a record that yields neither is
/// unclassified and belongs to no group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKey {
    /// Primary data group, keyed by instrument run ID
    Primary(InstrumentRunId),
    /// Secondary data group, keyed by portal run ID
    Secondary(PortalRunId),
}

impl GroupKey {
    /// The data type this key addresses
    pub fn data_type(&self) -> DataType {
        match self {
            GroupKey::Primary(_) => DataType::Primary,
            GroupKey::Secondary(_) => DataType::Secondary,
        }
    }

    /// The key value as a string slice
    pub fn as_str(&self) -> &str {
        match self {
            GroupKey::Primary(id) => id.as_str(),
            GroupKey::Secondary(id) => id.as_str(),
        }
    }

    /// Destination folder template for this group, without a trailing slash
    ///
    /// `fastq/{instrumentRunId}` for primary groups,
    /// `secondary-analysis/{portalRunId}` for secondary groups.
    pub fn destination_folder(&self) -> String {
        match self {
            GroupKey::Primary(id) => format!("fastq/{id}"),
            GroupKey::Secondary(id) => format!("secondary-analysis/{id}"),
        }
    }
}

impl std::fmt::Display for GroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One addressable group of classified records
///
/// Ephemeral: computed fresh per invocation from the immutable record set and
/// discarded once the manifest is produced. Member records are sorted by
/// source key so repeated builds of the same group are byte-identical.
#[derive(Debug, Clone)]
pub struct Group {
    /// The grouping key
    pub key: GroupKey,

    /// Member records, sorted by source key ascending
    pub records: Vec<FileRecord>,
}

impl Group {
    /// Creates a group, sorting the member records by source key
    pub fn new(key: GroupKey, mut records: Vec<FileRecord>) -> Self {
        records.sort_by(|a, b| a.key.cmp(&b.key));
        Self { key, records }
    }

    /// Number of member records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the group has no members
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
