//! Object-store folder manifest builder
//!
//! Maps every record of a group to a destination folder derived from the
//! group key: `fastq/{instrumentRunId}/` for primary groups,
//! `secondary-analysis/{portalRunId}/` for secondary groups, joined under the
//! caller's destination base path. Each row's relative folder key is the part
//! of the record's parent path below the group-key segment, so internal
//! subdirectory structure is preserved.

use crate::domain::destination::DestinationUri;
use crate::domain::manifest::{CopyRow, FolderManifest};
use crate::domain::record::{FileRecord, Group, GroupKey};
use crate::domain::result::Result;

/// Builds object-store folder manifests
#[derive(Debug, Clone, Copy, Default)]
pub struct FolderManifestBuilder;

impl FolderManifestBuilder {
    /// Creates a builder
    pub fn new() -> Self {
        Self
    }

    /// Builds the folder manifest for one group
    ///
    /// The destination base must already be validated against the object
    /// store scheme. Rows inherit the group's source-key ordering, so an
    /// unchanged group always yields a byte-identical manifest.
    pub fn build(&self, group: &Group, destination: &DestinationUri) -> Result<FolderManifest> {
        let folder = group.key.destination_folder();

        let rows = group
            .records
            .iter()
            .map(|record| CopyRow {
                source_bucket: record.bucket.clone(),
                source_key: record.key.clone(),
                destination_relative_folder_key: relative_folder_key(record, &group.key),
            })
            .collect();

        Ok(FolderManifest {
            destination_bucket: destination.host().to_string(),
            destination_folder_key: destination.folder_key(&folder),
            rows,
        })
    }
}

/// The record's parent path below the group-key segment, empty for records
/// sitting directly in the group folder, otherwise ending with one `/`
///
/// Secondary layouts may nest the portal run folder below intermediate
/// directories (`secondary-analysis/wts/{portalRunId}/...`); stripping at the
/// key segment rather than at a literal prefix handles both layouts.
fn relative_folder_key(record: &FileRecord, key: &GroupKey) -> String {
    let parent = record.relative_parent();
    let mut below_key = None;

    let mut offset = 0usize;
    for segment in parent.split('/') {
        let end = offset + segment.len();
        if segment == key.as_str() {
            below_key = Some(&parent[(end + 1).min(parent.len())..]);
            break;
        }
        offset = end + 1;
    }

    match below_key {
        Some(rest) if !rest.is_empty() => format!("{rest}/"),
        _ => String::new(),
    }
}
