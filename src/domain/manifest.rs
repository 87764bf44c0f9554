//! Manifest payloads
//!
//! A manifest is the output of planning one addressable group: an ordered list
//! of source-to-destination mappings that a bulk copy operation can replay.
//! Row order is fixed (source key / parent path ascending) so re-planning an
//! unchanged group produces a byte-identical manifest.

use crate::domain::result::Result;
use serde::{Deserialize, Serialize};

/// One copy instruction of an object-store folder manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyRow {
    /// Source bucket
    pub source_bucket: String,

    /// Source object key
    pub source_key: String,

    /// Key of the object's parent folder relative to the destination folder;
    /// empty for objects sitting directly in the destination folder,
    /// otherwise ends with exactly one `/`
    pub destination_relative_folder_key: String,
}

/// Object-store folder manifest for one addressable group
///
/// Maps every member record of a group into `{destinationBucket}/
/// {destinationFolderKey}{destinationRelativeFolderKey}{fileName}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderManifest {
    /// Destination bucket
    pub destination_bucket: String,

    /// Destination folder key beneath the bucket, ending with `/`
    pub destination_folder_key: String,

    /// Copy rows, sorted by source key ascending
    pub rows: Vec<CopyRow>,
}

impl FolderManifest {
    /// Serializes the copy rows as line-delimited JSON
    pub fn to_jsonl(&self) -> Result<Vec<u8>> {
        rows_to_jsonl(&self.rows)
    }
}

/// One destination prefix of an external prefix manifest, paired with the
/// source URIs that land beneath it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrefixMapping {
    /// Destination URI, ending with `/`
    pub destination_uri: String,

    /// Source object URIs, sorted ascending
    pub source_uri_list: Vec<String>,
}

/// External prefix manifest for one addressable group
///
/// One mapping per distinct parent directory inside the group, parents sorted
/// ascending. The destination scheme may differ from the object store's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrefixManifest {
    /// Destination/source mappings, one per distinct parent directory
    pub mappings: Vec<PrefixMapping>,
}

impl PrefixManifest {
    /// Serializes the mappings as line-delimited JSON
    pub fn to_jsonl(&self) -> Result<Vec<u8>> {
        rows_to_jsonl(&self.mappings)
    }

    /// All source URIs across every mapping, in manifest order
    pub fn source_uris(&self) -> impl Iterator<Item = &str> {
        self.mappings
            .iter()
            .flat_map(|m| m.source_uri_list.iter().map(String::as_str))
    }
}

fn rows_to_jsonl<T: Serialize>(rows: &[T]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            out.push(b'\n');
        }
        serde_json::to_writer(&mut out, row)?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_row_wire_shape() {
        let row = CopyRow {
            source_bucket: "b".to_string(),
            source_key: "k".to_string(),
            destination_relative_folder_key: "Sample1/".to_string(),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["sourceBucket"], "b");
        assert_eq!(json["sourceKey"], "k");
        assert_eq!(json["destinationRelativeFolderKey"], "Sample1/");
    }

    #[test]
    fn test_folder_manifest_jsonl_one_row_per_line() {
        let manifest = FolderManifest {
            destination_bucket: "dest".to_string(),
            destination_folder_key: "push/fastq/run1/".to_string(),
            rows: vec![
                CopyRow {
                    source_bucket: "b".to_string(),
                    source_key: "a/1.gz".to_string(),
                    destination_relative_folder_key: String::new(),
                },
                CopyRow {
                    source_bucket: "b".to_string(),
                    source_key: "a/2.gz".to_string(),
                    destination_relative_folder_key: "Sample1/".to_string(),
                },
            ],
        };

        let jsonl = manifest.to_jsonl().unwrap();
        let text = String::from_utf8(jsonl).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let parsed: CopyRow = serde_json::from_str(line).unwrap();
            assert_eq!(parsed.source_bucket, "b");
        }
    }

    #[test]
    fn test_empty_manifest_jsonl_is_empty() {
        let manifest = PrefixManifest { mappings: vec![] };
        assert!(manifest.to_jsonl().unwrap().is_empty());
    }

    #[test]
    fn test_prefix_manifest_source_uris_flattened_in_order() {
        let manifest = PrefixManifest {
            mappings: vec![
                PrefixMapping {
                    destination_uri: "icav2://p/a/".to_string(),
                    source_uri_list: vec!["s3://b/1".to_string()],
                },
                PrefixMapping {
                    destination_uri: "icav2://p/b/".to_string(),
                    source_uri_list: vec!["s3://b/2".to_string(), "s3://b/3".to_string()],
                },
            ],
        };
        let uris: Vec<&str> = manifest.source_uris().collect();
        assert_eq!(uris, vec!["s3://b/1", "s3://b/2", "s3://b/3"]);
    }
}
