//! External prefix manifest builder
//!
//! The CMS-side copy API takes one destination prefix and a list of source
//! object URIs, so this variant sub-groups a group's records by their exact
//! parent directory: one [`PrefixMapping`] per distinct parent, the parent
//! path reproduced verbatim under the destination base. The destination
//! scheme is the CMS's own (`icav2` by default), distinct from the object
//! store's.

use crate::domain::destination::DestinationUri;
use crate::domain::manifest::{PrefixManifest, PrefixMapping};
use crate::domain::record::Group;
use crate::domain::result::Result;
use std::collections::BTreeMap;

/// Builds external prefix manifests
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixManifestBuilder;

impl PrefixManifestBuilder {
    /// Creates a builder
    pub fn new() -> Self {
        Self
    }

    /// Builds the prefix manifest for one group
    ///
    /// The destination base must already be validated against the external
    /// scheme. Mappings are ordered by parent path and source URIs by object
    /// key, so an unchanged group always yields an identical manifest.
    pub fn build(&self, group: &Group, destination: &DestinationUri) -> Result<PrefixManifest> {
        // Sub-group by exact parent directory; BTreeMap fixes the mapping
        // order.
        let mut by_parent: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for record in &group.records {
            by_parent
                .entry(record.relative_parent().to_string())
                .or_default()
                .push(record.source_uri());
        }

        let mappings = by_parent
            .into_iter()
            .map(|(parent, mut source_uri_list)| {
                source_uri_list.sort();
                PrefixMapping {
                    destination_uri: destination.folder_uri(&parent),
                    source_uri_list,
                }
            })
            .collect();

        Ok(PrefixManifest { mappings })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classify::PathClassifier;
    use crate::core::group::GroupIndexer;
    use crate::domain::record::FileRecord;
    use uuid::Uuid;

    fn record(relative_path: &str) -> FileRecord {
        FileRecord {
            bucket: "src-bucket".to_string(),
            key: format!("pkg/{relative_path}"),
            relative_path: relative_path.to_string(),
            ingest_id: Uuid::new_v4(),
            size: None,
            event_time: None,
        }
    }

    fn single_group(records: Vec<FileRecord>) -> Group {
        let indexer = GroupIndexer::from_records(&PathClassifier::new(), records);
        assert_eq!(indexer.count(), 1);
        indexer.group_at(0).unwrap()
    }

    #[test]
    fn test_one_mapping_per_distinct_parent() {
        let group = single_group(vec![
            record("secondary-analysis/wts/20240101abcdef12/out.bam"),
            record("secondary-analysis/wts/20240101abcdef12/out.bam.bai"),
            record("secondary-analysis/wts/20240101abcdef12/qc/metrics.json"),
        ]);
        let destination = DestinationUri::parse("icav2://proj/share/", "icav2").unwrap();

        let manifest = PrefixManifestBuilder::new().build(&group, &destination).unwrap();
        assert_eq!(manifest.mappings.len(), 2);

        assert_eq!(
            manifest.mappings[0].destination_uri,
            "icav2://proj/share/secondary-analysis/wts/20240101abcdef12/"
        );
        assert_eq!(manifest.mappings[0].source_uri_list.len(), 2);

        assert_eq!(
            manifest.mappings[1].destination_uri,
            "icav2://proj/share/secondary-analysis/wts/20240101abcdef12/qc/"
        );
        assert_eq!(
            manifest.mappings[1].source_uri_list,
            vec!["s3://src-bucket/pkg/secondary-analysis/wts/20240101abcdef12/qc/metrics.json"]
        );
    }

    #[test]
    fn test_source_uris_use_object_store_scheme() {
        let group = single_group(vec![record("fastq/240101_A1/Sample1/a.fastq.gz")]);
        let destination = DestinationUri::parse("icav2://proj/share/", "icav2").unwrap();

        let manifest = PrefixManifestBuilder::new().build(&group, &destination).unwrap();
        assert_eq!(
            manifest.mappings[0].source_uri_list,
            vec!["s3://src-bucket/pkg/fastq/240101_A1/Sample1/a.fastq.gz"]
        );
    }

    #[test]
    fn test_mappings_and_sources_are_sorted() {
        let group = single_group(vec![
            record("fastq/240101_A1/SampleB/z.fastq.gz"),
            record("fastq/240101_A1/SampleA/b.fastq.gz"),
            record("fastq/240101_A1/SampleA/a.fastq.gz"),
        ]);
        let destination = DestinationUri::parse("icav2://proj/share/", "icav2").unwrap();

        let manifest = PrefixManifestBuilder::new().build(&group, &destination).unwrap();
        let parents: Vec<&str> = manifest
            .mappings
            .iter()
            .map(|m| m.destination_uri.as_str())
            .collect();
        let mut sorted = parents.clone();
        sorted.sort();
        assert_eq!(parents, sorted);

        for mapping in &manifest.mappings {
            let mut uris = mapping.source_uri_list.clone();
            uris.sort();
            assert_eq!(mapping.source_uri_list, uris);
        }
    }

    #[test]
    fn test_rebuild_is_identical() {
        let group = single_group(vec![
            record("fastq/240101_A1/Sample1/a.fastq.gz"),
            record("fastq/240101_A1/Sample2/b.fastq.gz"),
        ]);
        let destination = DestinationUri::parse("icav2://proj/share/", "icav2").unwrap();
        let builder = PrefixManifestBuilder::new();

        let first = builder.build(&group, &destination).unwrap();
        let second = builder.build(&group, &destination).unwrap();
        assert_eq!(first, second);
    }
}
