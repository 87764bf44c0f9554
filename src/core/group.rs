//! Deterministic group indexing
//!
//! The planner fans work out by integer index, so the set of groups derived
//! from a record set must enumerate identically on every invocation. The
//! indexer keeps primary and secondary groups in two lexicographically sorted
//! key ranges and concatenates them: indices `[0, P)` address primary groups,
//! `[P, P+S)` address secondary groups.

use crate::core::classify::PathClassifier;
use crate::domain::ids::{InstrumentRunId, PortalRunId};
use crate::domain::record::{FileRecord, Group, GroupKey};
use crate::domain::result::Result;
use crate::domain::PorterError;
use std::collections::BTreeMap;

/// Addressable, deterministic enumeration of classified record groups
#[derive(Debug, Default)]
pub struct GroupIndexer {
    primary: BTreeMap<InstrumentRunId, Vec<FileRecord>>,
    secondary: BTreeMap<PortalRunId, Vec<FileRecord>>,
    dropped: usize,
}

impl GroupIndexer {
    /// Builds the index from a record set in one linear classification pass
    ///
    /// Unclassifiable records are dropped with a warning; they appear in no
    /// group and never fail the build.
    pub fn from_records(classifier: &PathClassifier, records: Vec<FileRecord>) -> Self {
        let mut indexer = Self::default();

        for record in records {
            match classifier.classify_record(&record) {
                Ok(classification) => match classification.key {
                    GroupKey::Primary(id) => {
                        indexer.primary.entry(id).or_default().push(record);
                    }
                    GroupKey::Secondary(id) => {
                        indexer.secondary.entry(id).or_default().push(record);
                    }
                },
                Err(e) => {
                    tracing::warn!(
                        relative_path = %record.relative_path,
                        error = %e,
                        "Dropping unclassifiable record"
                    );
                    indexer.dropped += 1;
                }
            }
        }

        tracing::debug!(
            primary_groups = indexer.primary.len(),
            secondary_groups = indexer.secondary.len(),
            dropped = indexer.dropped,
            "Built group index"
        );

        indexer
    }

    /// Total number of addressable groups
    pub fn count(&self) -> usize {
        self.primary.len() + self.secondary.len()
    }

    /// Number of records dropped as unclassifiable
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// The group at an addressable index
    ///
    /// Primary groups occupy the leading indices in sorted key order,
    /// secondary groups follow in sorted key order. For an unchanged record
    /// set the same index always yields the identical group.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` for `index >= count()`; that is a caller
    /// contract violation, not a planning failure.
    pub fn group_at(&self, index: usize) -> Result<Group> {
        if index >= self.count() {
            return Err(PorterError::IndexOutOfRange {
                index,
                count: self.count(),
            });
        }

        if index < self.primary.len() {
            let (id, records) = self
                .primary
                .iter()
                .nth(index)
                .expect("index checked against primary range");
            Ok(Group::new(
                GroupKey::Primary(id.clone()),
                records.clone(),
            ))
        } else {
            let (id, records) = self
                .secondary
                .iter()
                .nth(index - self.primary.len())
                .expect("index checked against secondary range");
            Ok(Group::new(
                GroupKey::Secondary(id.clone()),
                records.clone(),
            ))
        }
    }

    /// All group keys in addressable order
    pub fn keys(&self) -> Vec<GroupKey> {
        self.primary
            .keys()
            .cloned()
            .map(GroupKey::Primary)
            .chain(self.secondary.keys().cloned().map(GroupKey::Secondary))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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

    fn sample_records() -> Vec<FileRecord> {
        vec![
            record("fastq/240202_B2/SampleX/x.fastq.gz"),
            record("fastq/240101_A1/Sample1/a.fastq.gz"),
            record("fastq/240101_A1/Sample2/b.fastq.gz"),
            record("secondary-analysis/wts/20240303cafe0123/out.bam"),
            record("secondary-analysis/wgs/20240101abcdef12/out.vcf.gz"),
            record("logs/run.log"),
        ]
    }

    #[test]
    fn test_count_sums_primary_and_secondary_groups() {
        let indexer = GroupIndexer::from_records(&PathClassifier::new(), sample_records());
        // 2 instrument runs + 2 portal runs; the log file is dropped.
        assert_eq!(indexer.count(), 4);
        assert_eq!(indexer.dropped(), 1);
    }

    #[test]
    fn test_primary_groups_precede_secondary_in_sorted_order() {
        let indexer = GroupIndexer::from_records(&PathClassifier::new(), sample_records());
        let keys: Vec<String> = indexer.keys().iter().map(|k| k.to_string()).collect();
        assert_eq!(
            keys,
            vec![
                "240101_A1",
                "240202_B2",
                "20240101abcdef12",
                "20240303cafe0123",
            ]
        );
    }

    #[test]
    fn test_group_at_partitions_classified_records_exactly() {
        let records = sample_records();
        let classified = records.len() - 1;
        let indexer = GroupIndexer::from_records(&PathClassifier::new(), records);

        let mut seen = Vec::new();
        for i in 0..indexer.count() {
            let group = indexer.group_at(i).unwrap();
            assert!(!group.is_empty());
            for r in &group.records {
                seen.push(r.relative_path.clone());
            }
        }
        seen.sort();
        seen.dedup();
        // Every classified record appears in exactly one group.
        assert_eq!(seen.len(), classified);
        assert!(!seen.contains(&"logs/run.log".to_string()));
    }

    #[test]
    fn test_group_at_is_deterministic() {
        let indexer = GroupIndexer::from_records(&PathClassifier::new(), sample_records());
        for i in 0..indexer.count() {
            let first = indexer.group_at(i).unwrap();
            let second = indexer.group_at(i).unwrap();
            assert_eq!(first.key, second.key);
            assert_eq!(first.records, second.records);
        }
    }

    #[test]
    fn test_group_at_out_of_range_is_contract_violation() {
        let indexer = GroupIndexer::from_records(&PathClassifier::new(), sample_records());
        let err = indexer.group_at(indexer.count()).unwrap_err();
        assert!(matches!(
            err,
            PorterError::IndexOutOfRange { index: 4, count: 4 }
        ));
    }

    #[test]
    fn test_empty_record_set_has_no_groups() {
        let indexer = GroupIndexer::from_records(&PathClassifier::new(), vec![]);
        assert_eq!(indexer.count(), 0);
        assert!(indexer.group_at(0).is_err());
    }

    #[test]
    fn test_group_records_sorted_by_source_key() {
        let indexer = GroupIndexer::from_records(&PathClassifier::new(), sample_records());
        let group = indexer.group_at(0).unwrap();
        let keys: Vec<&str> = group.records.iter().map(|r| r.key.as_str()).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }
}
