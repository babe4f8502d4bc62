// Ordered accumulation of feature records.
//
// Records are pushed in stance order and never reordered: row i of the
// matrix belongs to row i of the stances file. The classifier seam in
// `classifier::traits` consumes this surface.

use serde::{Deserialize, Serialize};

use crate::dataset::models::FeatureRecord;

/// Ordered collection of one feature record per stance example.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureStore {
    records: Vec<FeatureRecord>,
}

impl FeatureStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    /// Append the record for the next stance example.
    pub fn push(&mut self, record: FeatureRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[FeatureRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The records as fixed-shape rows, ready for a numeric matrix.
    pub fn matrix(&self) -> Vec<[f64; 3]> {
        self.records.iter().map(FeatureRecord::as_array).collect()
    }

    pub fn into_records(self) -> Vec<FeatureRecord> {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(seed: f64) -> FeatureRecord {
        FeatureRecord {
            ngram_overlap: seed,
            avg_sentence_similarity: seed + 0.25,
            max_sentence_similarity: seed + 0.5,
        }
    }

    #[test]
    fn push_preserves_insertion_order() {
        let mut store = FeatureStore::new();
        store.push(record(0.0));
        store.push(record(0.5));
        store.push(record(0.25));

        let overlaps: Vec<f64> = store.records().iter().map(|r| r.ngram_overlap).collect();
        assert_eq!(overlaps, vec![0.0, 0.5, 0.25]);
    }

    #[test]
    fn matrix_rows_follow_record_field_order() {
        let mut store = FeatureStore::new();
        store.push(record(0.25));

        let matrix = store.matrix();
        assert_eq!(matrix.len(), 1);
        assert_eq!(matrix[0], [0.25, 0.5, 0.75]);
    }
}
