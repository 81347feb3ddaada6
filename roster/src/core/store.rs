//! Immutable raw record collection.

use std::collections::HashSet;
use std::sync::Arc;

use crate::core::types::TextField;
use crate::record::Record;

/// Holds the raw records for a session.
///
/// Pipeline stages only read from the store. The only mutation is
/// [`RecordStore::load`], which replaces the whole collection.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Arc<Record>>,
}

impl RecordStore {
    pub fn new(records: Vec<Record>) -> Self {
        let mut store = Self::default();
        store.load(records);
        store
    }

    /// Replace the collection wholesale. No merge with earlier loads.
    pub fn load(&mut self, records: Vec<Record>) {
        self.records = records.into_iter().map(Arc::new).collect();
    }

    pub fn records(&self) -> &[Arc<Record>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Unique values of `field` in first-seen order. Missing values are skipped.
    pub fn distinct_values(&self, field: TextField) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut values = Vec::new();
        for record in &self.records {
            if let Some(value) = field.get(record) {
                if seen.insert(value) {
                    values.push(value.to_string());
                }
            }
        }
        values
    }
}
