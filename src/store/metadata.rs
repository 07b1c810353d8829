use std::collections::HashMap;

use crate::models::BookMetadata;

/// Book metadata keyed by exact title, in snapshot order
#[derive(Debug, Clone, Default)]
pub struct MetadataTable {
    records: Vec<BookMetadata>,
    by_title: HashMap<String, usize>,
}

impl MetadataTable {
    pub fn new(records: Vec<BookMetadata>) -> Self {
        let mut by_title = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            by_title.entry(record.title.clone()).or_insert(index);
        }

        Self { records, by_title }
    }

    /// First metadata row whose title equals `title`
    pub fn get(&self, title: &str) -> Option<&BookMetadata> {
        self.by_title.get(title).map(|&index| &self.records[index])
    }

    /// Joins a title onto its metadata, synthesizing an "Unknown" record on a miss
    pub fn enrich(&self, title: &str) -> BookMetadata {
        match self.get(title) {
            Some(record) => record.clone(),
            None => BookMetadata::unknown(title),
        }
    }

    pub fn records(&self) -> &[BookMetadata] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
