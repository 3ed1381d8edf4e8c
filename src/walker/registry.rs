use crate::generator::GenerateError;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A file that has been embedded (or validated, in a dry run)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Virtual path in the generated store (e.g., "/docs/hello.txt")
    pub virtual_path: String,
    /// Filesystem path the contents were read from
    pub source: PathBuf,
    /// Length in bytes
    pub size: u64,
    /// Hex Adler-32 of the contents; empty in a dry run
    pub version: String,
}

/// Every virtual path produced during one generation run.
///
/// Keys are unique across all mappings; registering a path twice is an
/// error regardless of the file contents.
#[derive(Debug, Default)]
pub struct ProcessedRegistry {
    records: BTreeMap<String, FileRecord>,
}

impl ProcessedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail if `virtual_path` is already taken
    pub fn ensure_vacant(&self, virtual_path: &str, source: &Path) -> Result<(), GenerateError> {
        if self.records.contains_key(virtual_path) {
            return Err(GenerateError::DuplicateTarget {
                target: virtual_path.to_string(),
                source_path: source.to_path_buf(),
            });
        }
        Ok(())
    }

    pub fn register(&mut self, record: FileRecord) -> Result<(), GenerateError> {
        self.ensure_vacant(&record.virtual_path, &record.source)?;
        self.records.insert(record.virtual_path.clone(), record);
        Ok(())
    }

    pub fn get(&self, virtual_path: &str) -> Option<&FileRecord> {
        self.records.get(virtual_path)
    }

    pub fn contains(&self, virtual_path: &str) -> bool {
        self.records.contains_key(virtual_path)
    }

    /// Records ordered by virtual path
    pub fn iter(&self) -> impl Iterator<Item = &FileRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of all record sizes
    pub fn total_size(&self) -> u64 {
        self.records.values().map(|r| r.size).sum()
    }
}
