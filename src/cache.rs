//! Keyed record cache.
//!
//! The shared, read-mostly copy of student records, keyed by identifier.
//! Entries are replaced wholesale on a confirmed successful update, never
//! merged with the previous value.

use std::collections::HashMap;

use crate::models::Student;

/// In-memory cache of full student records.
#[derive(Debug, Default)]
pub struct StudentCache {
    entries: HashMap<u64, Student>,
}

impl StudentCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: u64) -> Option<&Student> {
        self.entries.get(&id)
    }

    /// Replace the entry under the record's own identifier, returning the
    /// previous record if one was cached.
    pub fn replace(&mut self, record: Student) -> Option<Student> {
        self.entries.insert(record.id, record)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
