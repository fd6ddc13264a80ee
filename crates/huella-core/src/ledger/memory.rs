use std::sync::{Mutex, PoisonError};

use crate::error::CoreError;
use crate::model::ActionRecord;

use super::ActionStore;

/// In-memory store. The mutex serializes appends so insertion order stays
/// consistent under concurrent writers.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<ActionRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ActionStore for MemoryStore {
    fn append(&self, record: &ActionRecord) -> Result<(), CoreError> {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        records.push(record.clone());
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<ActionRecord>, CoreError> {
        let records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        let mut out: Vec<ActionRecord> = records.clone();
        out.reverse();
        Ok(out)
    }
}
