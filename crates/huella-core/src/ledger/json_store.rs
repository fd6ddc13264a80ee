use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::debug;

use crate::error::CoreError;
use crate::model::ActionRecord;

use super::ActionStore;

/// File-backed store: a single JSON array of records, oldest first.
///
/// Appends hold an exclusive `fs2` lock across the read-modify-write so
/// concurrent processes cannot interleave and drop records.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Open an existing log file. Fails with `NotInitialized` when the
    /// file does not exist yet.
    pub fn open(path: &Path) -> Result<Self, CoreError> {
        if !path.exists() {
            return Err(CoreError::NotInitialized {
                path: path.display().to_string(),
            });
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Create an empty log file if none exists, then open it. An existing
    /// file is left untouched.
    pub fn create(path: &Path) -> Result<Self, CoreError> {
        if !path.exists() {
            let mut file = File::create(path)?;
            file.write_all(b"[]")?;
            debug!("Created empty action log at {}", path.display());
        }
        Self::open(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_records(file: &mut File) -> Result<Vec<ActionRecord>, CoreError> {
        let mut raw = String::new();
        file.read_to_string(&mut raw)?;
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }
}

impl ActionStore for JsonStore {
    fn append(&self, record: &ActionRecord) -> Result<(), CoreError> {
        let mut file = OpenOptions::new().read(true).write(true).open(&self.path)?;
        file.lock_exclusive()?;

        let result = (|| {
            let mut records = Self::read_records(&mut file)?;
            records.push(record.clone());

            file.seek(SeekFrom::Start(0))?;
            file.set_len(0)?;
            serde_json::to_writer_pretty(&mut file, &records)?;
            file.flush()?;
            Ok(())
        })();

        file.unlock()?;
        result
    }

    fn list_all(&self) -> Result<Vec<ActionRecord>, CoreError> {
        let mut file = File::open(&self.path)?;
        file.lock_shared()?;
        let result = Self::read_records(&mut file);
        file.unlock()?;

        let mut records = result?;
        records.reverse();
        Ok(records)
    }
}
