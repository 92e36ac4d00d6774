//! Blob storage backing the task store.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{DayListError, DayListResult};

/// Default blob name.
pub const DEFAULT_BLOB_NAME: &str = "todos";

/// A single named blob the store reads once and overwrites after each change.
pub trait Persistence {
    /// The stored blob, or `None` if nothing has been saved yet.
    fn read(&self) -> DayListResult<Option<String>>;

    /// Replace the stored blob.
    fn write(&mut self, blob: &str) -> DayListResult<()>;
}

/// Blob kept as `<dir>/<name>.json`.
#[derive(Debug, Clone)]
pub struct FilePersistence {
    path: PathBuf,
}

impl FilePersistence {
    pub fn new(dir: &Path, name: &str) -> Self {
        FilePersistence {
            path: dir.join(format!("{name}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write to a sibling temp file, then rename over the blob.
    fn write_atomic(&self, data: &[u8]) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.path.with_extension("json.tmp");

        let mut file = File::create(&temp_path)?;
        file.write_all(data)?;
        file.sync_all()?;

        fs::rename(&temp_path, &self.path)
    }
}

impl Persistence for FilePersistence {
    fn read(&self) -> DayListResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, blob: &str) -> DayListResult<()> {
        self.write_atomic(blob.as_bytes()).map_err(|e| {
            DayListError::Persistence(format!("Could not write {}: {e}", self.path.display()))
        })
    }
}

/// In-process blob, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
    blob: Option<String>,
    fail_writes: bool,
    writes: usize,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(blob: impl Into<String>) -> Self {
        MemoryPersistence {
            blob: Some(blob.into()),
            ..Self::default()
        }
    }

    /// Make subsequent writes fail, as a full disk or exceeded quota would.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }

    /// Number of successful writes.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Persistence for MemoryPersistence {
    fn read(&self) -> DayListResult<Option<String>> {
        Ok(self.blob.clone())
    }

    fn write(&mut self, blob: &str) -> DayListResult<()> {
        if self.fail_writes {
            return Err(DayListError::Persistence("storage quota exceeded".into()));
        }
        self.blob = Some(blob.to_string());
        self.writes += 1;
        Ok(())
    }
}
