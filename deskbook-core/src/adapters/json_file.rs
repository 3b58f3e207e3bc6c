//! JSON flat-file store adapter
//!
//! The entire database lives in one JSON document. Every operation reads the
//! whole file and every mutation rewrites it; single-process, single-user
//! scope with no locking or atomic-rename step.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::result::Result;
use crate::domain::Database;
use crate::ports::store::UserStore;

/// Flat-file JSON implementation of [`UserStore`].
pub struct JsonFileStore {
    db_path: PathBuf,
}

impl JsonFileStore {
    pub fn new(db_path: &Path) -> Self {
        Self {
            db_path: db_path.to_path_buf(),
        }
    }

    /// Path to the database file.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Size of the database file in bytes, zero if absent.
    pub fn db_size_bytes(&self) -> u64 {
        fs::metadata(&self.db_path).map(|m| m.len()).unwrap_or(0)
    }
}

impl UserStore for JsonFileStore {
    fn ensure_db_exists(&self) -> Result<()> {
        if !self.db_path.exists() {
            if let Some(parent) = self.db_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.db_path, "{}")?;
        }
        Ok(())
    }

    fn load(&self) -> Result<Database> {
        let content = fs::read_to_string(&self.db_path)?;
        let db = serde_json::from_str(&content)?;
        Ok(db)
    }

    fn save(&self, db: &Database) -> Result<()> {
        let content = serde_json::to_string(db)?;
        fs::write(&self.db_path, content)?;
        Ok(())
    }
}
