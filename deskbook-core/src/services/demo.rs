//! Demo service - manage demo mode
//!
//! Demo mode provides sample accounts and reservations for trying the app
//! without touching the real database.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::adapters::json_file::JsonFileStore;
use crate::config::Config;
use crate::domain::{Database, Reservation, UserRecord};
use crate::ports::store::UserStore;

/// Demo service for managing demo mode
pub struct DemoService {
    deskbook_dir: PathBuf,
}

impl DemoService {
    pub fn new(deskbook_dir: &Path) -> Self {
        Self {
            deskbook_dir: deskbook_dir.to_path_buf(),
        }
    }

    /// Check if demo mode is currently enabled
    pub fn is_enabled(&self) -> Result<bool> {
        let config = Config::load(&self.deskbook_dir)?;
        Ok(config.demo_mode)
    }

    /// Enable demo mode
    ///
    /// Deletes any existing demo database for a fresh start, flips the config
    /// flag, and seeds demo.json with sample data.
    pub fn enable(&self) -> Result<()> {
        let demo_db = self.deskbook_dir.join("demo.json");
        if demo_db.exists() {
            std::fs::remove_file(&demo_db)?;
        }

        let mut config = Config::load(&self.deskbook_dir).unwrap_or_default();
        config.enable_demo_mode();
        config.save(&self.deskbook_dir)?;

        let store = JsonFileStore::new(&demo_db);
        store.ensure_db_exists()?;
        store.save(&sample_database())?;

        Ok(())
    }

    /// Disable demo mode, optionally deleting the demo database
    pub fn disable(&self, clean: bool) -> Result<()> {
        let mut config = Config::load(&self.deskbook_dir).unwrap_or_default();
        config.disable_demo_mode();
        config.save(&self.deskbook_dir)?;

        if clean {
            let demo_db = self.deskbook_dir.join("demo.json");
            if demo_db.exists() {
                std::fs::remove_file(&demo_db)?;
            }
        }

        Ok(())
    }
}

/// Sample accounts and reservations for demo mode. Password is "demo" for
/// every account.
fn sample_database() -> Database {
    let mut db = Database::new();

    let mut alice = UserRecord::new("Alice Nguyen", 51824753556, "demo");
    alice.reservations.insert(
        "Standup".to_string(),
        Reservation::new("09:00", "09:30", 2),
    );
    alice.reservations.insert(
        "Client call".to_string(),
        Reservation::new("11:00", "12:00", 3),
    );
    db.insert("alice@example.com".to_string(), alice);

    let mut bob = UserRecord::new("Bob Carter", 83914571271, "demo");
    bob.reservations.insert(
        "Desk 12".to_string(),
        Reservation::new("08:30", "17:00", 1),
    );
    db.insert("bob@example.com".to_string(), bob);

    db
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_enable_seeds_demo_database() {
        let dir = tempdir().unwrap();
        let service = DemoService::new(dir.path());

        service.enable().unwrap();

        assert!(service.is_enabled().unwrap());
        let store = JsonFileStore::new(&dir.path().join("demo.json"));
        let db = store.load().unwrap();
        assert!(!db.is_empty());
        assert!(db.contains_key("alice@example.com"));
    }

    #[test]
    fn test_disable_clean_removes_demo_database() {
        let dir = tempdir().unwrap();
        let service = DemoService::new(dir.path());
        service.enable().unwrap();

        service.disable(true).unwrap();

        assert!(!service.is_enabled().unwrap());
        assert!(!dir.path().join("demo.json").exists());
    }
}
