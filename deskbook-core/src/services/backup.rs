//! Backup service - database backup management
//!
//! Creates ZIP archives containing the database file and settings.json.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

use crate::domain::BackupMetadata;

/// Config files to include in backup (relative to the deskbook dir)
const CONFIG_FILES: &[&str] = &["settings.json"];

/// Backup service for database backup management
pub struct BackupService {
    deskbook_dir: PathBuf,
    db_filename: String,
}

impl BackupService {
    pub fn new(deskbook_dir: PathBuf, db_filename: String) -> Self {
        Self {
            deskbook_dir,
            db_filename,
        }
    }

    fn backups_dir(&self) -> PathBuf {
        self.deskbook_dir.join("backups")
    }

    /// Write a ZIP archive holding the database file under `name`.
    fn write_archive(&self, name: &str, include_config: bool) -> Result<PathBuf> {
        let db_path = self.deskbook_dir.join(&self.db_filename);
        let archive_path = self.backups_dir().join(name);

        let file = File::create(&archive_path).context("Failed to create backup file")?;
        let mut zip = ZipWriter::new(file);
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        let mut buffer = Vec::new();

        zip.start_file(&self.db_filename, options)?;
        File::open(&db_path)?.read_to_end(&mut buffer)?;
        zip.write_all(&buffer)?;

        if include_config {
            for config_file in CONFIG_FILES {
                let config_path = self.deskbook_dir.join(config_file);
                if config_path.exists() {
                    zip.start_file(*config_file, options)?;
                    buffer.clear();
                    File::open(&config_path)?.read_to_end(&mut buffer)?;
                    zip.write_all(&buffer)?;
                }
            }
        }

        zip.finish()?;
        Ok(archive_path)
    }

    /// Create a backup of the database and config files as a ZIP archive
    pub fn create(&self, max_backups: Option<usize>) -> Result<BackupMetadata> {
        fs::create_dir_all(self.backups_dir())?;

        let db_path = self.deskbook_dir.join(&self.db_filename);
        if !db_path.exists() {
            anyhow::bail!("Database file not found");
        }

        let now = Utc::now();
        let timestamp = now.format("%Y-%m-%dT%H-%M-%S");
        let micros = now.timestamp_subsec_micros();
        let backup_name = format!("deskbook-{}-{:06}.zip", timestamp, micros);

        let backup_path = self.write_archive(&backup_name, true)?;
        let size_bytes = fs::metadata(&backup_path)?.len();

        if let Some(max) = max_backups {
            self.apply_retention(max)?;
        }

        Ok(BackupMetadata::new(backup_name, Utc::now(), size_bytes))
    }

    /// List all backups, newest first
    pub fn list(&self) -> Result<Vec<BackupMetadata>> {
        let backups_dir = self.backups_dir();
        if !backups_dir.exists() {
            return Ok(Vec::new());
        }

        let mut backups = Vec::new();
        for entry in fs::read_dir(&backups_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("zip") {
                continue;
            }

            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("")
                .to_string();
            if !name.starts_with("deskbook-") {
                continue;
            }

            let size_bytes = fs::metadata(&path)?.len();
            let created_at = parse_backup_time(&name);
            backups.push(BackupMetadata::new(name, created_at, size_bytes));
        }

        backups.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(backups)
    }

    /// Restore from a backup
    ///
    /// The current database is archived first so a bad restore can itself be
    /// undone.
    pub fn restore(&self, backup_name: &str) -> Result<()> {
        let backup_path = self.backups_dir().join(backup_name);
        if !backup_path.exists() {
            anyhow::bail!("Backup not found: {}", backup_name);
        }

        let db_path = self.deskbook_dir.join(&self.db_filename);
        if db_path.exists() {
            let now = Utc::now();
            let timestamp = now.format("%Y-%m-%dT%H-%M-%S");
            let micros = now.timestamp_subsec_micros();
            let pre_restore = format!("deskbook-pre-restore-{}-{:06}.zip", timestamp, micros);
            self.write_archive(&pre_restore, false)?;
        }

        let file = File::open(&backup_path)?;
        let mut archive = ZipArchive::new(file)?;

        for i in 0..archive.len() {
            let mut entry = archive.by_index(i)?;
            let name = entry.name().to_string();

            // Config entries restore under their own name; the remaining
            // entry is the database payload, whatever filename it carried
            // when the backup was made.
            let target_path = if CONFIG_FILES.contains(&name.as_str()) {
                self.deskbook_dir.join(&name)
            } else {
                db_path.clone()
            };

            let mut outfile = File::create(&target_path)?;
            std::io::copy(&mut entry, &mut outfile)?;
        }

        Ok(())
    }

    /// Clear all backups
    pub fn clear(&self) -> Result<ClearResult> {
        let backups = self.list()?;
        let count = backups.len() as i64;

        for backup in &backups {
            fs::remove_file(self.backups_dir().join(&backup.name))?;
        }

        Ok(ClearResult { deleted: count })
    }

    fn apply_retention(&self, max_backups: usize) -> Result<()> {
        let mut backups = self.list()?;

        while backups.len() > max_backups {
            if let Some(oldest) = backups.pop() {
                fs::remove_file(self.backups_dir().join(&oldest.name))?;
            }
        }

        Ok(())
    }
}

/// Parse creation time from a backup filename, falling back to now
fn parse_backup_time(backup_name: &str) -> chrono::DateTime<Utc> {
    let ts = backup_name
        .strip_prefix("deskbook-")
        .map(|s| s.strip_prefix("pre-restore-").unwrap_or(s))
        .and_then(|s| s.strip_suffix(".zip"));

    if let Some(ts) = ts {
        chrono::NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H-%M-%S-%f")
            .or_else(|_| chrono::NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H-%M-%S"))
            .map(|dt| dt.and_utc())
            .unwrap_or_else(|_| Utc::now())
    } else {
        Utc::now()
    }
}

#[derive(Debug, Serialize)]
pub struct ClearResult {
    pub deleted: i64,
}
