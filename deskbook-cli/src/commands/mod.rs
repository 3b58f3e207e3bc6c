//! CLI command implementations

pub mod backup;
pub mod book;
pub mod cancel;
pub mod demo;
pub mod doctor;
pub mod list;
pub mod login;
pub mod logout;
pub mod logs;
pub mod signup;
pub mod status;

use std::path::PathBuf;

use anyhow::{Context, Result};
use deskbook_core::services::{EntryPoint, LogEvent, LoggingService};
use deskbook_core::{DeskbookContext, Session};

/// Get the deskbook directory from environment or default
pub fn get_deskbook_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("DESKBOOK_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".deskbook")
    }
}

/// Get or create deskbook context
pub fn get_context() -> Result<DeskbookContext> {
    let deskbook_dir = get_deskbook_dir();

    std::fs::create_dir_all(&deskbook_dir)
        .with_context(|| format!("Failed to create deskbook directory: {:?}", deskbook_dir))?;

    DeskbookContext::new(&deskbook_dir).context("Failed to initialize deskbook context")
}

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger() -> Option<LoggingService> {
    let deskbook_dir = get_deskbook_dir();
    std::fs::create_dir_all(&deskbook_dir).ok()?;
    LoggingService::new(&deskbook_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// Path to the persisted CLI session
fn session_path() -> PathBuf {
    get_deskbook_dir().join("session.json")
}

/// Persist the session so later invocations can book and cancel
pub fn save_session(session: &Session) -> Result<()> {
    let content = serde_json::to_string_pretty(session)?;
    std::fs::write(session_path(), content)?;
    Ok(())
}

/// Load the persisted session, failing with a hint when not logged in
pub fn load_session() -> Result<Session> {
    let path = session_path();
    if !path.exists() {
        anyhow::bail!("Not logged in. Run `dbk login` first.");
    }
    let content = std::fs::read_to_string(&path)?;
    serde_json::from_str(&content)
        .context("Session file is corrupt; run `dbk login` again")
}

/// Remove the persisted session. Returns whether one existed.
pub fn clear_session() -> Result<bool> {
    let path = session_path();
    if path.exists() {
        std::fs::remove_file(&path)?;
        Ok(true)
    } else {
        Ok(false)
    }
}
