//! Deskbook Core - business logic for room and desk bookings
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core business entities (UserRecord, Reservation, Session)
//! - **ports**: Trait definitions for external dependencies (UserStore)
//! - **services**: Business logic orchestration
//! - **adapters**: Concrete implementations (flat-file JSON store)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::json_file::JsonFileStore;
use config::Config;
use ports::store::UserStore;
use services::*;

// Re-export commonly used types at crate root
pub use domain::result::Error;
pub use domain::{Reservation, ReservationMap, Session, UserRecord};

/// Main context for Deskbook operations
///
/// This is the primary entry point for all business logic. It holds the
/// store, configuration, and all services.
pub struct DeskbookContext {
    pub config: Config,
    pub store: Arc<JsonFileStore>,
    pub account_service: AccountService,
    pub reservation_service: ReservationService,
    pub status_service: StatusService,
    pub backup_service: BackupService,
    pub doctor_service: DoctorService,
    pub demo_service: DemoService,
}

impl DeskbookContext {
    /// Create a new Deskbook context
    pub fn new(deskbook_dir: &Path) -> Result<Self> {
        let config = Config::load(deskbook_dir)?;

        let db_filename = config.db_filename();
        let db_path = deskbook_dir.join(db_filename);
        let store = Arc::new(JsonFileStore::new(&db_path));

        // First run leaves an empty database behind
        store.ensure_db_exists()?;

        let account_service = AccountService::new(Arc::clone(&store));
        let reservation_service = ReservationService::new(Arc::clone(&store));
        let status_service = StatusService::new(Arc::clone(&store), config.demo_mode);
        let backup_service =
            BackupService::new(deskbook_dir.to_path_buf(), db_filename.to_string());
        let doctor_service = DoctorService::new(Arc::clone(&store));
        let demo_service = DemoService::new(deskbook_dir);

        Ok(Self {
            config,
            store,
            account_service,
            reservation_service,
            status_service,
            backup_service,
            doctor_service,
            demo_service,
        })
    }
}
