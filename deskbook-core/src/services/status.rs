//! Status service - database summaries

use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;

use crate::adapters::json_file::JsonFileStore;
use crate::ports::store::UserStore;

/// Status service for database summaries
pub struct StatusService {
    store: Arc<JsonFileStore>,
    demo_mode: bool,
}

impl StatusService {
    pub fn new(store: Arc<JsonFileStore>, demo_mode: bool) -> Self {
        Self { store, demo_mode }
    }

    /// Get overall status summary
    pub fn get_status(&self) -> Result<StatusSummary> {
        let db = self.store.load()?;
        let total_reservations = db.values().map(|u| u.reservations.len() as i64).sum();

        Ok(StatusSummary {
            total_users: db.len() as i64,
            total_reservations,
            database_size_bytes: self.store.db_size_bytes(),
            demo_mode: self.demo_mode,
            users: db
                .into_iter()
                .map(|(email, record)| UserSummary {
                    email,
                    name: record.name,
                    reservation_count: record.reservations.len() as i64,
                })
                .collect(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct StatusSummary {
    pub total_users: i64,
    pub total_reservations: i64,
    pub database_size_bytes: u64,
    pub demo_mode: bool,
    pub users: Vec<UserSummary>,
}

#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub email: String,
    pub name: String,
    pub reservation_count: i64,
}
