//! Doctor service - database health checks

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;
use serde_json::json;

use crate::adapters::json_file::JsonFileStore;
use crate::domain::validate_signup;
use crate::ports::store::UserStore;

/// Doctor service for health checks
pub struct DoctorService {
    store: Arc<JsonFileStore>,
}

impl DoctorService {
    pub fn new(store: Arc<JsonFileStore>) -> Self {
        Self { store }
    }

    /// Run all health checks
    pub fn run_checks(&self) -> Result<DoctorResult> {
        let mut checks = HashMap::new();

        // Database readability - everything else depends on this
        let db = match self.store.load() {
            Ok(db) => {
                checks.insert(
                    "database_readable".to_string(),
                    CheckResult {
                        status: "pass".to_string(),
                        message: "Database parses cleanly".to_string(),
                        details: None,
                    },
                );
                db
            }
            Err(e) => {
                checks.insert(
                    "database_readable".to_string(),
                    CheckResult {
                        status: "error".to_string(),
                        message: format!("Database could not be read: {}", e),
                        details: None,
                    },
                );
                return Ok(DoctorResult::from_checks(checks));
            }
        };

        // Records that would fail today's signup validation (hand-edited or
        // legacy databases can contain them)
        let mut invalid: Vec<serde_json::Value> = Vec::new();
        for (email, record) in &db {
            if let Err(problem) =
                validate_signup(&record.name, record.abn, email, &record.password)
            {
                invalid.push(json!({"email": email, "problem": problem}));
            }
        }
        checks.insert(
            "record_validation".to_string(),
            CheckResult {
                status: if invalid.is_empty() { "pass" } else { "warning" }.to_string(),
                message: if invalid.is_empty() {
                    "All records satisfy the signup rules".to_string()
                } else {
                    format!("{} record(s) would fail signup validation", invalid.len())
                },
                details: if invalid.is_empty() { None } else { Some(invalid) },
            },
        );

        // Reservations with blank time fields
        let mut blank_times: Vec<serde_json::Value> = Vec::new();
        for (email, record) in &db {
            for (name, reservation) in &record.reservations {
                if reservation.start_time.is_empty() || reservation.end_time.is_empty() {
                    blank_times.push(json!({"email": email, "reservation": name}));
                }
            }
        }
        checks.insert(
            "blank_reservation_times".to_string(),
            CheckResult {
                status: if blank_times.is_empty() { "pass" } else { "warning" }.to_string(),
                message: if blank_times.is_empty() {
                    "All reservations have start and end times".to_string()
                } else {
                    format!("{} reservation(s) have a blank time field", blank_times.len())
                },
                details: if blank_times.is_empty() {
                    None
                } else {
                    Some(blank_times)
                },
            },
        );

        // Reservations keyed by an empty name
        let mut unnamed: Vec<serde_json::Value> = Vec::new();
        for (email, record) in &db {
            if record.reservations.contains_key("") {
                unnamed.push(json!({"email": email}));
            }
        }
        checks.insert(
            "unnamed_reservations".to_string(),
            CheckResult {
                status: if unnamed.is_empty() { "pass" } else { "warning" }.to_string(),
                message: if unnamed.is_empty() {
                    "No reservations with an empty name".to_string()
                } else {
                    format!("{} account(s) hold a reservation with an empty name", unnamed.len())
                },
                details: if unnamed.is_empty() { None } else { Some(unnamed) },
            },
        );

        Ok(DoctorResult::from_checks(checks))
    }
}

#[derive(Debug, Serialize)]
pub struct DoctorResult {
    pub checks: HashMap<String, CheckResult>,
    pub summary: DoctorSummary,
}

impl DoctorResult {
    fn from_checks(checks: HashMap<String, CheckResult>) -> Self {
        let passed = checks.values().filter(|c| c.status == "pass").count() as i64;
        let warnings = checks.values().filter(|c| c.status == "warning").count() as i64;
        let errors = checks.values().filter(|c| c.status == "error").count() as i64;
        Self {
            checks,
            summary: DoctorSummary {
                passed,
                warnings,
                errors,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Serialize)]
pub struct DoctorSummary {
    pub passed: i64,
    pub warnings: i64,
    pub errors: i64,
}
