//! Integration tests for deskbook-core services
//!
//! These tests exercise the account and reservation flows against a real
//! flat-file database in a temp directory.
//!
//! Run with: cargo test --test integration_tests -- --nocapture

use std::sync::Arc;

use tempfile::TempDir;

use deskbook_core::adapters::json_file::JsonFileStore;
use deskbook_core::domain::result::Error;
use deskbook_core::domain::{Reservation, UserRecord};
use deskbook_core::ports::store::UserStore;
use deskbook_core::services::{AccountService, BackupService, ReservationService, StatusService};
use deskbook_core::DeskbookContext;

// ============================================================================
// Test Helpers
// ============================================================================

/// Create an empty test store backed by a temp directory
fn create_test_store(temp_dir: &TempDir) -> Arc<JsonFileStore> {
    let store = Arc::new(JsonFileStore::new(&temp_dir.path().join("users.json")));
    store.ensure_db_exists().expect("Failed to create database");
    store
}

fn account_service(store: &Arc<JsonFileStore>) -> AccountService {
    AccountService::new(Arc::clone(store))
}

fn reservation_service(store: &Arc<JsonFileStore>) -> ReservationService {
    ReservationService::new(Arc::clone(store))
}

// ============================================================================
// Account Tests
// ============================================================================

#[test]
fn test_authenticate_on_empty_database_reports_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_test_store(&temp_dir);
    let accounts = account_service(&store);

    let err = accounts.authenticate("a@x.com", "pw").unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[test]
fn test_create_account_then_authenticate() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_test_store(&temp_dir);
    let accounts = account_service(&store);

    accounts.create_account("Alice", 123, "a@x.com", "pw").unwrap();

    // Exactly one record, with no reservations yet
    let db = store.load().unwrap();
    assert_eq!(db.len(), 1);
    assert_eq!(db["a@x.com"].name, "Alice");
    assert_eq!(db["a@x.com"].abn, 123);
    assert!(db["a@x.com"].reservations.is_empty());
    assert!(store.get_user("missing@x.com").unwrap().is_none());

    let session = accounts.authenticate("a@x.com", "pw").unwrap();
    assert_eq!(session.email, "a@x.com");
    assert!(session.bookings.is_empty());
}

#[test]
fn test_wrong_password_reports_invalid_credentials() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_test_store(&temp_dir);
    let accounts = account_service(&store);
    accounts.create_account("Alice", 123, "a@x.com", "pw").unwrap();

    let err = accounts.authenticate("a@x.com", "wrong").unwrap_err();
    assert!(matches!(err, Error::InvalidCredentials));
}

#[test]
fn test_create_account_rejects_long_email_without_writing() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_test_store(&temp_dir);
    let accounts = account_service(&store);

    let email31 = format!("{}@x.com", "a".repeat(25)); // 31 chars
    let err = accounts
        .create_account("Alice", 123, &email31, "pw")
        .unwrap_err();

    assert!(matches!(err, Error::Validation(_)));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_create_account_rejects_long_password() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_test_store(&temp_dir);
    let accounts = account_service(&store);

    let pw21 = "p".repeat(21);
    let err = accounts
        .create_account("Alice", 123, "a@x.com", &pw21)
        .unwrap_err();

    assert!(matches!(err, Error::Validation(_)));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_create_account_rejects_missing_fields() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_test_store(&temp_dir);
    let accounts = account_service(&store);

    assert!(accounts.create_account("", 123, "a@x.com", "pw").is_err());
    assert!(accounts.create_account("Alice", 0, "a@x.com", "pw").is_err());
    assert!(accounts.create_account("Alice", 123, "", "pw").is_err());
    assert!(accounts.create_account("Alice", 123, "a@x.com", "").is_err());
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_create_account_overwrites_existing_record() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_test_store(&temp_dir);
    let accounts = account_service(&store);
    let reservations = reservation_service(&store);

    accounts.create_account("Alice", 123, "a@x.com", "pw").unwrap();
    let mut session = accounts.authenticate("a@x.com", "pw").unwrap();
    reservations
        .book(&mut session, "Meeting", "09:00", "10:00", 3)
        .unwrap();

    // Same email again: single entry persists, record fully replaced
    accounts
        .create_account("Alice B", 456, "a@x.com", "pw2")
        .unwrap();

    let db = store.load().unwrap();
    assert_eq!(db.len(), 1);
    assert_eq!(db["a@x.com"].name, "Alice B");
    assert_eq!(db["a@x.com"].password, "pw2");
    assert!(db["a@x.com"].reservations.is_empty());
}

// ============================================================================
// Reservation Tests
// ============================================================================

#[test]
fn test_book_persists_and_updates_session() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_test_store(&temp_dir);
    let accounts = account_service(&store);
    let reservations = reservation_service(&store);

    accounts.create_account("Alice", 123, "a@x.com", "pw").unwrap();
    let mut session = accounts.authenticate("a@x.com", "pw").unwrap();

    let bookings = reservations
        .book(&mut session, "Meeting", "09:00", "10:00", 3)
        .unwrap();

    assert_eq!(bookings.len(), 1);
    let r = &bookings["Meeting"];
    assert_eq!(r, &Reservation::new("09:00", "10:00", 3));
    assert_eq!(session.bookings, bookings);

    // Disk reflects the booking
    let db = store.load().unwrap();
    assert_eq!(db["a@x.com"].reservations, bookings);
}

#[test]
fn test_book_overwrites_same_name() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_test_store(&temp_dir);
    let accounts = account_service(&store);
    let reservations = reservation_service(&store);

    accounts.create_account("Alice", 123, "a@x.com", "pw").unwrap();
    let mut session = accounts.authenticate("a@x.com", "pw").unwrap();

    reservations
        .book(&mut session, "Meeting", "09:00", "10:00", 3)
        .unwrap();
    let bookings = reservations
        .book(&mut session, "Meeting", "14:00", "15:00", 5)
        .unwrap();

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings["Meeting"], Reservation::new("14:00", "15:00", 5));
}

#[test]
fn test_cancel_removes_reservation() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_test_store(&temp_dir);
    let accounts = account_service(&store);
    let reservations = reservation_service(&store);

    accounts.create_account("Alice", 123, "a@x.com", "pw").unwrap();
    let mut session = accounts.authenticate("a@x.com", "pw").unwrap();
    reservations
        .book(&mut session, "Meeting", "09:00", "10:00", 3)
        .unwrap();

    let bookings = reservations.cancel(&mut session, "Meeting").unwrap();

    assert!(bookings.is_empty());
    assert!(session.bookings.is_empty());
    assert!(store.load().unwrap()["a@x.com"].reservations.is_empty());
}

#[test]
fn test_cancel_unknown_reservation_reports_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_test_store(&temp_dir);
    let accounts = account_service(&store);
    let reservations = reservation_service(&store);

    accounts.create_account("Alice", 123, "a@x.com", "pw").unwrap();
    let mut session = accounts.authenticate("a@x.com", "pw").unwrap();
    reservations
        .book(&mut session, "Meeting", "09:00", "10:00", 3)
        .unwrap();

    let err = reservations
        .cancel(&mut session, "Nonexistent")
        .unwrap_err();

    assert!(matches!(err, Error::NotFound(_)));
    // Database untouched by the failed cancel
    assert_eq!(store.load().unwrap()["a@x.com"].reservations.len(), 1);
}

#[test]
fn test_book_with_stale_session_reports_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_test_store(&temp_dir);
    let accounts = account_service(&store);
    let reservations = reservation_service(&store);

    accounts.create_account("Alice", 123, "a@x.com", "pw").unwrap();
    let mut session = accounts.authenticate("a@x.com", "pw").unwrap();

    // Wipe the database behind the session's back
    store.save(&Default::default()).unwrap();

    let err = reservations
        .book(&mut session, "Meeting", "09:00", "10:00", 3)
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

// ============================================================================
// Context and Ambient Services
// ============================================================================

#[test]
fn test_context_creates_empty_database_on_first_run() {
    let temp_dir = TempDir::new().unwrap();

    let ctx = DeskbookContext::new(temp_dir.path()).unwrap();

    let db_path = temp_dir.path().join("users.json");
    assert!(db_path.exists());
    assert_eq!(std::fs::read_to_string(&db_path).unwrap(), "{}");
    assert!(ctx.store.load().unwrap().is_empty());
}

#[test]
fn test_status_counts_users_and_reservations() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_test_store(&temp_dir);
    let accounts = account_service(&store);
    let reservations = reservation_service(&store);

    accounts.create_account("Alice", 123, "a@x.com", "pw").unwrap();
    accounts.create_account("Bob", 456, "b@x.com", "pw").unwrap();
    let mut session = accounts.authenticate("a@x.com", "pw").unwrap();
    reservations
        .book(&mut session, "Meeting", "09:00", "10:00", 3)
        .unwrap();
    reservations
        .book(&mut session, "Desk", "08:00", "17:00", 1)
        .unwrap();

    let status = StatusService::new(Arc::clone(&store), false)
        .get_status()
        .unwrap();

    assert_eq!(status.total_users, 2);
    assert_eq!(status.total_reservations, 2);
    assert!(status.database_size_bytes > 0);
    assert!(!status.demo_mode);
    assert_eq!(status.users.len(), 2);
}

#[test]
fn test_backup_create_list_restore() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_test_store(&temp_dir);
    let accounts = account_service(&store);
    accounts.create_account("Alice", 123, "a@x.com", "pw").unwrap();

    let backup_service =
        BackupService::new(temp_dir.path().to_path_buf(), "users.json".to_string());
    let metadata = backup_service.create(None).unwrap();
    assert!(metadata.size_bytes > 0);

    let backups = backup_service.list().unwrap();
    assert_eq!(backups.len(), 1);
    assert_eq!(backups[0].name, metadata.name);

    // Mutate the database, then restore the snapshot
    accounts.create_account("Bob", 456, "b@x.com", "pw").unwrap();
    assert_eq!(store.user_count().unwrap(), 2);

    backup_service.restore(&metadata.name).unwrap();
    let db = store.load().unwrap();
    assert_eq!(db.len(), 1);
    assert!(db.contains_key("a@x.com"));

    // Restore left a pre-restore safety backup behind
    assert!(backup_service.list().unwrap().len() > 1);
}

#[test]
fn test_backup_clear_removes_everything() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_test_store(&temp_dir);
    account_service(&store)
        .create_account("Alice", 123, "a@x.com", "pw")
        .unwrap();

    let backup_service =
        BackupService::new(temp_dir.path().to_path_buf(), "users.json".to_string());
    backup_service.create(None).unwrap();
    backup_service.create(None).unwrap();

    let result = backup_service.clear().unwrap();
    assert_eq!(result.deleted, 2);
    assert!(backup_service.list().unwrap().is_empty());
}

#[test]
fn test_backup_retention_keeps_newest() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_test_store(&temp_dir);
    account_service(&store)
        .create_account("Alice", 123, "a@x.com", "pw")
        .unwrap();

    let backup_service =
        BackupService::new(temp_dir.path().to_path_buf(), "users.json".to_string());
    backup_service.create(None).unwrap();
    backup_service.create(None).unwrap();
    backup_service.create(Some(2)).unwrap();

    assert_eq!(backup_service.list().unwrap().len(), 2);
}

#[test]
fn test_doctor_passes_on_healthy_database() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_test_store(&temp_dir);
    account_service(&store)
        .create_account("Alice", 123, "a@x.com", "pw")
        .unwrap();

    let result = deskbook_core::services::DoctorService::new(Arc::clone(&store))
        .run_checks()
        .unwrap();

    assert_eq!(result.summary.errors, 0);
    assert_eq!(result.summary.warnings, 0);
    assert!(result.summary.passed > 0);
}

#[test]
fn test_doctor_flags_blank_reservation_times() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_test_store(&temp_dir);

    let mut record = UserRecord::new("Alice", 123, "pw");
    record
        .reservations
        .insert("Meeting".to_string(), Reservation::new("", "10:00", 3));
    store.upsert_user("a@x.com", record).unwrap();

    let result = deskbook_core::services::DoctorService::new(Arc::clone(&store))
        .run_checks()
        .unwrap();

    assert!(result.summary.warnings > 0);
    assert_eq!(result.checks["blank_reservation_times"].status, "warning");
}

#[test]
fn test_doctor_reports_unreadable_database() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("users.json");
    std::fs::write(&db_path, "not json").unwrap();
    let store = Arc::new(JsonFileStore::new(&db_path));

    let result = deskbook_core::services::DoctorService::new(store)
        .run_checks()
        .unwrap();

    assert_eq!(result.summary.errors, 1);
    assert_eq!(result.checks["database_readable"].status, "error");
}
