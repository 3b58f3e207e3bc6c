//! Core domain entities
//!
//! Pure data structures with validation logic - no I/O or external
//! dependencies.

mod backup;
mod reservation;
pub mod result;
mod session;
mod user;

pub use backup::BackupMetadata;
pub use reservation::{Reservation, ReservationMap};
pub use session::Session;
pub use user::{validate_signup, Database, UserRecord, MAX_EMAIL_LEN, MAX_PASSWORD_LEN};
