//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

mod account;
mod backup;
mod demo;
mod doctor;
pub mod logging;
mod reservation;
mod status;

pub use account::AccountService;
pub use backup::{BackupService, ClearResult};
pub use demo::DemoService;
pub use doctor::{CheckResult, DoctorResult, DoctorService, DoctorSummary};
pub use logging::{EntryPoint, LogEntry, LogEvent, LoggingService};
pub use reservation::ReservationService;
pub use status::{StatusService, StatusSummary, UserSummary};
