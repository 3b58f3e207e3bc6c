//! Reservation domain model

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A named booking with a start time, end time, and floor, owned by exactly
/// one user record.
///
/// Serialized field names (`startTime`, `endTime`, `floor`) match the on-disk
/// database format, which predates this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub start_time: String,
    pub end_time: String,
    pub floor: i32,
}

/// One user's reservation set, keyed by reservation name.
pub type ReservationMap = BTreeMap<String, Reservation>;

impl Reservation {
    pub fn new(start_time: impl Into<String>, end_time: impl Into<String>, floor: i32) -> Self {
        Self {
            start_time: start_time.into(),
            end_time: end_time.into(),
            floor,
        }
    }
}
