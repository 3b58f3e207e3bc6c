//! Session domain model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::reservation::ReservationMap;

/// In-memory state for an authenticated user.
///
/// Returned by `AccountService::authenticate` and passed explicitly to the
/// reservation operations. Nothing else in the crate holds login state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    /// Cached copy of the user's reservation mapping, refreshed by every
    /// booking operation.
    pub bookings: ReservationMap,
}

impl Session {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        bookings: ReservationMap,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            password: password.into(),
            bookings,
        }
    }
}
