//! Reservation service - booking and cancellation

use std::sync::Arc;

use crate::adapters::json_file::JsonFileStore;
use crate::domain::result::{Error, Result};
use crate::domain::{Reservation, ReservationMap, Session};
use crate::ports::store::UserStore;

/// Reservation service for booking and cancellation
pub struct ReservationService {
    store: Arc<JsonFileStore>,
}

impl ReservationService {
    pub fn new(store: Arc<JsonFileStore>) -> Self {
        Self { store }
    }

    /// Book a reservation under the session's account.
    ///
    /// A reservation with the same name is silently overwritten. Returns the
    /// updated mapping, which is also mirrored into `session.bookings`.
    pub fn book(
        &self,
        session: &mut Session,
        name: &str,
        start_time: &str,
        end_time: &str,
        floor: i32,
    ) -> Result<ReservationMap> {
        let mut db = self.store.load()?;
        let record = db
            .get_mut(&session.email)
            .ok_or_else(|| Error::not_found(format!("no account for {}", session.email)))?;

        record.reservations.insert(
            name.to_string(),
            Reservation::new(start_time, end_time, floor),
        );
        let updated = record.reservations.clone();
        self.store.save(&db)?;

        session.bookings = updated.clone();
        Ok(updated)
    }

    /// Cancel a reservation by name.
    ///
    /// An unknown name reports `NotFound` and leaves the database untouched.
    pub fn cancel(&self, session: &mut Session, name: &str) -> Result<ReservationMap> {
        let mut db = self.store.load()?;
        let record = db
            .get_mut(&session.email)
            .ok_or_else(|| Error::not_found(format!("no account for {}", session.email)))?;

        if record.reservations.remove(name).is_none() {
            return Err(Error::not_found(format!("no reservation named '{}'", name)));
        }
        let updated = record.reservations.clone();
        self.store.save(&db)?;

        session.bookings = updated.clone();
        Ok(updated)
    }
}
