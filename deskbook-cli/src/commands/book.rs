//! Book command - create a reservation

use anyhow::Result;
use deskbook_core::services::LogEvent;

use super::{get_context, get_logger, load_session, log_event, save_session};
use crate::output;

pub fn run(name: &str, start: &str, end: &str, floor: i32, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let mut session = load_session()?;

    let logger = get_logger();
    match ctx
        .reservation_service
        .book(&mut session, name, start, end, floor)
    {
        Ok(bookings) => {
            save_session(&session)?;
            log_event(&logger, LogEvent::new("reservation_booked").with_command("book"));

            if json {
                println!("{}", serde_json::to_string_pretty(&bookings)?);
            } else {
                output::success(&format!("Booked '{}'", name));
                println!("{}", output::reservation_table(&bookings));
            }
            Ok(())
        }
        Err(e) => {
            log_event(
                &logger,
                LogEvent::new("booking_failed")
                    .with_command("book")
                    .with_error(e.to_string()),
            );
            Err(e.into())
        }
    }
}
