//! Cancel command - remove a reservation

use anyhow::Result;
use deskbook_core::services::LogEvent;

use super::{get_context, get_logger, load_session, log_event, save_session};
use crate::output;

pub fn run(name: &str, force: bool, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let mut session = load_session()?;

    if !force && !json {
        use dialoguer::Confirm;
        if !Confirm::new()
            .with_prompt(format!("Cancel reservation '{}'?", name))
            .default(false)
            .interact()?
        {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let logger = get_logger();
    match ctx.reservation_service.cancel(&mut session, name) {
        Ok(bookings) => {
            save_session(&session)?;
            log_event(
                &logger,
                LogEvent::new("reservation_cancelled").with_command("cancel"),
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&bookings)?);
            } else {
                output::success(&format!("Cancelled '{}'", name));
                if bookings.is_empty() {
                    println!("No reservations left.");
                } else {
                    println!("{}", output::reservation_table(&bookings));
                }
            }
            Ok(())
        }
        Err(e) => {
            log_event(
                &logger,
                LogEvent::new("cancellation_failed")
                    .with_command("cancel")
                    .with_error(e.to_string()),
            );
            Err(e.into())
        }
    }
}
