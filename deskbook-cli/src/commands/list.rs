//! List command - show reservations for the logged-in account

use anyhow::{Context, Result};

use super::{get_context, load_session, save_session};
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let stored = load_session()?;

    // Re-authenticate with the stored credentials so the listing reflects
    // the database, not the session cache
    let session = ctx
        .account_service
        .authenticate(&stored.email, &stored.password)
        .context("Stored session is no longer valid; run `dbk login` again")?;
    save_session(&session)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&session.bookings)?);
        return Ok(());
    }

    if session.bookings.is_empty() {
        println!("No reservations for {}.", session.email);
        return Ok(());
    }

    println!("{}", output::reservation_table(&session.bookings));
    Ok(())
}
