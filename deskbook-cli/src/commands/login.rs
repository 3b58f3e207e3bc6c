//! Login command - authenticate and start a session

use anyhow::Result;
use deskbook_core::services::LogEvent;
use dialoguer::Password;

use super::{get_context, get_logger, log_event, save_session};
use crate::output;

pub fn run(email: &str, password: Option<String>, json: bool) -> Result<()> {
    let ctx = get_context()?;

    let password = match password {
        Some(p) => p,
        None => Password::new().with_prompt("Password").interact()?,
    };

    let logger = get_logger();
    match ctx.account_service.authenticate(email, &password) {
        Ok(session) => {
            save_session(&session)?;
            log_event(&logger, LogEvent::new("login_succeeded").with_command("login"));

            if json {
                println!("{}", serde_json::to_string_pretty(&session.bookings)?);
            } else {
                output::success(&format!("Logged in as {}", session.email));
                println!("{} reservation(s) on file.", session.bookings.len());
            }
            Ok(())
        }
        Err(e) => {
            log_event(
                &logger,
                LogEvent::new("login_failed")
                    .with_command("login")
                    .with_error(e.to_string()),
            );
            Err(e.into())
        }
    }
}
