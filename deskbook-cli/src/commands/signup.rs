//! Signup command - create a new account

use anyhow::Result;
use deskbook_core::services::LogEvent;
use dialoguer::Password;

use super::{get_context, get_logger, log_event};
use crate::output;

pub fn run(name: &str, abn: i64, email: &str, password: Option<String>) -> Result<()> {
    let ctx = get_context()?;

    let password = match password {
        Some(p) => p,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()?,
    };

    let logger = get_logger();
    match ctx.account_service.create_account(name, abn, email, &password) {
        Ok(()) => {
            log_event(&logger, LogEvent::new("account_created").with_command("signup"));
            output::success("Account created");
            println!("Run `dbk login` to sign in.");
            Ok(())
        }
        Err(e) => {
            log_event(
                &logger,
                LogEvent::new("signup_failed")
                    .with_command("signup")
                    .with_error(e.to_string()),
            );
            Err(e.into())
        }
    }
}
