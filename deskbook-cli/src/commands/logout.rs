//! Logout command - end the current session

use anyhow::Result;

use super::clear_session;
use crate::output;

pub fn run() -> Result<()> {
    if clear_session()? {
        println!("Logged out.");
    } else {
        output::warning("No active session.");
    }
    Ok(())
}
