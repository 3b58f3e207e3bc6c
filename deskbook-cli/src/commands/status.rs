//! Status command - show database status and summary

use anyhow::Result;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use super::get_context;
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let status = ctx.status_service.get_status()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("{}", "Booking Database Status".bold());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec!["Users", &status.total_users.to_string()]);
    table.add_row(vec!["Reservations", &status.total_reservations.to_string()]);
    table.add_row(vec![
        "Database size",
        &output::format_size(status.database_size_bytes),
    ]);
    table.add_row(vec![
        "Demo mode",
        if status.demo_mode { "on" } else { "off" },
    ]);

    println!("{}", table);

    if !status.users.is_empty() {
        println!();
        println!("{}", "Accounts".bold());
        for user in &status.users {
            println!(
                "  • {} — {} ({} reservation(s))",
                user.email, user.name, user.reservation_count
            );
        }
    }

    Ok(())
}
