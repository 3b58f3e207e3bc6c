//! Demo command - manage demo mode

use anyhow::Result;
use clap::Subcommand;

use super::get_deskbook_dir;
use crate::output;
use deskbook_core::services::DemoService;

#[derive(Subcommand)]
pub enum DemoCommands {
    /// Enable demo mode with fresh sample data
    On,
    /// Disable demo mode
    Off {
        /// Also delete the demo database
        #[arg(long)]
        clean: bool,
    },
    /// Show whether demo mode is enabled
    Status,
}

pub fn run(command: Option<DemoCommands>) -> Result<()> {
    let deskbook_dir = get_deskbook_dir();
    std::fs::create_dir_all(&deskbook_dir)?;
    let service = DemoService::new(&deskbook_dir);

    match command.unwrap_or(DemoCommands::Status) {
        DemoCommands::On => {
            service.enable()?;
            output::success("Demo mode enabled");
            println!("Sample accounts use password \"demo\". Try `dbk login --email alice@example.com`.");
        }
        DemoCommands::Off { clean } => {
            service.disable(clean)?;
            output::success("Demo mode disabled");
            if clean {
                println!("Demo database deleted.");
            }
        }
        DemoCommands::Status => {
            if service.is_enabled()? {
                println!("Demo mode is on.");
            } else {
                println!("Demo mode is off.");
            }
        }
    }

    Ok(())
}
