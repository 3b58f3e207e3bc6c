//! Backup command - manage database backups

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use super::{get_context, get_deskbook_dir};
use deskbook_core::services::BackupService;

#[derive(Subcommand)]
pub enum BackupCommands {
    /// Create a new backup
    Create {
        /// Maximum number of backups to keep
        #[arg(long, short = 'm')]
        max_backups: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List available backups
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Restore from a backup
    Restore {
        /// Backup name to restore
        name: String,
        /// Skip confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Clear all backups
    Clear {
        /// Skip confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Get a BackupService without requiring a full context
///
/// Used for operations that don't need the database (list, restore, clear)
fn get_backup_service() -> BackupService {
    let deskbook_dir = get_deskbook_dir();
    let config = deskbook_core::config::Config::load(&deskbook_dir).unwrap_or_default();
    BackupService::new(deskbook_dir, config.db_filename().to_string())
}

pub fn run(command: BackupCommands) -> Result<()> {
    match command {
        BackupCommands::Create { max_backups, json } => {
            // Create needs full context so the database exists
            let ctx = get_context()?;
            let result = ctx.backup_service.create(max_backups)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", "Backup created".green());
                println!("  Name: {}", result.name);
                println!("  Size: {}", result.size_display());
            }
        }
        BackupCommands::List { json } => {
            let backup_service = get_backup_service();
            let backups = backup_service.list()?;

            if json {
                println!("{}", serde_json::to_string_pretty(&backups)?);
                return Ok(());
            }

            if backups.is_empty() {
                println!("No backups found.");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Name", "Created", "Size"]);

            for backup in backups {
                table.add_row(vec![
                    backup.name.clone(),
                    backup.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                    backup.size_display(),
                ]);
            }

            println!("{}", table);
        }
        BackupCommands::Restore { name, force, json } => {
            let backup_service = get_backup_service();
            if !force && !json {
                use dialoguer::Confirm;
                if !Confirm::new()
                    .with_prompt(format!("Restore from backup '{}'?", name))
                    .default(false)
                    .interact()?
                {
                    println!("Cancelled.");
                    return Ok(());
                }
            }
            backup_service.restore(&name)?;
            if json {
                println!("{}", serde_json::json!({"restored": name}));
            } else {
                println!("Database restored from backup: {}", name);
            }
        }
        BackupCommands::Clear { force, json } => {
            let backup_service = get_backup_service();
            if !force && !json {
                use dialoguer::Confirm;
                if !Confirm::new()
                    .with_prompt("Delete all backups?")
                    .default(false)
                    .interact()?
                {
                    println!("Cancelled.");
                    return Ok(());
                }
            }
            let result = backup_service.clear()?;
            if json {
                println!("{}", serde_json::json!({"deleted": result.deleted}));
            } else {
                println!("Deleted {} backup(s)", result.deleted);
            }
        }
    }

    Ok(())
}
