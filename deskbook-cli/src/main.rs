//! Deskbook CLI - room and desk bookings in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{backup, book, cancel, demo, doctor, list, login, logout, logs, signup, status};

/// Deskbook - room and desk bookings in your terminal
#[derive(Parser)]
#[command(name = "dbk", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new account
    Signup {
        /// Full name on the account
        #[arg(long)]
        name: String,
        /// Australian Business Number
        #[arg(long)]
        abn: i64,
        /// Email address (also the account key)
        #[arg(long)]
        email: String,
        /// Password (prompted if omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Log in and start a session
    Login {
        /// Email address
        #[arg(long)]
        email: String,
        /// Password (prompted if omitted)
        #[arg(long)]
        password: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// End the current session
    Logout,

    /// Book a room or desk
    Book {
        /// Reservation name
        name: String,
        /// Start time, e.g. 09:00
        #[arg(long)]
        start: String,
        /// End time, e.g. 10:30
        #[arg(long)]
        end: String,
        /// Floor number
        #[arg(long)]
        floor: i32,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Cancel a reservation
    Cancel {
        /// Reservation name
        name: String,
        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List reservations for the logged-in account
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show database status and summary
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage backups
    Backup {
        #[command(subcommand)]
        command: backup::BackupCommands,
    },

    /// Run database health checks
    Doctor {
        /// Show verbose output
        #[arg(long, short)]
        verbose: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage demo mode
    Demo {
        #[command(subcommand)]
        command: Option<demo::DemoCommands>,
    },

    /// View and manage application logs
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Signup { name, abn, email, password } => {
            signup::run(&name, abn, &email, password)
        }
        Commands::Login { email, password, json } => login::run(&email, password, json),
        Commands::Logout => logout::run(),
        Commands::Book { name, start, end, floor, json } => {
            book::run(&name, &start, &end, floor, json)
        }
        Commands::Cancel { name, force, json } => cancel::run(&name, force, json),
        Commands::List { json } => list::run(json),
        Commands::Status { json } => status::run(json),
        Commands::Backup { command } => backup::run(command),
        Commands::Doctor { verbose, json } => doctor::run(verbose, json),
        Commands::Demo { command } => demo::run(command),
        Commands::Logs { command } => logs::run(command),
    }
}
