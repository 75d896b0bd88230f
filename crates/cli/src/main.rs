//! Shelfline CLI - Schema setup and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Create the database schema (idempotent)
//! shelfline-cli migrate
//!
//! # Insert a demo user with a few products
//! shelfline-cli seed
//! ```
//!
//! # Commands
//!
//! - `migrate` - Create the users, products, and session tables
//! - `seed` - Seed the database with demo data

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "shelfline-cli")]
#[command(author, version, about = "Shelfline CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database schema (idempotent)
    Migrate,
    /// Seed the database with a demo user and products
    Seed {
        /// Username for the demo user
        #[arg(short, long, default_value = "demo")]
        username: String,

        /// Email for the demo user
        #[arg(short, long, default_value = "demo@example.com")]
        email: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed { username, email } => commands::seed::run(&username, &email).await?,
    }
    Ok(())
}
