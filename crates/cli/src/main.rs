//! Lumina CLI - profile store inspection and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Show the persisted state of the active profile
//! lumina status
//!
//! # Clear the persisted cart
//! lumina reset --cart
//!
//! # Clear everything (cart, signed-in user, accounts, orders)
//! lumina reset --all
//! ```
//!
//! The active profile comes from `LUMINA_PROFILE` / `LUMINA_DATA_DIR`, the
//! same environment the storefront binary reads.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "lumina")]
#[command(author, version, about = "Lumina Market CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the persisted state of the active profile
    Status,
    /// Clear persisted state of the active profile
    Reset {
        /// Clear the cart
        #[arg(long)]
        cart: bool,

        /// Clear the signed-in user
        #[arg(long)]
        user: bool,

        /// Clear order history
        #[arg(long)]
        orders: bool,

        /// Clear everything, including registered accounts
        #[arg(long)]
        all: bool,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Status => commands::status::show()?,
        Commands::Reset {
            cart,
            user,
            orders,
            all,
        } => {
            let targets = commands::reset::Targets {
                cart: cart || all,
                user: user || all,
                orders: orders || all,
                accounts: all,
            };
            commands::reset::run(&targets)?;
        }
    }
    Ok(())
}
