//! sqlvault CLI
//!
//! Parses directories of tagged .sql files into a statement registry and
//! reports every parse problem in one pass.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Check { dir }) => commands::run_check(&dir),
        Some(Commands::List { dir, json }) => commands::run_list(&dir, json),
        Some(Commands::Show { dir, tag }) => commands::run_show(&dir, &tag),
        None => {
            println!("{} tagged SQL statement registry", "sqlvault".green().bold());
            println!();
            println!("Run {} for available commands.", "sqlvault --help".cyan());
            Ok(())
        }
    }
}
