//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sqlvault",
    about = "Parse tagged .sql files into a named statement registry",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse every .sql file under a directory and report problems
    Check {
        /// Directory to scan recursively for .sql files
        dir: PathBuf,
    },
    /// List the tags registered by a successful parse
    List {
        /// Directory to scan recursively for .sql files
        dir: PathBuf,
        /// Emit tag names as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Print the statement body stored under a tag
    Show {
        /// Directory to scan recursively for .sql files
        dir: PathBuf,
        /// Tag name, matched case-insensitively
        tag: String,
    },
}
