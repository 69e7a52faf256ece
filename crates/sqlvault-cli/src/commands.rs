//! Command implementations.

use std::path::Path;

use colored::Colorize;
use sqlvault_parser::{SqlRegistry, parse_sources};

use crate::error::Result;

pub fn run_check(dir: &Path) -> Result<()> {
    let sources = sqlvault_fs::load_dir(dir)?;
    let registry = parse_sources(&sources)?;
    println!(
        "{} {} statement(s) parsed from {} source file(s)",
        "ok:".green().bold(),
        registry.len(),
        sources.len()
    );
    Ok(())
}

pub fn run_list(dir: &Path, json: bool) -> Result<()> {
    let registry = load_registry(dir)?;
    let mut names: Vec<&str> = registry.iter().map(|s| s.name.as_str()).collect();
    names.sort_unstable_by_key(|name| name.to_lowercase());

    if json {
        println!("{}", serde_json::to_string_pretty(&names)?);
    } else {
        for name in names {
            println!("{name}");
        }
    }
    Ok(())
}

pub fn run_show(dir: &Path, tag: &str) -> Result<()> {
    let registry = load_registry(dir)?;
    println!("{}", registry.get(tag)?);
    Ok(())
}

fn load_registry(dir: &Path) -> Result<SqlRegistry> {
    let sources = sqlvault_fs::load_dir(dir)?;
    Ok(parse_sources(&sources)?)
}
