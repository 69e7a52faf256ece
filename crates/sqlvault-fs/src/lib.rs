//! Filesystem loading of SQL sources for sqlvault.
//!
//! Turns `.sql` files on disk into [`sqlvault_parser::SqlSource`] values.
//! The parser itself never touches the filesystem; this crate is the glue
//! between a directory of SQL files and one parse run.

pub mod error;
pub mod loader;

pub use error::{Error, Result};
pub use loader::{load_dir, load_file};
