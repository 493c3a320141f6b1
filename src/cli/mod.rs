// src/cli/mod.rs
// Headless helpers for content writers: validate an import file without
// opening the app, or print the JSON template to pipe into other tools.

pub mod validate_import;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "reviewdesk")]
#[command(about = "ReviewDesk - admin panel for the product review site", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a product-import JSON file and report what it would create
    ValidateImport {
        /// Path to the JSON file
        path: PathBuf,
    },

    /// Print the product-import JSON template to stdout
    PrintTemplate,
}
