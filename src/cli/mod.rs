//! CLI module for the Catalog API

pub mod serve;

use clap::{Parser, Subcommand};

/// Catalog API - layered product and user management backend
#[derive(Parser)]
#[command(name = "catalog-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,
}
