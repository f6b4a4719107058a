//! CLI module for the storefront API

pub mod serve;

use clap::{Parser, Subcommand};

/// Storefront API - sample users, products and orders service
#[derive(Parser)]
#[command(name = "storefront-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,
}
