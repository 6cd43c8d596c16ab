//! CLI module for the rotating key gateway

pub mod serve;

use clap::{Parser, Subcommand};

/// Rotating Key Gateway - issues and verifies a single rotating access key
#[derive(Parser)]
#[command(name = "rotating-key-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve(serve::ServeArgs),
}
