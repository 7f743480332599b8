//! CLI module for the QAT API
//!
//! - `serve`: run the HTTP server
//! - `init-db`: create the database tables and exit

pub mod init_db;
pub mod serve;

use clap::{Parser, Subcommand};

/// Question/Answer Test API - ask questions about uploaded documents and check understanding
#[derive(Parser)]
#[command(name = "qat-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve,

    /// Create the PostgreSQL tables and exit
    InitDb,
}
