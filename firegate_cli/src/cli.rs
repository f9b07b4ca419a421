use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Defines the top-level interface for the Firegate CLI with clap.
#[derive(Parser, Debug)]
#[command(name = "firegate")]
#[command(version, about = "Firegate: Firestore over MCP.")]
pub struct FiregateCli {
    /// Path to the service account key file. Falls back to
    /// serviceAccountKey.json next to the binary when not set.
    #[arg(short, long, global = true, env = "SERVICE_ACCOUNT_KEY_PATH")]
    pub service_account_key: Option<PathBuf>,

    /// Enable verbose output?
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: FiregateCliCommand,
}

/// Defines the available subcommands of the Firegate CLI.
#[derive(Subcommand, Debug, PartialEq)]
pub enum FiregateCliCommand {
    /// Start the MCP server on stdio.
    Serve,
    /// Resolve credentials and verify the store connection, then exit.
    Check,
}
