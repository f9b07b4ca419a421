//! Firegate command line entry point.

mod cli;
mod commands;
mod errors;

use clap::Parser;

use cli::{FiregateCli, FiregateCliCommand};

fn main() {
    let cli = FiregateCli::parse();

    // Logs go to stderr; stdout belongs to the MCP transport.
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        FiregateCliCommand::Serve => commands::serve(cli.service_account_key),
        FiregateCliCommand::Check => commands::check(cli.service_account_key),
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
