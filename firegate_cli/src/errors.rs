use std::fmt;

/// Defines the errors you might encounter using the CLI.
#[derive(Debug)]
pub enum CliError {
    Runtime(String),
    Credentials(String),
    Server(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Runtime(msg) => write!(f, "Failed to create async runtime: {}", msg),
            CliError::Credentials(msg) => write!(f, "Credential check failed: {}", msg),
            CliError::Server(msg) => write!(f, "MCP server error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {}
