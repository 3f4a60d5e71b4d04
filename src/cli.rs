use clap::Parser;

use crate::config::Config;

/// Base URL of the Flask dev server the weather page is served from
pub const DEFAULT_SERVER: &str = "http://localhost:5000";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "vibes",
    version,
    about = "Terminal companion for the Weather Vibes web app"
)]
pub struct Cli {
    /// Base URL of the weather app server [default: http://localhost:5000]
    #[arg(long)]
    pub server: Option<String>,

    /// City the weather page is currently showing; seeds the image showcase
    #[arg(long)]
    pub city: Option<String>,
}

impl Cli {
    /// Resolve the server URL: explicit flag, then config file, then default.
    pub fn resolve_server(&self, config: &Config) -> String {
        self.server
            .clone()
            .or_else(|| config.server.clone())
            .unwrap_or_else(|| DEFAULT_SERVER.to_string())
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
