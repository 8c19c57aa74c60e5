//! confab CLI and REST API entry point.
//!
//! Binary name: `confab`
//!
//! Parses CLI arguments, initializes the session and (for `serve`) the
//! SQLite archive, then dispatches to the chat loop or the HTTP server.

mod cli;
mod http;
mod state;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use confab_core::persona::Persona;

#[derive(Parser)]
#[command(name = "confab", version, about = "Session-oriented chat completion client")]
struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat session
    Chat {
        /// Persona preset: coding, writing, analysis, or creative
        #[arg(short, long)]
        persona: Option<Persona>,

        /// Model identifier override
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Start the HTTP API server
    Serve {
        /// Socket address to bind (overrides config.toml)
        #[arg(short, long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,confab=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_target(false)
        .init();

    match cli.command {
        Commands::Chat { persona, model } => cli::chat::run(persona, model).await,
        Commands::Serve { bind } => http::serve(bind).await,
    }
}
