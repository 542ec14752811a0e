// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Use JSON for generate/assess output
    #[arg(long, global = true)]
    pub json: bool,

    /// Address to bind the API server to (overrides WEB_ADDRESS)
    #[arg(long)]
    pub host: Option<String>,

    /// API server port (overrides WEB_PORT)
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Command to execute (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
