use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use anyhow::Context;
use inquire::Password;

mod cli;
mod api;
mod core;
mod models;
mod crypto;
mod generators;
mod logging;

use crate::cli::{Args, CliCommand};
use crate::cli::handlers::{self, ClassFlags};
use crate::core::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables
    let env_loaded = Path::new(".env").exists() && dotenvy::dotenv().is_ok();

    let args = Args::parse();

    let mut config = Config::load();
    if let Some(host) = &args.host {
        config.web_address = host.clone();
    }
    if let Some(port) = args.port {
        config.web_port = port;
    }

    logging::init_logging(&config).context("failed to initialise logging")?;
    if env_loaded {
        log::debug!("Loaded .env file");
    }
    log::debug!("Loaded config: {:?}", config);

    match args.command.clone().unwrap_or(CliCommand::Serve) {
        CliCommand::Serve => {
            log::info!("🔒 Starting password generator");
            api::start_server(config).await.context("API server failed")?;
            log::info!("✅ Shutdown complete");
        }
        CliCommand::Generate {
            length,
            count,
            no_uppercase,
            no_lowercase,
            no_digits,
            no_special,
        } => {
            let flags = ClassFlags { no_uppercase, no_lowercase, no_digits, no_special };
            let options = handlers::build_options(&config, length, flags);
            let count = count.unwrap_or(config.default_password_count);

            match handlers::handle_generate(&config, &options, count) {
                Ok(passwords) => println!("{}", handlers::render_passwords(passwords, args.json)?),
                Err(e) => {
                    log::debug!("Generation rejected: {}", e);
                    eprintln!("Error: {}", e);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        CliCommand::Assess { password } => {
            let password = match password {
                Some(password) => password,
                None => Password::new("Password to check:")
                    .with_display_mode(inquire::PasswordDisplayMode::Hidden)
                    .without_confirmation()
                    .prompt()?,
            };
            let result = handlers::handle_assess(&password);
            println!("{}", handlers::render_strength(result, args.json)?);
        }
        CliCommand::Interactive => {
            cli::menu::run_cli_menu(&config)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
