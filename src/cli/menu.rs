// src/cli/menu.rs
use inquire::{Confirm, InquireError, Password, Select, Text};

use crate::cli::handlers::{handle_assess, handle_generate, render_passwords, render_strength};
use crate::core::config::Config;
use crate::models::PasswordGenerationOptions;

const GENERATE: &str = "🔑 Generate passwords";
const ASSESS: &str = "📊 Check password strength";
const EXIT: &str = "🚪 Exit";

pub fn run_cli_menu(config: &Config) -> anyhow::Result<()> {
    loop {
        let selection = Select::new("What would you like to do?", vec![GENERATE, ASSESS, EXIT])
            .prompt_skippable();

        let result = match selection {
            Ok(Some(GENERATE)) => generate_interactively(config),
            Ok(Some(ASSESS)) => assess_interactively(),
            Ok(_) => break,
            Err(InquireError::OperationInterrupted) | Err(InquireError::OperationCanceled) => break,
            Err(e) => return Err(e.into()),
        };

        match result {
            Ok(()) => {}
            Err(InquireError::OperationInterrupted) => break,
            Err(InquireError::OperationCanceled) => continue,
            Err(InquireError::Custom(e)) => eprintln!("❌ {}", e),
            Err(e) => return Err(e.into()),
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn generate_interactively(config: &Config) -> Result<(), InquireError> {
    let length: usize = Text::new("Password length:")
        .with_default(&config.default_password_length.to_string())
        .prompt()
        .and_then(|s| s.trim().parse().map_err(|_| InquireError::Custom("Invalid number".into())))?;

    let count: usize = Text::new("How many passwords (1-10)?")
        .with_default(&config.default_password_count.to_string())
        .prompt()
        .and_then(|s| s.trim().parse().map_err(|_| InquireError::Custom("Invalid number".into())))?;

    let options = PasswordGenerationOptions {
        length,
        include_uppercase: Confirm::new("Include uppercase letters?").with_default(true).prompt()?,
        include_lowercase: Confirm::new("Include lowercase letters?").with_default(true).prompt()?,
        include_digits: Confirm::new("Include digits?").with_default(true).prompt()?,
        include_special: Confirm::new("Include symbols?").with_default(true).prompt()?,
    };

    match handle_generate(config, &options, count) {
        Ok(passwords) => match render_passwords(passwords, false) {
            Ok(output) => println!("\n{}\n", output),
            Err(e) => eprintln!("❌ {}", e),
        },
        Err(e) => eprintln!("❌ {}", e),
    }
    Ok(())
}

fn assess_interactively() -> Result<(), InquireError> {
    let password = Password::new("Password to check:")
        .with_display_mode(inquire::PasswordDisplayMode::Hidden)
        .without_confirmation()
        .prompt()?;

    match render_strength(handle_assess(&password), false) {
        Ok(output) => println!("{}\n", output),
        Err(e) => eprintln!("❌ {}", e),
    }
    Ok(())
}
