// src/cli/handlers.rs
use console::style;

use crate::api::types::{PasswordAnalysisResponse, PasswordGenerationResponse};
use crate::core::config::Config;
use crate::crypto::GeneratorError;
use crate::generators::PasswordGenerator;
use crate::models::{GeneratedPassword, PasswordGenerationOptions, StrengthResult, StrengthVerdict};

/// Character class switches as given on the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassFlags {
    pub no_uppercase: bool,
    pub no_lowercase: bool,
    pub no_digits: bool,
    pub no_special: bool,
}

// Handlers for CLI commands
pub fn build_options(config: &Config, length: Option<usize>, flags: ClassFlags) -> PasswordGenerationOptions {
    PasswordGenerationOptions {
        length: length.unwrap_or(config.default_password_length),
        include_uppercase: !flags.no_uppercase,
        include_lowercase: !flags.no_lowercase,
        include_digits: !flags.no_digits,
        include_special: !flags.no_special,
    }
}

pub fn handle_generate(
    config: &Config,
    options: &PasswordGenerationOptions,
    count: usize,
) -> Result<Vec<GeneratedPassword>, GeneratorError> {
    PasswordGenerator::with_max_length(config.max_password_length).generate_batch(options, count)
}

pub fn handle_assess(password: &str) -> StrengthResult {
    PasswordGenerator::new().analyze_password_strength(password)
}

pub fn render_passwords(passwords: Vec<GeneratedPassword>, json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(&PasswordGenerationResponse { passwords })?);
    }

    let width = passwords.iter().map(|p| p.value.chars().count()).max().unwrap_or(0);
    let lines: Vec<String> = passwords
        .iter()
        .map(|p| {
            format!(
                "{:<width$}  {} ({}/5)",
                p.value,
                styled_verdict(p.strength),
                p.score,
                width = width
            )
        })
        .collect();
    Ok(lines.join("\n"))
}

pub fn render_strength(result: StrengthResult, json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(&PasswordAnalysisResponse {
            strength: result.verdict,
            score: result.score,
        })?);
    }
    Ok(format!("Strength: {} ({}/5)", styled_verdict(result.verdict), result.score))
}

pub fn styled_verdict(verdict: StrengthVerdict) -> String {
    let label = verdict.label();
    match verdict {
        StrengthVerdict::Poor | StrengthVerdict::VeryWeak => style(label).red().to_string(),
        StrengthVerdict::Weak => style(label).yellow().to_string(),
        StrengthVerdict::Good => style(label).cyan().to_string(),
        StrengthVerdict::Strong => style(label).green().to_string(),
        StrengthVerdict::Excellent => style(label).green().bold().to_string(),
        StrengthVerdict::Unknown => style(label).dim().to_string(),
    }
}
