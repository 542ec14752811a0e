// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse};
use crate::api::error::ApiError;
use crate::api::types::{
    PasswordGenerationRequest, PasswordGenerationResponse,
    PasswordAnalysisRequest, PasswordAnalysisResponse, ErrorResponse,
};
use crate::core::config::Config;
use crate::crypto::GeneratorError;
use crate::generators::PasswordGenerator;
use crate::models::PasswordGenerationOptions;
use log::debug;

/// Generate secure passwords
///
/// Generates between 1 and 10 passwords and scores each one.
#[utoipa::path(
    post,
    path = "/generate",
    tag = "Generator",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Generated passwords", body = PasswordGenerationResponse),
        (status = 400, description = "Invalid parameters", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse)
    )
)]
pub async fn generate_passwords(
    config: web::Data<Config>,
    generation_req: web::Json<PasswordGenerationRequest>,
) -> Result<HttpResponse, ApiError> {
    let generator = PasswordGenerator::with_max_length(config.max_password_length);
    let (options, count) = resolve_request(&generation_req, &config, &generator)?;
    debug!(
        "Generating {} password(s) of length {} with {} character class(es)",
        count,
        options.length,
        options.enabled_classes().len()
    );

    let passwords = generator.generate_batch(&options, count)?;

    Ok(HttpResponse::Ok().json(PasswordGenerationResponse { passwords }))
}

/// Analyze password strength
///
/// Scores a password against the five strength checks.
#[utoipa::path(
    post,
    path = "/assess",
    tag = "Generator",
    request_body = PasswordAnalysisRequest,
    responses(
        (status = 200, description = "Password analysis result", body = PasswordAnalysisResponse),
        (status = 400, description = "Invalid request body", body = ErrorResponse)
    )
)]
pub async fn assess_password(
    analysis_req: web::Json<PasswordAnalysisRequest>,
) -> HttpResponse {
    let result = PasswordGenerator::new().analyze_password_strength(&analysis_req.password);

    HttpResponse::Ok().json(PasswordAnalysisResponse {
        strength: result.verdict,
        score: result.score,
    })
}

// Apply configured defaults; negative numbers fail the matching range check
fn resolve_request(
    req: &PasswordGenerationRequest,
    config: &Config,
    generator: &PasswordGenerator,
) -> Result<(PasswordGenerationOptions, usize), ApiError> {
    let length = match req.length {
        Some(length) => usize::try_from(length).map_err(|_| GeneratorError::LengthTooShort)?,
        None => config.default_password_length,
    };

    let options = PasswordGenerationOptions {
        length,
        include_uppercase: class_flag(req.uppercase),
        include_lowercase: class_flag(req.lowercase),
        include_digits: class_flag(req.digits),
        include_special: class_flag(req.special),
    };

    // Option errors take precedence over a bad count
    generator.validate(&options)?;

    let count = match req.count {
        Some(count) => usize::try_from(count).map_err(|_| GeneratorError::CountOutOfRange)?,
        None => config.default_password_count,
    };

    Ok((options, count))
}

// Absent means enabled, an explicit null disables the class
fn class_flag(flag: Option<Option<bool>>) -> bool {
    match flag {
        None => true,
        Some(value) => value.unwrap_or(false),
    }
}
