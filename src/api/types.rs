// src/api/types.rs
use serde::{Serialize, Deserialize, Deserializer};
use utoipa::ToSchema;

use crate::models::{GeneratedPassword, StrengthVerdict};

// Generator requests and responses
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationRequest {
    /// Password length (at least 4, defaults to the configured length)
    pub length: Option<i64>,
    /// Number of passwords to generate (1-10, defaults to 1)
    pub count: Option<i64>,
    /// Include uppercase letters (default true, null disables)
    #[serde(default, deserialize_with = "present_or_null")]
    #[schema(value_type = Option<bool>)]
    pub uppercase: Option<Option<bool>>,
    /// Include lowercase letters (default true, null disables)
    #[serde(default, deserialize_with = "present_or_null")]
    #[schema(value_type = Option<bool>)]
    pub lowercase: Option<Option<bool>>,
    /// Include digits (default true, null disables)
    #[serde(default, deserialize_with = "present_or_null")]
    #[schema(value_type = Option<bool>)]
    pub digits: Option<Option<bool>>,
    /// Include punctuation characters (default true, null disables)
    #[serde(default, deserialize_with = "present_or_null")]
    #[schema(value_type = Option<bool>)]
    pub special: Option<Option<bool>>,
}

// Keeps an explicit `null` apart from a missing field
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<bool>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationResponse {
    /// Generated passwords with their strength
    pub passwords: Vec<GeneratedPassword>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PasswordAnalysisRequest {
    /// Password to score
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PasswordAnalysisResponse {
    /// Verdict label
    pub strength: StrengthVerdict,
    /// Strength score (0-5)
    pub score: u8,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
