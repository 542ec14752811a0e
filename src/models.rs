// src/models.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;
use std::fmt;

use crate::crypto::{UPPERCASE_CHARS, LOWERCASE_CHARS, DIGIT_CHARS, PUNCTUATION_CHARS};

/// One of the four disjoint alphabets a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl CharacterClass {
    pub fn charset(&self) -> &'static [u8] {
        match self {
            CharacterClass::Uppercase => UPPERCASE_CHARS,
            CharacterClass::Lowercase => LOWERCASE_CHARS,
            CharacterClass::Digit => DIGIT_CHARS,
            CharacterClass::Special => PUNCTUATION_CHARS,
        }
    }
}

// Password generation options
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_digits: bool,
    pub include_special: bool,
}

impl PasswordGenerationOptions {
    /// Enabled classes, always in uppercase, lowercase, digit, special order.
    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        [
            (self.include_uppercase, CharacterClass::Uppercase),
            (self.include_lowercase, CharacterClass::Lowercase),
            (self.include_digits, CharacterClass::Digit),
            (self.include_special, CharacterClass::Special),
        ]
        .into_iter()
        .filter_map(|(enabled, class)| enabled.then_some(class))
        .collect()
    }
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_lowercase: true,
            include_digits: true,
            include_special: true,
        }
    }
}

/// Human readable label for a strength score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum StrengthVerdict {
    Poor,
    #[serde(rename = "Very Weak")]
    VeryWeak,
    Weak,
    Good,
    Strong,
    Excellent,
    Unknown,
}

impl StrengthVerdict {
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => StrengthVerdict::Poor,
            1 => StrengthVerdict::VeryWeak,
            2 => StrengthVerdict::Weak,
            3 => StrengthVerdict::Good,
            4 => StrengthVerdict::Strong,
            5 => StrengthVerdict::Excellent,
            _ => StrengthVerdict::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthVerdict::Poor => "Poor",
            StrengthVerdict::VeryWeak => "Very Weak",
            StrengthVerdict::Weak => "Weak",
            StrengthVerdict::Good => "Good",
            StrengthVerdict::Strong => "Strong",
            StrengthVerdict::Excellent => "Excellent",
            StrengthVerdict::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for StrengthVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StrengthResult {
    /// Number of satisfied checks (0-5)
    pub score: u8,
    /// Label derived from the score
    pub verdict: StrengthVerdict,
}

/// A generated password together with its assessed strength
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GeneratedPassword {
    /// The password itself
    pub value: String,
    /// Verdict label ("Poor" .. "Excellent")
    pub strength: StrengthVerdict,
    /// Strength score (0-5)
    pub score: u8,
}
