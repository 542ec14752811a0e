// src/crypto.rs
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};
use thiserror::Error;

use crate::models::{PasswordGenerationOptions, StrengthResult, StrengthVerdict};

pub const MIN_PASSWORD_LENGTH: usize = 4;
pub const MIN_PASSWORD_COUNT: usize = 1;
pub const MAX_PASSWORD_COUNT: usize = 10;

/// Length from which a password earns the length point.
pub const STRONG_LENGTH: usize = 8;

pub const UPPERCASE_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const DIGIT_CHARS: &[u8] = b"0123456789";
pub const PUNCTUATION_CHARS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Password length must be at least {} characters", MIN_PASSWORD_LENGTH)]
    LengthTooShort,

    #[error("Password length must be at most {0} characters")]
    LengthTooLong(usize),

    #[error("At least one character type must be selected")]
    NoCharacterClass,

    #[error("Number of passwords must be between {} and {}", MIN_PASSWORD_COUNT, MAX_PASSWORD_COUNT)]
    CountOutOfRange,

    #[error("Internal generator error: {0}")]
    Internal(String),
}

impl GeneratorError {
    /// Caller mistakes, as opposed to failures inside the generator.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, GeneratorError::Internal(_))
    }
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Checks the options without consuming any entropy.
pub fn validate_options(options: &PasswordGenerationOptions) -> Result<()> {
    if options.length < MIN_PASSWORD_LENGTH {
        return Err(GeneratorError::LengthTooShort);
    }
    if options.enabled_classes().is_empty() {
        return Err(GeneratorError::NoCharacterClass);
    }
    Ok(())
}

// Generate a strong password from the OS random source
pub fn generate_password(options: &PasswordGenerationOptions) -> Result<String> {
    generate_password_with(&mut OsRng, options)
}

fn generate_password_with<R>(rng: &mut R, options: &PasswordGenerationOptions) -> Result<String>
where
    R: Rng + CryptoRng,
{
    validate_options(options)?;

    let classes = options.enabled_classes();
    let mut password: Vec<u8> = Vec::with_capacity(options.length);

    // One guaranteed character per enabled class
    for class in &classes {
        let c = class
            .charset()
            .choose(rng)
            .ok_or_else(|| GeneratorError::Internal(format!("empty charset for {:?}", class)))?;
        password.push(*c);
    }

    let pool: Vec<u8> = classes
        .iter()
        .flat_map(|class| class.charset().iter().copied())
        .collect();

    while password.len() < options.length {
        let c = pool
            .choose(rng)
            .ok_or_else(|| GeneratorError::Internal("empty character pool".to_string()))?;
        password.push(*c);
    }

    // Shuffle everything so the guaranteed characters are not at the front
    password.shuffle(rng);

    Ok(password.into_iter().map(char::from).collect())
}

// Analyze password strength
pub fn assess_strength(password: &str) -> StrengthResult {
    let checks = [
        password.chars().count() >= STRONG_LENGTH,
        password.chars().any(char::is_lowercase),
        password.chars().any(char::is_uppercase),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(is_punctuation),
    ];

    let score = checks.iter().filter(|passed| **passed).count() as u8;

    StrengthResult {
        score,
        verdict: StrengthVerdict::from_score(score),
    }
}

fn is_punctuation(c: char) -> bool {
    c.is_ascii() && PUNCTUATION_CHARS.contains(&(c as u8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CharacterClass;
    use std::collections::HashSet;

    fn options(length: usize, upper: bool, lower: bool, digits: bool, special: bool) -> PasswordGenerationOptions {
        PasswordGenerationOptions {
            length,
            include_uppercase: upper,
            include_lowercase: lower,
            include_digits: digits,
            include_special: special,
        }
    }

    fn contains_class(password: &str, class: CharacterClass) -> bool {
        password.bytes().any(|b| class.charset().contains(&b))
    }

    #[test]
    fn charsets_are_disjoint_and_sized() {
        assert_eq!(UPPERCASE_CHARS.len(), 26);
        assert_eq!(LOWERCASE_CHARS.len(), 26);
        assert_eq!(DIGIT_CHARS.len(), 10);
        assert_eq!(PUNCTUATION_CHARS.len(), 32);

        let all: Vec<u8> = [UPPERCASE_CHARS, LOWERCASE_CHARS, DIGIT_CHARS, PUNCTUATION_CHARS].concat();
        let unique: HashSet<u8> = all.iter().copied().collect();
        assert_eq!(unique.len(), all.len());
        assert!(PUNCTUATION_CHARS.iter().all(|b| b.is_ascii_punctuation()));
    }

    #[test]
    fn generated_password_has_requested_length() {
        for length in [4, 5, 8, 12, 64, 257] {
            let password = generate_password(&options(length, true, true, true, true)).unwrap();
            assert_eq!(password.chars().count(), length);
        }
    }

    #[test]
    fn every_enabled_class_is_present_and_disabled_ones_absent() {
        let flags = [true, false];
        for &upper in &flags {
            for &lower in &flags {
                for &digits in &flags {
                    for &special in &flags {
                        let opts = options(4, upper, lower, digits, special);
                        if opts.enabled_classes().is_empty() {
                            continue;
                        }
                        for _ in 0..50 {
                            let password = generate_password(&opts).unwrap();
                            assert_eq!(contains_class(&password, CharacterClass::Uppercase), upper);
                            assert_eq!(contains_class(&password, CharacterClass::Lowercase), lower);
                            assert_eq!(contains_class(&password, CharacterClass::Digit), digits);
                            assert_eq!(contains_class(&password, CharacterClass::Special), special);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn length_equal_to_class_count_still_covers_every_class() {
        let opts = options(4, true, true, true, true);
        for _ in 0..200 {
            let password = generate_password(&opts).unwrap();
            assert_eq!(password.len(), 4);
            for class in opts.enabled_classes() {
                assert!(contains_class(&password, class), "{} lacks {:?}", password, class);
            }
        }
    }

    #[test]
    fn guaranteed_characters_are_not_pinned_to_the_front() {
        // Uppercase is picked first; after the shuffle it must land elsewhere sometimes.
        let opts = options(4, true, false, true, false);
        let moved = (0..200)
            .map(|_| generate_password(&opts).unwrap())
            .any(|p| !p.as_bytes()[0].is_ascii_uppercase());
        assert!(moved);
    }

    #[test]
    fn short_length_is_rejected() {
        let err = generate_password(&options(3, true, true, true, true)).unwrap_err();
        assert_eq!(err, GeneratorError::LengthTooShort);
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "Password length must be at least 4 characters");
    }

    #[test]
    fn no_class_is_rejected() {
        let err = generate_password(&options(10, false, false, false, false)).unwrap_err();
        assert_eq!(err, GeneratorError::NoCharacterClass);
        assert_eq!(err.to_string(), "At least one character type must be selected");
    }

    #[test]
    fn length_is_checked_before_classes() {
        let err = validate_options(&options(0, false, false, false, false)).unwrap_err();
        assert_eq!(err, GeneratorError::LengthTooShort);
    }

    #[test]
    fn repeated_calls_differ() {
        let opts = options(16, true, true, true, true);
        let passwords: HashSet<String> = (0..20).map(|_| generate_password(&opts).unwrap()).collect();
        assert!(passwords.len() > 1);
    }

    #[test]
    fn empty_password_is_poor() {
        let result = assess_strength("");
        assert_eq!(result.score, 0);
        assert_eq!(result.verdict, StrengthVerdict::Poor);
    }

    #[test]
    fn eight_lowercase_letters_are_weak() {
        let result = assess_strength("abcdefgh");
        assert_eq!(result.score, 2);
        assert_eq!(result.verdict, StrengthVerdict::Weak);
    }

    #[test]
    fn mixed_password_is_excellent() {
        let result = assess_strength("Abcdefg1!");
        assert_eq!(result.score, 5);
        assert_eq!(result.verdict, StrengthVerdict::Excellent);
    }

    #[test]
    fn each_check_adds_one_point() {
        assert_eq!(assess_strength("a").verdict, StrengthVerdict::VeryWeak);
        assert_eq!(assess_strength("aB1").verdict, StrengthVerdict::Good);
        assert_eq!(assess_strength("aB1!").verdict, StrengthVerdict::Strong);
        assert_eq!(assess_strength("12345678").score, 2);
        assert_eq!(assess_strength("        ").score, 1);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Seven two-byte characters stay below the length threshold.
        assert_eq!(assess_strength("ééééééé").score, 1);
        assert_eq!(assess_strength("éééééééé").score, 2);
    }

    #[test]
    fn only_ascii_digits_count_as_digits() {
        assert_eq!(assess_strength("½").score, 0);
        assert_eq!(assess_strength("Ⅻ").score, 1);
        assert_eq!(assess_strength("7").score, 1);
        assert_eq!(assess_strength("Abcdefg½!").score, 4);
    }

    #[test]
    fn symbols_outside_the_punctuation_set_do_not_count() {
        assert_eq!(assess_strength("§").score, 0);
        assert_eq!(assess_strength("~").score, 1);
    }
}
