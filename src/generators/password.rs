use crate::crypto::{self, GeneratorError, MAX_PASSWORD_COUNT, MIN_PASSWORD_COUNT, MIN_PASSWORD_LENGTH};
use crate::models::{GeneratedPassword, PasswordGenerationOptions, StrengthResult};

pub struct PasswordGenerator {
    max_length: Option<usize>,
}

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator { max_length: None }
    }

    /// A generator that refuses lengths above `max_length`.
    pub fn with_max_length(max_length: usize) -> Self {
        PasswordGenerator { max_length: Some(max_length) }
    }

    /// Length bounds first, then the character classes.
    pub fn validate(&self, options: &PasswordGenerationOptions) -> Result<(), GeneratorError> {
        if options.length < MIN_PASSWORD_LENGTH {
            return Err(GeneratorError::LengthTooShort);
        }
        if let Some(max) = self.max_length {
            if options.length > max {
                return Err(GeneratorError::LengthTooLong(max));
            }
        }
        crypto::validate_options(options)
    }

    pub fn generate_password(&self, options: &PasswordGenerationOptions) -> Result<String, GeneratorError> {
        crypto::generate_password(options)
    }

    pub fn analyze_password_strength(&self, password: &str) -> StrengthResult {
        crypto::assess_strength(password)
    }

    /// Generates `count` passwords and scores each one.
    ///
    /// Everything is validated (length bounds, then classes, then count) before
    /// the first password is produced, so a failure never yields a partial batch.
    pub fn generate_batch(
        &self,
        options: &PasswordGenerationOptions,
        count: usize,
    ) -> Result<Vec<GeneratedPassword>, GeneratorError> {
        self.validate(options)?;
        if !(MIN_PASSWORD_COUNT..=MAX_PASSWORD_COUNT).contains(&count) {
            return Err(GeneratorError::CountOutOfRange);
        }

        (0..count)
            .map(|_| {
                let value = self.generate_password(options)?;
                let strength = self.analyze_password_strength(&value);
                Ok(GeneratedPassword {
                    value,
                    strength: strength.verdict,
                    score: strength.score,
                })
            })
            .collect()
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}
