// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use log::LevelFilter;

use crate::crypto::{MAX_PASSWORD_COUNT, MIN_PASSWORD_COUNT, MIN_PASSWORD_LENGTH};

// Configuration for the generator service
#[derive(Debug, Clone)]
pub struct Config {
    // Web Interface
    pub web_address: String,
    pub web_port: u16,
    pub api_docs_enabled: bool,

    // Password Generation
    pub default_password_length: usize,
    pub default_password_count: usize,
    pub max_password_length: usize,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Web Interface
            web_address: "0.0.0.0".to_string(),
            web_port: 5000,
            api_docs_enabled: true,

            // Password Generation
            default_password_length: 12,
            default_password_count: 1,
            max_password_length: 4096,

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; unparsable values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Web Interface
        if let Some(address) = lookup("WEB_ADDRESS") {
            config.web_address = address;
        }
        parse_into(&lookup, "WEB_PORT", &mut config.web_port);
        parse_into(&lookup, "API_DOCS_ENABLED", &mut config.api_docs_enabled);

        // Password Generation
        parse_into(&lookup, "DEFAULT_PASSWORD_LENGTH", &mut config.default_password_length);
        parse_into(&lookup, "DEFAULT_PASSWORD_COUNT", &mut config.default_password_count);
        parse_into(&lookup, "MAX_PASSWORD_LENGTH", &mut config.max_password_length);

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => log::warn!("Unknown log level '{}', keeping {}", level, config.log_level),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config.check_generation_defaults();
        config
    }

    // Out-of-range generation settings would make every defaulted request fail
    fn check_generation_defaults(&mut self) {
        let defaults = Config::default();

        if self.max_password_length < MIN_PASSWORD_LENGTH {
            log::warn!(
                "MAX_PASSWORD_LENGTH {} is below {}, using {}",
                self.max_password_length, MIN_PASSWORD_LENGTH, defaults.max_password_length
            );
            self.max_password_length = defaults.max_password_length;
        }

        if self.default_password_length < MIN_PASSWORD_LENGTH
            || self.default_password_length > self.max_password_length
        {
            let fallback = defaults.default_password_length.min(self.max_password_length);
            log::warn!(
                "DEFAULT_PASSWORD_LENGTH {} is outside {}..={}, using {}",
                self.default_password_length, MIN_PASSWORD_LENGTH, self.max_password_length, fallback
            );
            self.default_password_length = fallback;
        }

        if !(MIN_PASSWORD_COUNT..=MAX_PASSWORD_COUNT).contains(&self.default_password_count) {
            log::warn!(
                "DEFAULT_PASSWORD_COUNT {} is outside {}..={}, using {}",
                self.default_password_count, MIN_PASSWORD_COUNT, MAX_PASSWORD_COUNT,
                defaults.default_password_count
            );
            self.default_password_count = defaults.default_password_count;
        }
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.web_address.clone(), self.web_port)
    }
}

fn parse_into<F, T>(lookup: &F, key: &str, target: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    if let Some(val) = lookup(key) {
        match val.trim().parse() {
            Ok(parsed) => *target = parsed,
            Err(_) => log::warn!("Ignoring invalid value '{}' for {}", val, key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_match_the_web_service() {
        let config = config_from(&[]);
        assert_eq!(config.bind_address(), ("0.0.0.0".to_string(), 5000));
        assert_eq!(config.default_password_length, 12);
        assert_eq!(config.default_password_count, 1);
        assert_eq!(config.max_password_length, 4096);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(config.log_file.is_none());
        assert!(config.api_docs_enabled);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = config_from(&[
            ("WEB_ADDRESS", "127.0.0.1"),
            ("WEB_PORT", "8080"),
            ("DEFAULT_PASSWORD_LENGTH", "20"),
            ("DEFAULT_PASSWORD_COUNT", "3"),
            ("MAX_PASSWORD_LENGTH", "256"),
            ("LOG_LEVEL", "DEBUG"),
            ("LOG_FILE", "logs/passgen.log"),
            ("API_DOCS_ENABLED", "false"),
        ]);
        assert_eq!(config.bind_address(), ("127.0.0.1".to_string(), 8080));
        assert_eq!(config.default_password_length, 20);
        assert_eq!(config.default_password_count, 3);
        assert_eq!(config.max_password_length, 256);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_file, Some(PathBuf::from("logs/passgen.log")));
        assert!(!config.api_docs_enabled);
    }

    #[test]
    fn invalid_values_keep_defaults() {
        let config = config_from(&[
            ("WEB_PORT", "not-a-port"),
            ("DEFAULT_PASSWORD_LENGTH", "-4"),
            ("LOG_LEVEL", "loud"),
            ("LOG_FILE", "  "),
        ]);
        assert_eq!(config.web_port, 5000);
        assert_eq!(config.default_password_length, 12);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn out_of_range_generation_defaults_fall_back() {
        let config = config_from(&[
            ("DEFAULT_PASSWORD_LENGTH", "5000"),
            ("DEFAULT_PASSWORD_COUNT", "0"),
        ]);
        assert_eq!(config.default_password_length, 12);
        assert_eq!(config.default_password_count, 1);

        let config = config_from(&[("DEFAULT_PASSWORD_LENGTH", "2"), ("DEFAULT_PASSWORD_COUNT", "11")]);
        assert_eq!(config.default_password_length, 12);
        assert_eq!(config.default_password_count, 1);
    }

    #[test]
    fn default_length_is_clamped_to_a_small_maximum() {
        let config = config_from(&[("MAX_PASSWORD_LENGTH", "8"), ("DEFAULT_PASSWORD_LENGTH", "20")]);
        assert_eq!(config.max_password_length, 8);
        assert_eq!(config.default_password_length, 8);

        let config = config_from(&[("MAX_PASSWORD_LENGTH", "3")]);
        assert_eq!(config.max_password_length, 4096);
        assert_eq!(config.default_password_length, 12);
    }
}
