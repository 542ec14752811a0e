// src/logging/mod.rs
use std::env;
use std::fs::{self, OpenOptions};
use std::io;

use env_logger::{Builder, Target};

use crate::core::config::Config;

/// Installs the global logger. `RUST_LOG`, when set, refines the configured level.
pub fn init_logging(config: &Config) -> io::Result<()> {
    let mut builder = Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(true);

    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    match &config.log_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        None => {
            builder.target(Target::Stderr);
        }
    }

    builder
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}
