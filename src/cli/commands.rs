// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Start the HTTP API server
    Serve,

    /// Generate one or more passwords
    Generate {
        /// Password length (defaults to DEFAULT_PASSWORD_LENGTH)
        #[arg(long, short)]
        length: Option<usize>,

        /// Number of passwords, 1 to 10 (defaults to DEFAULT_PASSWORD_COUNT)
        #[arg(long, short)]
        count: Option<usize>,

        /// Leave out uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Leave out lowercase letters
        #[arg(long)]
        no_lowercase: bool,

        /// Leave out digits
        #[arg(long)]
        no_digits: bool,

        /// Leave out punctuation characters
        #[arg(long)]
        no_special: bool,
    },

    /// Score the strength of a password
    Assess {
        /// Password to score; prompted for (hidden) when omitted
        password: Option<String>,
    },

    /// Interactive menu
    Interactive,
}
