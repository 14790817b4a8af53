//! Command-line flag surface.

use clap::Parser;
use std::path::PathBuf;

use crate::pool::CharacterClasses;

/// Password and passphrase generator with entropy scoring and
/// k-anonymity breach checks.
#[derive(Parser, Debug)]
#[command(name = "passmint", version, about)]
pub struct Cli {
    /// Password length in characters.
    #[arg(short = 'n', long, default_value_t = 12, value_parser = clap::value_parser!(u32).range(1..))]
    pub length: u32,

    /// Disable lowercase letters.
    #[arg(long)]
    pub no_lower: bool,

    /// Disable uppercase letters.
    #[arg(long)]
    pub no_upper: bool,

    /// Disable digits.
    #[arg(long)]
    pub no_digits: bool,

    /// Include symbols.
    #[arg(long)]
    pub symbols: bool,

    /// Number of credentials to generate.
    #[arg(short = 'c', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,

    /// Generate a multi-word passphrase instead of a password.
    #[arg(long)]
    pub passphrase: bool,

    /// Number of words per passphrase.
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    pub words: u32,

    /// Wordlist file (one word per line); embedded default otherwise.
    #[arg(long, value_name = "PATH")]
    pub wordlist: Option<PathBuf>,

    /// Compute and display entropy and a strength label.
    #[arg(long)]
    pub entropy: bool,

    /// Check each credential against the breach database.
    #[arg(long)]
    pub check_breach: bool,

    /// Emit newline-delimited JSON to stdout.
    #[arg(long)]
    pub json: bool,

    /// Write CSV to a file, or to stdout with `-`.
    #[arg(long, value_name = "PATH")]
    pub csv: Option<String>,
}

impl Cli {
    /// Resolves the class toggles into a pool configuration.
    pub fn character_classes(&self) -> CharacterClasses {
        CharacterClasses {
            lowercase: !self.no_lower,
            uppercase: !self.no_upper,
            digits: !self.no_digits,
            symbols: self.symbols,
        }
    }

    /// True when records must be buffered for batch output instead of
    /// printed as they are generated.
    pub fn buffered_output(&self) -> bool {
        self.json || self.csv.is_some()
    }

    /// True when entropy must be computed for each record.
    ///
    /// Entropy accompanies every machine-readable or breach-checked
    /// record, not just explicit `--entropy` runs.
    pub fn wants_entropy(&self) -> bool {
        self.entropy || self.json || self.csv.is_some() || self.check_breach
    }
}
