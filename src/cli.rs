//! Command-line interface definition for wfilter
//!
//! Provides argument parsing for the wordlist filtering tool.

use clap::Parser;
use std::path::PathBuf;

use crate::filter::FilterConfig;

/// Wordlist composition filter for penetration testing
///
/// Keep only the candidates that satisfy minimum-length and
/// character-class requirements.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "wfilter",
    version,
    about = "Wordlist composition filter for penetration testing",
    long_about = r##"
Filter a wordlist down to the candidates matching length and
character-composition requirements. All enabled requirements must hold
for a candidate to survive; blank lines are always dropped.

EXAMPLES:
    # Keep words of at least 8 bytes
    wfilter words.txt --min 8

    # Keep strong candidates and write them to a file
    wfilter passwords.txt -u -n -s -o strong.txt

    # Full policy filter
    wfilter candidates.txt --min 12 --uppercase --number --special

The special-character requirement matches any of the 32 ASCII symbols:
    !"#$%&'()*+,-./:;<=>?@[\]^_`{|}~
"##
)]
pub struct Args {
    /// Path to the source wordlist
    #[arg(value_name = "INPUT_WORDLIST")]
    pub input: PathBuf,

    /// Minimum candidate length in bytes
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub min: usize,

    /// Require at least one uppercase letter A-Z
    #[arg(short = 'u', long)]
    pub uppercase: bool,

    /// Require at least one digit 0-9
    #[arg(short = 'n', long)]
    pub number: bool,

    /// Require at least one special character
    #[arg(short = 's', long)]
    pub special: bool,

    /// Path to write results (default: stdout)
    #[arg(short = 'o', long = "output", value_name = "OUTPUT_WORDLIST")]
    pub output: Option<PathBuf>,

    /// Quiet mode - no banner or summary
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Build the filter configuration from the parsed flags
    pub fn filter_config(&self) -> FilterConfig {
        FilterConfig {
            min_length: self.min,
            require_uppercase: self.uppercase,
            require_digit: self.number,
            require_special: self.special,
        }
    }
}
