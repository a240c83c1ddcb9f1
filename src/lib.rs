//! # wfilter
//!
//! Wordlist composition filter for penetration testing.
//!
//! ## Features
//!
//! - **Length filtering**: Keep candidates of at least a minimum byte length
//! - **Character-class requirements**: Require uppercase letters, digits,
//!   and/or special characters
//! - **Line-ending normalization**: LF, CRLF, and bare-CR input all produce
//!   LF-terminated output
//! - **Byte-clean**: Non-UTF-8 wordlists pass through unmodified
//!
//! ## Usage
//!
//! ```bash
//! # Keep words of at least 8 bytes
//! wfilter wordlist.txt --min 8
//!
//! # Keep strong candidates and write them to a file
//! wfilter passwords.txt -u -n -s -o strong.txt
//! ```
//!
//! ## Example
//!
//! ```rust
//! use wfilter::filter::FilterConfig;
//!
//! let config = FilterConfig {
//!     min_length: 8,
//!     require_uppercase: true,
//!     require_digit: true,
//!     require_special: false,
//! };
//!
//! assert!(config.meets_criteria(b"Passw0rd"));
//! assert!(!config.meets_criteria(b"password"));
//! ```

pub mod cli;
pub mod error;
pub mod filter;
pub mod output;
pub mod processor;
pub mod progress;

pub use cli::Args;
pub use error::WfilterError;
pub use filter::FilterConfig;
pub use processor::{Processor, ProcessorConfig};
