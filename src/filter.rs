//! Candidate filtering module
//!
//! Evaluates candidate words against the configured length and
//! character-class requirements. Candidates are raw byte strings: wordlists
//! in the wild are frequently not valid UTF-8, and every check here is
//! defined over ASCII byte ranges.

/// The fixed set of special characters a candidate may be required to
/// contain. These are the 32 ASCII punctuation/symbol characters; the set
/// is a constant of the tool, not configurable.
pub const SPECIAL_CHARS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Filter configuration
///
/// Immutable once constructed; applied uniformly to every candidate line
/// in one run. Requirements left disabled always pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Minimum candidate length in bytes (inclusive)
    pub min_length: usize,
    /// Require at least one ASCII uppercase letter A-Z
    pub require_uppercase: bool,
    /// Require at least one ASCII digit 0-9
    pub require_digit: bool,
    /// Require at least one character from [`SPECIAL_CHARS`]
    pub require_special: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_length: 1,
            require_uppercase: false,
            require_digit: false,
            require_special: false,
        }
    }
}

impl FilterConfig {
    /// Check whether a candidate word satisfies every enabled requirement.
    ///
    /// All checks are conjunctive. Length is the raw byte count, matching
    /// how wordlists are measured on disk; a multi-byte UTF-8 sequence
    /// counts once per byte.
    #[inline]
    pub fn meets_criteria(&self, word: &[u8]) -> bool {
        if word.len() < self.min_length {
            return false;
        }

        if self.require_uppercase && !has_uppercase(word) {
            return false;
        }

        if self.require_digit && !has_digit(word) {
            return false;
        }

        if self.require_special && !has_special(word) {
            return false;
        }

        true
    }

    /// Check if any requirement beyond the length threshold is active
    pub fn has_class_requirements(&self) -> bool {
        self.require_uppercase || self.require_digit || self.require_special
    }
}

#[inline]
fn has_uppercase(word: &[u8]) -> bool {
    word.iter().any(|b| b.is_ascii_uppercase())
}

#[inline]
fn has_digit(word: &[u8]) -> bool {
    word.iter().any(|b| b.is_ascii_digit())
}

#[inline]
fn has_special(word: &[u8]) -> bool {
    word.iter().any(|b| SPECIAL_CHARS.contains(b))
}
