//! Presentation module
//!
//! Styled banner, status messages, and the end-of-run summary. Everything
//! here writes to stderr so that piped stdout carries nothing but the
//! surviving candidates.

use colored::*;

/// Print the application banner
pub fn print_banner() {
    let banner = r#"
================================================================

    ██╗    ██╗███████╗██╗██╗  ████████╗███████╗██████╗
    ██║    ██║██╔════╝██║██║  ╚══██╔══╝██╔════╝██╔══██╗
    ██║ █╗ ██║█████╗  ██║██║     ██║   █████╗  ██████╔╝
    ██║███╗██║██╔══╝  ██║██║     ██║   ██╔══╝  ██╔══██╗
    ╚███╔███╔╝██║     ██║███████╗██║   ███████╗██║  ██║
     ╚══╝╚══╝ ╚═╝     ╚═╝╚══════╝╚═╝   ╚══════╝╚═╝  ╚═╝

                  Wordlist Filtering Tool

================================================================
"#;

    eprintln!("{}", banner.cyan().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    eprintln!("  {} {}", "ℹ".cyan(), text);
}

/// Print a success message
pub fn print_success(text: &str) {
    eprintln!("  {} {}", "✔".green(), text.green());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Counters for one filtering run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// Raw lines read from the input, blank lines included
    pub lines_read: u64,
    /// Lines that were empty after stripping line terminators
    pub blank_lines: u64,
    /// Candidates that passed every enabled requirement
    pub kept: u64,
    /// Candidates rejected by the filter
    pub filtered_out: u64,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-blank lines that were actually evaluated
    pub fn candidates(&self) -> u64 {
        self.lines_read - self.blank_lines
    }

    /// Print the end-of-run summary
    pub fn print_summary(&self) {
        eprintln!();
        eprintln!("{}", "═".repeat(48).cyan());
        eprintln!("  {} {}", "Lines read:   ".cyan(), format_number(self.lines_read));
        eprintln!("  {} {}", "Blank skipped:".cyan(), format_number(self.blank_lines));
        eprintln!("  {} {}", "Filtered out: ".yellow(), format_number(self.filtered_out));
        eprintln!(
            "  {} {}",
            "Kept:         ".green().bold(),
            format_number(self.kept).green().bold()
        );
        eprintln!("{}", "═".repeat(48).cyan());
    }
}

/// Format a number with thousand separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(123), "123");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_candidates_excludes_blanks() {
        let stats = RunStats {
            lines_read: 10,
            blank_lines: 3,
            kept: 5,
            filtered_out: 2,
        };

        assert_eq!(stats.candidates(), 7);
        assert_eq!(stats.kept + stats.filtered_out, stats.candidates());
    }
}
