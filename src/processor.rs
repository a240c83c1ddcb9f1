//! Core processing engine
//!
//! Drives one single-threaded pass over the input wordlist: read raw lines,
//! strip line terminators, drop blanks, evaluate the filter, and write
//! survivors to the output sink.

use crate::cli::Args;
use crate::error::{Result, WfilterError};
use crate::filter::FilterConfig;
use crate::output::OutputSink;
use crate::progress::RunStats;

use bstr::ByteSlice;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Processor configuration
///
/// Fully determined before any line is processed and never mutated during
/// a run.
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    /// Candidate requirements
    pub filter: FilterConfig,
    /// Destination path; `None` writes to stdout
    pub output: Option<PathBuf>,
}

impl ProcessorConfig {
    pub fn from_args(args: &Args) -> Self {
        Self {
            filter: args.filter_config(),
            output: args.output.clone(),
        }
    }
}

/// Main processor
pub struct Processor {
    config: ProcessorConfig,
}

impl Processor {
    pub fn new(config: ProcessorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Run one filtering pass over the input wordlist.
    ///
    /// The input is opened first, then the sink; if the sink cannot be
    /// opened the input handle is released before the error propagates.
    /// Any I/O failure mid-stream is terminal, and whatever was already
    /// flushed to the sink is left intact.
    pub fn process(&self, input: &Path) -> Result<RunStats> {
        let file = File::open(input).map_err(|source| WfilterError::InputOpen {
            path: input.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);

        let mut sink = OutputSink::create(self.config.output.as_deref())?;

        log::debug!("filtering {:?} with {:?}", input, self.config.filter);

        let stats = filter_lines(reader, &self.config.filter, |word| sink.write_line(word))?;
        sink.flush()?;

        log::debug!(
            "kept {} of {} candidates from {:?}",
            stats.kept,
            stats.candidates(),
            input
        );

        Ok(stats)
    }
}

/// Stream raw lines from `reader` and hand every candidate that meets the
/// criteria to `emit`.
///
/// One forward pass, first error wins. Each raw line has all trailing `\r`
/// and `\n` bytes stripped (LF, CRLF, and bare trailing CR endings all
/// normalize the same way); lines that are empty after stripping are
/// counted but never evaluated or emitted. Lines are length-unbounded.
pub fn filter_lines<R, F>(mut reader: R, filter: &FilterConfig, mut emit: F) -> Result<RunStats>
where
    R: BufRead,
    F: FnMut(&[u8]) -> Result<()>,
{
    let mut stats = RunStats::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| WfilterError::Read { source })?;
        if n == 0 {
            break;
        }

        stats.lines_read += 1;

        let word = buf.trim_end_with(|c| c == '\r' || c == '\n');
        if word.is_empty() {
            stats.blank_lines += 1;
            continue;
        }

        if filter.meets_criteria(word) {
            emit(word)?;
            stats.kept += 1;
        } else {
            stats.filtered_out += 1;
        }
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run_filter(input: &[u8], filter: &FilterConfig) -> (RunStats, Vec<Vec<u8>>) {
        let mut kept = Vec::new();
        let stats = filter_lines(Cursor::new(input), filter, |word| {
            kept.push(word.to_vec());
            Ok(())
        })
        .unwrap();
        (stats, kept)
    }

    fn permissive() -> FilterConfig {
        FilterConfig {
            min_length: 0,
            ..FilterConfig::default()
        }
    }

    #[test]
    fn test_permissive_config_keeps_all_lines_in_order() {
        let (stats, kept) = run_filter(b"alpha\nbravo\ncharlie\n", &permissive());

        assert_eq!(kept, vec![b"alpha".to_vec(), b"bravo".to_vec(), b"charlie".to_vec()]);
        assert_eq!(stats.lines_read, 3);
        assert_eq!(stats.kept, 3);
        assert_eq!(stats.filtered_out, 0);
    }

    #[test]
    fn test_mixed_line_endings_normalize() {
        let (stats, kept) = run_filter(b"abc\r\ndef\nghi\r", &FilterConfig::default());

        assert_eq!(kept, vec![b"abc".to_vec(), b"def".to_vec(), b"ghi".to_vec()]);
        assert_eq!(stats.kept, 3);
    }

    #[test]
    fn test_blank_lines_skipped_without_evaluation() {
        let (stats, kept) = run_filter(b"word1\n\nword2\n\r\n", &permissive());

        assert_eq!(kept, vec![b"word1".to_vec(), b"word2".to_vec()]);
        assert_eq!(stats.lines_read, 4);
        assert_eq!(stats.blank_lines, 2);
        assert_eq!(stats.candidates(), 2);
    }

    #[test]
    fn test_last_line_without_terminator() {
        let (_, kept) = run_filter(b"first\nlast", &permissive());

        assert_eq!(kept, vec![b"first".to_vec(), b"last".to_vec()]);
    }

    #[test]
    fn test_min_length_scenario() {
        let filter = FilterConfig {
            min_length: 4,
            ..FilterConfig::default()
        };
        let (stats, kept) = run_filter(b"abc\nABCdef\nabc123\nab$c\na\n", &filter);

        assert_eq!(kept, vec![b"ABCdef".to_vec(), b"abc123".to_vec(), b"ab$c".to_vec()]);
        assert_eq!(stats.filtered_out, 2);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let filter = FilterConfig {
            min_length: 5,
            require_digit: true,
            ..FilterConfig::default()
        };
        let input = b"pass123\nshort\nNoDigitsHere\nw0rdlist\n1\n";

        let (_, first) = run_filter(input, &filter);

        let mut refiltered_input = Vec::new();
        for word in &first {
            refiltered_input.extend_from_slice(word);
            refiltered_input.push(b'\n');
        }
        let (_, second) = run_filter(&refiltered_input, &filter);

        assert_eq!(first, second);
    }

    #[test]
    fn test_non_utf8_bytes_pass_through_unchanged() {
        let input: &[u8] = &[0xE9, 0xE8, b'1', b'\n'];
        let (_, kept) = run_filter(input, &permissive());

        assert_eq!(kept, vec![vec![0xE9, 0xE8, b'1']]);
    }

    #[test]
    fn test_missing_input_is_input_open_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("no-such-wordlist.txt");

        let processor = Processor::new(ProcessorConfig {
            filter: FilterConfig::default(),
            output: None,
        });

        let err = processor.process(&missing).unwrap_err();
        assert!(matches!(err, WfilterError::InputOpen { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_unwritable_output_is_output_open_error() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.txt");
        std::fs::write(&input, "word\n").unwrap();

        let processor = Processor::new(ProcessorConfig {
            filter: FilterConfig::default(),
            output: Some(temp_dir.path().join("missing-dir").join("out.txt")),
        });

        let err = processor.process(&input).unwrap_err();
        assert!(matches!(err, WfilterError::OutputOpen { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_end_to_end_file_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.txt");
        let output = temp_dir.path().join("out.txt");
        std::fs::write(&input, "password\r\nPassword1\nP@ssw0rd!\n\n").unwrap();

        let processor = Processor::new(ProcessorConfig {
            filter: FilterConfig {
                min_length: 1,
                require_uppercase: true,
                require_digit: true,
                require_special: true,
            },
            output: Some(output.clone()),
        });

        let stats = processor.process(&input).unwrap();

        assert_eq!(stats.lines_read, 4);
        assert_eq!(stats.blank_lines, 1);
        assert_eq!(stats.kept, 1);
        assert_eq!(stats.filtered_out, 2);

        let content = std::fs::read_to_string(&output).unwrap();
        assert_eq!(content, "P@ssw0rd!\n");
    }
}
