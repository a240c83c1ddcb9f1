//! Output sink module
//!
//! Handles writing surviving candidates either to standard output or to a
//! destination file, with buffering and a line counter for the run summary.

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, WfilterError};

/// Destination for surviving candidates
///
/// Every written record is the candidate followed by a single LF, regardless
/// of how the input line was terminated.
#[derive(Debug)]
pub enum OutputSink {
    /// Standard output (default when no destination path is given)
    Stdout(BufWriter<io::Stdout>),
    /// Destination file, created or truncated on open
    File {
        writer: BufWriter<std::fs::File>,
        path: PathBuf,
    },
}

impl OutputSink {
    /// Open the sink for a run.
    ///
    /// A missing target means stdout. A file target is created (or
    /// truncated) up front, so an unwritable path fails before any input
    /// line is evaluated.
    pub fn create(target: Option<&Path>) -> Result<Self> {
        match target {
            None => Ok(Self::Stdout(BufWriter::new(io::stdout()))),
            Some(path) => {
                let file = OpenOptions::new()
                    .write(true)
                    .create(true)
                    .truncate(true)
                    .open(path)
                    .map_err(|source| WfilterError::OutputOpen {
                        path: path.to_path_buf(),
                        source,
                    })?;

                Ok(Self::File {
                    writer: BufWriter::new(file),
                    path: path.to_path_buf(),
                })
            }
        }
    }

    /// Write one candidate followed by a single LF
    pub fn write_line(&mut self, line: &[u8]) -> Result<()> {
        let writer: &mut dyn Write = match self {
            Self::Stdout(w) => w,
            Self::File { writer, .. } => writer,
        };

        writer
            .write_all(line)
            .and_then(|_| writer.write_all(b"\n"))
            .map_err(|source| WfilterError::Write { source })
    }

    /// Flush buffered output to the underlying destination
    pub fn flush(&mut self) -> Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File { writer, .. } => writer.flush(),
        }
        .map_err(|source| WfilterError::Write { source })
    }

    /// Destination path, if this sink writes to a file
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Stdout(_) => None,
            Self::File { path, .. } => Some(path),
        }
    }
}

impl Drop for OutputSink {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
