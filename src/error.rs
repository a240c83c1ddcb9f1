//! Error types for wordlist processing

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Processing errors
///
/// All variants are terminal for the current run: open failures are user or
/// environment misconfigurations, and stream failures leave already-written
/// output intact (each emitted line is a self-contained record).
#[derive(Error, Debug)]
pub enum WfilterError {
    #[error("cannot open input file {path:?}: {source}")]
    InputOpen { path: PathBuf, source: io::Error },

    #[error("cannot open output file {path:?}: {source}")]
    OutputOpen { path: PathBuf, source: io::Error },

    #[error("error reading wordlist: {source}")]
    Read { source: io::Error },

    #[error("error writing output: {source}")]
    Write { source: io::Error },
}

impl WfilterError {
    /// Process exit code for this error.
    ///
    /// An unwritable output path exits with 2; every other failure folds
    /// into the generic error code 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::OutputOpen { .. } => 2,
            _ => 1,
        }
    }
}

/// Result type alias for processing operations
pub type Result<T> = std::result::Result<T, WfilterError>;
