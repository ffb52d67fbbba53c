// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Run-level failures that abort before any output is written.
#[derive(Error, Debug)]
pub enum NoiseError {
    #[error("Input directory not found: {0}")]
    InputDirMissing(PathBuf),

    #[error("No encoded TSV files found under {0}")]
    NoEncodedFiles(PathBuf),

    #[error("Invalid file pattern {pattern}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

pub type Result<T> = std::result::Result<T, NoiseError>;
