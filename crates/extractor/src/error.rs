//! Extractor error types

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Cannot open PGN file: {path}: {source}")]
    OpenInput { path: String, source: io::Error },

    #[error("Cannot create output file: {path}: {source}")]
    CreateOutput { path: String, source: io::Error },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
