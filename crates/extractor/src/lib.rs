//! Tournament name extraction from large PGN archives.
//!
//! Library side of the `tournament-extractor` binary: a streaming
//! scanner plus its CLI config and error types.

pub mod config;
pub mod error;
pub mod scanner;
