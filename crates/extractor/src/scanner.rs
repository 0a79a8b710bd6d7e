//! Single-pass streaming extraction of tournament names from a PGN archive.
//!
//! The archive is never held in memory: lines are read one at a time
//! and only the set of distinct names grows, so memory scales with the
//! number of distinct tournaments rather than with input size.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use tracing::info;

use pgn_core::{event_name, strip_newline};

use crate::error::ExtractError;

/// Games between progress reports.
pub const PROGRESS_INTERVAL: u64 = 50_000;

/// Totals for one completed scan.
#[derive(Debug)]
pub struct ScanSummary {
    pub games_processed: u64,
    pub unique_tournaments: usize,
    pub progress_reports: u64,
    /// Wall-clock time for the whole operation, scan plus write.
    pub elapsed: Duration,
}

/// One streaming pass over a PGN archive: collects distinct Event
/// names, counts games (one per blank separator line), then writes the
/// names out one per line.
///
/// Output order is whatever the set yields — deliberately unspecified
/// and allowed to differ between runs.
#[derive(Debug)]
pub struct TournamentExtractor<R, W> {
    reader: R,
    writer: W,
    tournaments: HashSet<Vec<u8>>,
    games_processed: u64,
}

impl TournamentExtractor<BufReader<File>, BufWriter<File>> {
    /// Open both files up front so a bad path fails before any work.
    /// Both handles close on drop, on every exit path.
    pub fn open(input: &Path, output: &Path) -> Result<Self, ExtractError> {
        let input_file = File::open(input).map_err(|source| ExtractError::OpenInput {
            path: input.display().to_string(),
            source,
        })?;
        let output_file = File::create(output).map_err(|source| ExtractError::CreateOutput {
            path: output.display().to_string(),
            source,
        })?;
        Ok(Self::new(
            BufReader::new(input_file),
            BufWriter::new(output_file),
        ))
    }
}

impl<R: BufRead, W: Write> TournamentExtractor<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            tournaments: HashSet::new(),
            games_processed: 0,
        }
    }

    /// Scan the whole input, then write every unique name to the
    /// output. Progress goes to stdout every [`PROGRESS_INTERVAL`]
    /// games; the elapsed figure on each progress line is the time
    /// since the previous report, not since the start.
    pub fn extract(&mut self) -> Result<ScanSummary, ExtractError> {
        let start = Instant::now();
        let mut last_report = start;
        let mut progress_reports = 0u64;

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = strip_newline(&buf);

            if let Some(name) = event_name(line) {
                if !self.tournaments.contains(name) {
                    self.tournaments.insert(name.to_vec());
                }
            }

            // A blank separator line marks the end of one game block.
            if line.is_empty() {
                self.games_processed += 1;

                if self.games_processed % PROGRESS_INTERVAL == 0 {
                    let now = Instant::now();
                    let since_last = now.duration_since(last_report).as_secs();
                    println!(
                        "Processed {} games ({} unique tournaments so far)... {}s since last report",
                        self.games_processed,
                        self.tournaments.len(),
                        since_last
                    );
                    last_report = now;
                    progress_reports += 1;
                }
            }
        }

        println!(
            "Writing {} unique tournaments to file...",
            self.tournaments.len()
        );

        for name in &self.tournaments {
            self.writer.write_all(name)?;
            self.writer.write_all(b"\n")?;
        }
        self.writer.flush()?;

        let summary = ScanSummary {
            games_processed: self.games_processed,
            unique_tournaments: self.tournaments.len(),
            progress_reports,
            elapsed: start.elapsed(),
        };
        info!(
            games = summary.games_processed,
            tournaments = summary.unique_tournaments,
            "Scan complete"
        );
        Ok(summary)
    }
}
