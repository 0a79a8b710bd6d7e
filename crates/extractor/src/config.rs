//! CLI configuration for the tournament extractor.

use std::path::PathBuf;

/// Default output file name; kept for compatibility with downstream
/// scripts that expect it.
pub const DEFAULT_OUTPUT_FILE: &str = "tournament_names.txt";

#[derive(Clone, Debug)]
pub struct Config {
    /// PGN archive to scan.
    pub input: PathBuf,

    /// Where the unique tournament names go, one per line.
    pub output: PathBuf,
}

impl Config {
    /// Parse from raw CLI args (`args[0]` is the program name).
    /// Returns `None` when the input path is missing; the caller
    /// prints usage. Unrecognized arguments are skipped.
    pub fn from_args(args: &[String]) -> Option<Self> {
        let input = PathBuf::from(args.get(1)?);
        let mut output = PathBuf::from(DEFAULT_OUTPUT_FILE);

        let mut i = 2;
        while i < args.len() {
            match args[i].as_str() {
                "--output" => {
                    if let Some(path) = args.get(i + 1) {
                        output = PathBuf::from(path);
                    }
                    i += 2;
                }
                _ => i += 1,
            }
        }

        Some(Self { input, output })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_missing_input_path() {
        assert!(Config::from_args(&args(&["tournament-extractor"])).is_none());
    }

    #[test]
    fn test_default_output() {
        let config = Config::from_args(&args(&["tournament-extractor", "games.pgn"])).unwrap();
        assert_eq!(config.input, PathBuf::from("games.pgn"));
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT_FILE));
    }

    #[test]
    fn test_output_override() {
        let config = Config::from_args(&args(&[
            "tournament-extractor",
            "games.pgn",
            "--output",
            "events.txt",
        ]))
        .unwrap();
        assert_eq!(config.output, PathBuf::from("events.txt"));
    }

    #[test]
    fn test_unknown_args_skipped() {
        let config = Config::from_args(&args(&[
            "tournament-extractor",
            "games.pgn",
            "--verbose",
            "--output",
            "events.txt",
        ]))
        .unwrap();
        assert_eq!(config.input, PathBuf::from("games.pgn"));
        assert_eq!(config.output, PathBuf::from("events.txt"));
    }
}
