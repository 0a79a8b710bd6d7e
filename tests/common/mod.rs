use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Write a PGN archive into a temp dir and return its path.
pub fn write_pgn(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("failed to write test PGN");
    path
}

/// Read the output file back as a sorted list of names. Sorting is the
/// test's job because output order is unspecified.
pub fn read_names_sorted(path: &PathBuf) -> Vec<String> {
    let content = fs::read_to_string(path).expect("failed to read output file");
    let mut names: Vec<String> = content.lines().map(str::to_string).collect();
    names.sort_unstable();
    names
}

/// A small archive: two games of one tournament, one of another,
/// three blank separator lines total.
pub fn two_tournament_archive() -> &'static str {
    "[Event \"Spring Open\"]\n\
     [White \"Adams\"]\n\
     [Black \"Baker\"]\n\
     1. e4 e5 1-0\n\
     \n\
     [Event \"Winter Cup\"]\n\
     [White \"Cole\"]\n\
     [Black \"Drake\"]\n\
     1. d4 d5 0-1\n\
     \n\
     [Event \"Spring Open\"]\n\
     [White \"Evans\"]\n\
     [Black \"Frank\"]\n\
     1. c4 c5 1/2-1/2\n\
     \n"
}
