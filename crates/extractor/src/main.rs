//! Extract unique tournament names from a PGN archive.
//!
//! Streams the archive once, collects distinct `[Event "..."]` values,
//! and writes them to `tournament_names.txt` (one per line, unordered).
//!
//! Usage: tournament-extractor <input.pgn> [--output <file>]

use tracing::info;

use extractor::config::Config;
use extractor::scanner::TournamentExtractor;

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let Some(config) = Config::from_args(&args) else {
        println!("Usage: tournament-extractor <input.pgn> [--output <file>]");
        println!("Example: tournament-extractor huge_4m_games.pgn");
        std::process::exit(1);
    };

    if let Err(e) = run(&config) {
        eprintln!("ERROR: {e}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    println!(
        "Extracting tournament names from {}...",
        config.input.display()
    );
    info!(
        input = %config.input.display(),
        output = %config.output.display(),
        "Opening files"
    );

    let mut extractor = TournamentExtractor::open(&config.input, &config.output)?;
    let summary = extractor.extract()?;

    println!("SUCCESS!");
    println!("Total games processed: {}", summary.games_processed);
    println!("Unique tournaments found: {}", summary.unique_tournaments);
    println!("Time taken: {} seconds", summary.elapsed.as_secs());
    println!("Output: {}", config.output.display());

    Ok(())
}
