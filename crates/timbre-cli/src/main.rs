use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use timbre_core::{Catalog, SynonymTable};

mod commands;
mod config;

use commands::Session;
use config::{Config, LoggingConfig};

#[derive(Debug, Parser)]
#[command(name = "timbre", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a catalog TOML file (default: the bundled sample catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Path to a synonym table TOML file (default: the built-in table)
    #[arg(long, global = true)]
    synonyms: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Fuzzy-search the catalog
    ///
    /// The query is lowercased, trimmed and widened with synonyms (so "lofi"
    /// also finds "Lo-Fi" and "study" finds focus music). Each track is scored
    /// on title, artist, genre and mood; tracks scoring above the relevance
    /// floor are listed best first. An empty query lists the whole catalog.
    Search {
        /// Search text
        query: String,

        /// Only search tracks in this mood (e.g. chill)
        #[arg(long)]
        mood: Option<String>,

        /// Show each track's relevance score
        #[arg(long)]
        explain: bool,
    },
    /// Find the tracks that sound most like a given track
    ///
    /// Similarity is the cosine of the angle between audio feature vectors
    /// (energy, valence, danceability, acousticness, instrumentalness,
    /// loudness and tempo).
    Similar {
        /// Track id
        id: String,

        /// How many tracks to show (default: similar_limit from config)
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },
    /// Summarize a playlist: averages, tempo spread, distributions and
    /// consistency
    Analyze {
        /// Track ids making up the playlist (default: the whole catalog)
        ids: Vec<String>,

        /// Only include tracks in this mood
        #[arg(long)]
        mood: Option<String>,
    },
    /// List moods and how many tracks each has
    Moods,
    /// Show the terms a query expands to
    Expand {
        /// Search text
        query: String,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Create the config file with defaults if missing
    Init,
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?.with_overrides(cli.catalog, cli.synonyms);
    setup_logging(&config.logging, cli.verbose)?;
    log::debug!("Effective configuration: {:?}", config);

    if let Commands::Config { action } = &cli.command {
        return match action {
            ConfigAction::Show => commands::config::show_config(&config),
            ConfigAction::Init => commands::config::init_config(),
            ConfigAction::Path => commands::config::show_path(),
            ConfigAction::Example => commands::config::show_example(),
        };
    }

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => Catalog::builtin()?,
    };

    let loaded;
    let synonyms = match &config.synonyms_path {
        Some(path) => {
            loaded = SynonymTable::load(path)
                .with_context(|| format!("Failed to load synonyms {}", path.display()))?;
            &loaded
        }
        None => SynonymTable::builtin(),
    };

    let session = Session {
        catalog: &catalog,
        synonyms,
        json: cli.json,
    };

    match cli.command {
        Commands::Search {
            query,
            mood,
            explain,
        } => {
            commands::run_search(&session, &query, mood.as_deref(), explain)?;
        }
        Commands::Similar { id, limit } => {
            let limit = limit.unwrap_or(config.similar_limit);
            commands::run_similar(&session, &id, limit)?;
        }
        Commands::Analyze { ids, mood } => {
            commands::run_analyze(&session, &ids, mood.as_deref())?;
        }
        Commands::Moods => {
            commands::list_moods(&session)?;
        }
        Commands::Expand { query } => {
            commands::show_expansion(&session, &query)?;
        }
        Commands::Config { .. } => {}
    }

    Ok(())
}

/// Install the twyg logger. Each `-v` raises the configured level one step.
fn setup_logging(logging: &LoggingConfig, verbose: u8) -> Result<()> {
    let base = match logging.level.to_lowercase().as_str() {
        "error" => 0,
        "warn" | "warning" => 1,
        "info" => 2,
        "debug" => 3,
        "trace" => 4,
        other => anyhow::bail!(
            "Unknown log level: {}\n\nValid levels: error, warn, info, debug, trace",
            other
        ),
    };
    let level = match base + usize::from(verbose) {
        0 => twyg::LogLevel::Error,
        1 => twyg::LogLevel::Warn,
        2 => twyg::LogLevel::Info,
        3 => twyg::LogLevel::Debug,
        _ => twyg::LogLevel::Trace,
    };

    let opts = twyg::OptsBuilder::new()
        .coloured(logging.coloured)
        .level(level)
        .build()
        .map_err(|e| anyhow::anyhow!("Invalid logging options: {:?}", e))?;
    twyg::setup(opts).map_err(|e| anyhow::anyhow!("Failed to set up logging: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_search_with_globals() {
        let cli = Cli::try_parse_from([
            "timbre", "search", "lofi", "--mood", "focus", "--json", "-vv",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Search {
                query,
                mood,
                explain,
            } => {
                assert_eq!(query, "lofi");
                assert_eq!(mood.as_deref(), Some("focus"));
                assert!(!explain);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_analyze_ids() {
        let cli = Cli::try_parse_from(["timbre", "analyze", "t01", "t02"]).unwrap();
        match cli.command {
            Commands::Analyze { ids, mood } => {
                assert_eq!(ids, vec!["t01", "t02"]);
                assert!(mood.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_similar_limit() {
        let cli = Cli::try_parse_from(["timbre", "similar", "t09", "-n", "3"]).unwrap();
        match cli.command {
            Commands::Similar { id, limit } => {
                assert_eq!(id, "t09");
                assert_eq!(limit, Some(3));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
