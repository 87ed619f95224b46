use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use timbre_core::{Config, FeatureScaling};

mod commands;
mod output;

#[derive(Debug, Parser)]
#[command(name = "timbre", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the song catalog CSV (default: ~/.local/share/timbre/song_library.csv)
    #[arg(long, global = true)]
    songs: Option<PathBuf>,

    /// Path to the artist catalog CSV (default: ~/.local/share/timbre/artist_library.csv)
    #[arg(long, global = true)]
    artists: Option<PathBuf>,

    /// Numeric feature scaling: raw, min-max or z-score
    #[arg(long, global = true)]
    scaling: Option<FeatureScaling>,

    /// Drop repeated artists when merging recommendations across a song's artists
    #[arg(long, global = true)]
    dedupe_artists: bool,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Recommend songs and artists similar to a song
    ///
    /// Ranks the whole song catalog against the first song with exactly this
    /// name, blending genre similarity with audio-feature similarity, and
    /// lists five similar songs. For each artist credited on the song, the
    /// artist catalog is ranked the same way; the combined artist list is
    /// ordered by popularity and followers and the top five are shown.
    ///
    /// Song names are matched exactly, including case.
    Recommend {
        /// Song name
        song: String,

        /// Print JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Recommend songs similar to a song
    Songs {
        /// Song name
        song: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Recommend artists similar to an artist
    Artists {
        /// Artist name
        artist: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show catalog statistics
    Stats,
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
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults
    Init,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Commands::Config { action } = &cli.command {
        return match action {
            ConfigAction::Show => commands::config::show_config(),
            ConfigAction::Path => commands::config::show_path(),
            ConfigAction::Example => commands::config::show_example(),
            ConfigAction::Init => commands::config::init_config(),
        };
    }

    let config =
        Config::load()?.with_overrides(cli.songs, cli.artists, cli.scaling, cli.dedupe_artists);

    match cli.command {
        Commands::Recommend { song, json } => {
            commands::run_recommend(&config, &song, json)?;
        }
        Commands::Songs { song, json } => {
            commands::run_songs(&config, &song, json)?;
        }
        Commands::Artists { artist, json } => {
            commands::run_artists(&config, &artist, json)?;
        }
        Commands::Stats => {
            commands::show_stats(&config)?;
        }
        Commands::Config { .. } => {}
    }

    Ok(())
}
