use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};

/// How numeric feature vectors are rescaled before cosine similarity.
///
/// `Raw` leaves feature values untouched, so large-magnitude features
/// (duration, followers) dominate the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureScaling {
    #[default]
    Raw,
    /// Rescale each feature to `[0, 1]` over the catalog.
    MinMax,
    /// Center each feature on the catalog mean, in units of standard deviation.
    ZScore,
}

impl FeatureScaling {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::MinMax => "min-max",
            Self::ZScore => "z-score",
        }
    }
}

impl fmt::Display for FeatureScaling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureScaling {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "raw" => Ok(Self::Raw),
            "min-max" | "minmax" => Ok(Self::MinMax),
            "z-score" | "zscore" => Ok(Self::ZScore),
            other => Err(format!(
                "unknown feature scaling '{other}' (expected raw, min-max or z-score)"
            )),
        }
    }
}

/// Configuration for timbre.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (TIMBRE_* prefix)
/// 3. Config file (~/.config/timbre/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the song catalog CSV.
    ///
    /// Can be set via:
    /// - CLI: --songs /path/to/song_library.csv
    /// - ENV: TIMBRE_SONG_CATALOG_PATH
    /// - Config: song_catalog_path = "/path/to/song_library.csv"
    #[serde(default = "default_song_catalog_path")]
    pub song_catalog_path: PathBuf,

    /// Path to the artist catalog CSV.
    ///
    /// Can be set via:
    /// - CLI: --artists /path/to/artist_library.csv
    /// - ENV: TIMBRE_ARTIST_CATALOG_PATH
    /// - Config: artist_catalog_path = "/path/to/artist_library.csv"
    #[serde(default = "default_artist_catalog_path")]
    pub artist_catalog_path: PathBuf,

    /// Numeric feature scaling policy. Defaults to `raw`.
    #[serde(default)]
    pub feature_scaling: FeatureScaling,

    /// Drop repeated artists when merging per-artist recommendations.
    #[serde(default)]
    pub dedupe_artists: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            song_catalog_path: default_song_catalog_path(),
            artist_catalog_path: default_artist_catalog_path(),
            feature_scaling: FeatureScaling::default(),
            dedupe_artists: false,
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/timbre/config.toml
    /// Reads environment variables with TIMBRE_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("timbre");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// Apply overrides given on the command line.
    #[must_use]
    pub fn with_overrides(
        mut self,
        songs: Option<PathBuf>,
        artists: Option<PathBuf>,
        scaling: Option<FeatureScaling>,
        dedupe_artists: bool,
    ) -> Self {
        if let Some(path) = songs {
            self.song_catalog_path = path;
        }
        if let Some(path) = artists {
            self.artist_catalog_path = path;
        }
        if let Some(scaling) = scaling {
            self.feature_scaling = scaling;
        }
        self.dedupe_artists |= dedupe_artists;
        self
    }
}

fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("timbre")
}

fn default_song_catalog_path() -> PathBuf {
    data_dir().join("song_library.csv")
}

fn default_artist_catalog_path() -> PathBuf {
    data_dir().join("artist_library.csv")
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/timbre/config.toml
/// - macOS: ~/Library/Application Support/timbre/config.toml
/// - Windows: %APPDATA%\timbre\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("timbre")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Timbre Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (TIMBRE_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Song catalog CSV
#
# Columns: id, name, artists, release_year, duration_s, popularity,
# danceability, energy, key, loudness, mode, speechiness, acousticness,
# instrumentalness, liveness, valence, tempo, genres
#
# Can also be set via:
# - CLI: timbre --songs /path/to/song_library.csv recommend "Song"
# - Environment: TIMBRE_SONG_CATALOG_PATH=/path/to/song_library.csv
#song_catalog_path = "/path/to/song_library.csv"

# Artist catalog CSV
#
# Columns: id, name, followers, popularity, genres
#
# Can also be set via:
# - CLI: timbre --artists /path/to/artist_library.csv recommend "Song"
# - Environment: TIMBRE_ARTIST_CATALOG_PATH=/path/to/artist_library.csv
#artist_catalog_path = "/path/to/artist_library.csv"

# Numeric feature scaling: "raw", "min-max" or "z-score"
#
# "raw" compares audio features exactly as stored.
feature_scaling = "raw"

# Remove repeated artists when combining recommendations for a song
# with several contributing artists.
dedupe_artists = false
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}
