use serde::Deserialize;

use crate::error::Result;
use crate::model::CatalogEntry;

/// The numeric audio features of a track, kept as raw values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AudioFeatures {
    /// Length in seconds.
    pub duration: f64,
    pub popularity: f64,
    pub danceability: f64,
    pub energy: f64,
    /// Pitch class, 0 = C.
    pub key: f64,
    /// Overall loudness in dB (usually negative).
    pub loudness: f64,
    /// 1 = major, 0 = minor.
    pub mode: f64,
    pub speechiness: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub valence: f64,
    /// Beats per minute.
    pub tempo: f64,
}

impl AudioFeatures {
    /// Number of numeric dimensions a track contributes to similarity.
    pub const DIMENSIONS: usize = 13;

    /// The features in a fixed order, ready for vector arithmetic.
    pub fn to_array(&self) -> [f64; Self::DIMENSIONS] {
        [
            self.duration,
            self.popularity,
            self.danceability,
            self.energy,
            self.key,
            self.loudness,
            self.mode,
            self.speechiness,
            self.acousticness,
            self.instrumentalness,
            self.liveness,
            self.valence,
            self.tempo,
        ]
    }
}

/// A song in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub id: String,
    pub name: String,

    /// Contributing artists exactly as stored: comma-separated names.
    pub artists: String,

    pub release_year: i32,
    pub genres: String,
    pub features: AudioFeatures,
}

impl Track {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            artists: String::new(),
            release_year: 0,
            genres: String::new(),
            features: AudioFeatures::default(),
        }
    }

    #[must_use]
    pub fn with_artists(mut self, artists: impl Into<String>) -> Self {
        self.artists = artists.into();
        self
    }

    #[must_use]
    pub fn with_release_year(mut self, year: i32) -> Self {
        self.release_year = year;
        self
    }

    #[must_use]
    pub fn with_genres(mut self, genres: impl Into<String>) -> Self {
        self.genres = genres.into();
        self
    }

    #[must_use]
    pub fn with_features(mut self, features: AudioFeatures) -> Self {
        self.features = features;
        self
    }

    pub fn popularity(&self) -> f64 {
        self.features.popularity
    }

    /// Split the stored artists field into individual names.
    ///
    /// Names are split on commas and trimmed; empty pieces are dropped.
    pub fn artist_names(&self) -> Vec<&str> {
        self.artists
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect()
    }
}

/// One row of the song catalog CSV.
///
/// Columns not named here (such as `id_artists`) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackRecord {
    pub id: String,
    pub name: String,
    pub artists: String,
    pub release_year: i32,
    #[serde(rename = "duration_s")]
    pub duration: f64,
    pub popularity: f64,
    pub danceability: f64,
    pub energy: f64,
    pub key: f64,
    pub loudness: f64,
    pub mode: f64,
    pub speechiness: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub valence: f64,
    pub tempo: f64,
    #[serde(default)]
    pub genres: String,
}

impl CatalogEntry for Track {
    const ENTITY: &'static str = "songs";

    type Record = TrackRecord;

    fn from_record(r: TrackRecord) -> Result<Self> {
        Ok(Self {
            id: r.id,
            name: r.name,
            artists: r.artists,
            release_year: r.release_year,
            genres: r.genres,
            features: AudioFeatures {
                duration: r.duration,
                popularity: r.popularity,
                danceability: r.danceability,
                energy: r.energy,
                key: r.key,
                loudness: r.loudness,
                mode: r.mode,
                speechiness: r.speechiness,
                acousticness: r.acousticness,
                instrumentalness: r.instrumentalness,
                liveness: r.liveness,
                valence: r.valence,
                tempo: r.tempo,
            },
        })
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn genres(&self) -> &str {
        &self.genres
    }
}
