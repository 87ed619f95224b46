use std::cmp::Ordering;

use serde::Serialize;
use timbre_core::{FeatureScaling, Result, SongCatalog, Track};

use crate::index::{CatalogIndex, Ranked};
use crate::recommend::result_window;

const TRACK_URL: &str = "https://open.spotify.com/track/";

/// A recommended song.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongRecommendation {
    pub id: String,
    pub name: String,
    pub artists: String,
    pub release_year: i32,
    pub listen_url: String,
}

impl From<&Track> for SongRecommendation {
    fn from(track: &Track) -> Self {
        Self {
            id: track.id.clone(),
            name: track.name.clone(),
            artists: track.artists.clone(),
            release_year: track.release_year,
            listen_url: format!("{TRACK_URL}{}", track.id),
        }
    }
}

/// Recommends songs similar to a song, by genre and audio features.
#[derive(Debug)]
pub struct SongRecommender {
    index: CatalogIndex<Track>,
}

impl SongRecommender {
    pub fn new(catalog: SongCatalog, scaling: FeatureScaling) -> Self {
        Self {
            index: CatalogIndex::build(catalog, scaling),
        }
    }

    pub fn catalog(&self) -> &SongCatalog {
        self.index.catalog()
    }

    pub fn index(&self) -> &CatalogIndex<Track> {
        &self.index
    }

    /// Rank every song against the first song named `name`.
    ///
    /// Ties on similarity are broken by popularity, then release year, both
    /// descending.
    pub fn rank_songs(&self, name: &str) -> Result<Vec<Ranked<'_, Track>>> {
        self.index.rank_by(name, by_popularity_then_year)
    }

    /// Up to five songs similar to the song named `name`.
    pub fn recommend_songs(&self, name: &str) -> Result<Vec<SongRecommendation>> {
        let ranked = self.rank_songs(name)?;
        Ok(result_window(ranked)
            .map(|r| SongRecommendation::from(r.entry))
            .collect())
    }
}

fn by_popularity_then_year(a: &Track, b: &Track) -> Ordering {
    b.popularity()
        .total_cmp(&a.popularity())
        .then_with(|| b.release_year.cmp(&a.release_year))
}
