use std::cmp::Ordering;

use serde::Serialize;
use timbre_core::{Artist, ArtistCatalog, FeatureScaling, Result};

use crate::index::{CatalogIndex, Ranked};
use crate::recommend::result_window;

const ARTIST_URL: &str = "https://open.spotify.com/artist/";

/// A recommended artist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistRecommendation {
    pub id: String,
    pub name: String,
    pub followers: u64,
    pub popularity: u32,
    pub view_url: String,
}

impl From<&Artist> for ArtistRecommendation {
    fn from(artist: &Artist) -> Self {
        Self {
            id: artist.id.clone(),
            name: artist.name.clone(),
            followers: artist.followers,
            popularity: artist.popularity,
            view_url: format!("{ARTIST_URL}{}", artist.id),
        }
    }
}

impl ArtistRecommendation {
    /// Presentation order: popularity, then followers, both descending.
    pub fn by_popularity(a: &Self, b: &Self) -> Ordering {
        b.popularity
            .cmp(&a.popularity)
            .then_with(|| b.followers.cmp(&a.followers))
    }
}

/// Recommends artists similar to an artist, by genre, followers and
/// popularity.
#[derive(Debug)]
pub struct ArtistRecommender {
    index: CatalogIndex<Artist>,
}

impl ArtistRecommender {
    pub fn new(catalog: ArtistCatalog, scaling: FeatureScaling) -> Self {
        Self {
            index: CatalogIndex::build(catalog, scaling),
        }
    }

    pub fn catalog(&self) -> &ArtistCatalog {
        self.index.catalog()
    }

    pub fn index(&self) -> &CatalogIndex<Artist> {
        &self.index
    }

    /// Rank every artist against the first artist named `name`.
    ///
    /// Ties on similarity are broken by popularity, then followers, both
    /// descending.
    pub fn rank_artists(&self, name: &str) -> Result<Vec<Ranked<'_, Artist>>> {
        self.index.rank_by(name, |a, b| {
            b.popularity
                .cmp(&a.popularity)
                .then_with(|| b.followers.cmp(&a.followers))
        })
    }

    /// Up to five artists similar to the artist named `name`.
    ///
    /// Selection follows similarity, but the returned list is ordered by
    /// popularity and then followers.
    pub fn recommend_artists(&self, name: &str) -> Result<Vec<ArtistRecommendation>> {
        let ranked = self.rank_artists(name)?;
        let mut selected: Vec<ArtistRecommendation> = result_window(ranked)
            .map(|r| ArtistRecommendation::from(r.entry))
            .collect();
        selected.sort_by(ArtistRecommendation::by_popularity);
        Ok(selected)
    }
}
