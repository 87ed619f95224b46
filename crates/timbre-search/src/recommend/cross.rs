use std::collections::HashSet;

use serde::Serialize;
use timbre_core::{ArtistCatalog, Config, FeatureScaling, Result, SongCatalog};

use crate::recommend::{
    ArtistRecommendation, ArtistRecommender, SongRecommendation, SongRecommender, RESULT_LIMIT,
};

/// How per-artist recommendation lists are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergePolicy {
    /// Keep every entry, including artists recommended more than once.
    #[default]
    Concatenate,
    /// Keep only the first occurrence of each artist identifier.
    Dedupe,
}

impl MergePolicy {
    pub fn from_dedupe(dedupe: bool) -> Self {
        if dedupe {
            Self::Dedupe
        } else {
            Self::Concatenate
        }
    }
}

/// Songs and artists recommended for one song.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendations {
    pub songs: Vec<SongRecommendation>,
    pub artists: Vec<ArtistRecommendation>,
}

/// Combine per-artist lists into one list ordered by popularity, then
/// followers. The result is not truncated.
pub fn merge_artist_results<I>(lists: I, policy: MergePolicy) -> Vec<ArtistRecommendation>
where
    I: IntoIterator<Item = Vec<ArtistRecommendation>>,
{
    let mut merged: Vec<ArtistRecommendation> = lists.into_iter().flatten().collect();

    if policy == MergePolicy::Dedupe {
        let mut seen = HashSet::new();
        merged.retain(|rec| seen.insert(rec.id.clone()));
    }

    merged.sort_by(ArtistRecommendation::by_popularity);
    merged
}

/// The query entry point: similar songs plus artists similar to the song's
/// contributing artists.
#[derive(Debug)]
pub struct Recommender {
    songs: SongRecommender,
    artists: ArtistRecommender,
    merge: MergePolicy,
}

impl Recommender {
    pub fn new(songs: SongCatalog, artists: ArtistCatalog, scaling: FeatureScaling) -> Self {
        Self {
            songs: SongRecommender::new(songs, scaling),
            artists: ArtistRecommender::new(artists, scaling),
            merge: MergePolicy::default(),
        }
    }

    /// Load both catalogs from the paths in `config` and index them.
    pub fn from_config(config: &Config) -> Result<Self> {
        let songs = SongCatalog::load(&config.song_catalog_path)?;
        let artists = ArtistCatalog::load(&config.artist_catalog_path)?;
        Ok(Self::new(songs, artists, config.feature_scaling)
            .with_merge_policy(MergePolicy::from_dedupe(config.dedupe_artists)))
    }

    #[must_use]
    pub fn with_merge_policy(mut self, merge: MergePolicy) -> Self {
        self.merge = merge;
        self
    }

    pub fn songs(&self) -> &SongRecommender {
        &self.songs
    }

    pub fn artists(&self) -> &ArtistRecommender {
        &self.artists
    }

    pub fn merge_policy(&self) -> MergePolicy {
        self.merge
    }

    /// Per-artist recommendations for every contributing artist of the
    /// first song named `song_name`, in credit order.
    ///
    /// A contributing artist missing from the artist catalog yields an
    /// empty list.
    pub fn artist_recommendations(&self, song_name: &str) -> Result<Vec<Vec<ArtistRecommendation>>> {
        let position = self.songs.catalog().require(song_name)?;
        let Some(track) = self.songs.catalog().get(position) else {
            return Ok(Vec::new());
        };

        let names = track.artist_names();
        log::debug!(
            "Recommending artists for '{}' from {} contributing artist(s)",
            song_name,
            names.len()
        );

        let mut lists = Vec::with_capacity(names.len());
        for name in names {
            match self.artists.recommend_artists(name) {
                Ok(list) => lists.push(list),
                Err(e) if e.is_not_found() => {
                    log::debug!("Contributing artist '{}' is not in the artist catalog", name);
                    lists.push(Vec::new());
                }
                Err(e) => return Err(e),
            }
        }

        Ok(lists)
    }

    /// Songs similar to `song_name` and the top artists similar to its
    /// contributing artists.
    pub fn recommend(&self, song_name: &str) -> Result<Recommendations> {
        let songs = self.songs.recommend_songs(song_name)?;

        let mut artists = merge_artist_results(self.artist_recommendations(song_name)?, self.merge);
        artists.truncate(RESULT_LIMIT);

        log::info!(
            "Recommended {} songs and {} artists for '{}'",
            songs.len(),
            artists.len(),
            song_name
        );

        Ok(Recommendations { songs, artists })
    }
}
