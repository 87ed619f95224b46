//! Song, artist and combined recommenders.
//!
//! Each recommender ranks its whole catalog against the queried entry and
//! returns ranked positions 3 through 7: the first two positions are the
//! query itself and its closest same-named duplicate.

pub mod artists;
pub mod cross;
pub mod songs;

pub use artists::{ArtistRecommendation, ArtistRecommender};
pub use cross::{merge_artist_results, MergePolicy, Recommendations, Recommender};
pub use songs::{SongRecommendation, SongRecommender};

/// Ranked rows skipped before results are taken.
pub const SKIP_TOP: usize = 2;

/// Maximum number of results a recommender returns.
pub const RESULT_LIMIT: usize = 5;

/// Take the result window out of a full ranking.
pub(crate) fn result_window<I: IntoIterator>(ranked: I) -> impl Iterator<Item = I::Item> {
    ranked.into_iter().skip(SKIP_TOP).take(RESULT_LIMIT)
}
