//! Similarity search and recommendation for timbre.
//!
//! Turns genre text into term-count vectors, blends genre and audio-feature
//! cosine similarity, and ranks the song and artist catalogs against a
//! query entry to produce recommendations.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod index;
pub mod recommend;
pub mod scaling;
pub mod similarity;
pub mod vectorizer;

pub use index::{CatalogIndex, FeatureSource, Ranked};
pub use recommend::{
    merge_artist_results, ArtistRecommendation, ArtistRecommender, MergePolicy, Recommendations,
    Recommender, SongRecommendation, SongRecommender,
};
pub use scaling::FeatureScaler;
pub use similarity::{cosine, similarity, Profile};
pub use vectorizer::{GenreVector, Vocabulary};
