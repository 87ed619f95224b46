//! Per-catalog similarity index.
//!
//! Built once per catalog: freezes the genre vocabulary, fits the feature
//! scaler and precomputes one [`Profile`] per row. Queries score every row
//! against a query row from scratch; nothing is cached between queries.

use std::cmp::Ordering;

use rayon::prelude::*;
use timbre_core::model::CatalogEntry;
use timbre_core::{Artist, Catalog, FeatureScaling, Result, Track};

use crate::scaling::FeatureScaler;
use crate::similarity::{similarity, Profile};
use crate::vectorizer::Vocabulary;

/// The raw numeric vector an entry contributes to similarity.
pub trait FeatureSource {
    fn feature_vector(&self) -> Vec<f64>;
}

impl FeatureSource for Track {
    fn feature_vector(&self) -> Vec<f64> {
        self.features.to_array().to_vec()
    }
}

impl FeatureSource for Artist {
    fn feature_vector(&self) -> Vec<f64> {
        self.feature_array().to_vec()
    }
}

/// One catalog row with its similarity to the current query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranked<'a, T> {
    /// Position of the row in its catalog.
    pub index: usize,
    pub entry: &'a T,
    pub similarity: f64,
}

#[derive(Debug)]
pub struct CatalogIndex<T> {
    catalog: Catalog<T>,
    vocabulary: Vocabulary,
    scaler: FeatureScaler,
    profiles: Vec<Profile>,
}

impl<T> CatalogIndex<T>
where
    T: CatalogEntry + FeatureSource + Sync,
{
    pub fn build(catalog: Catalog<T>, scaling: FeatureScaling) -> Self {
        let vocabulary = Vocabulary::build(catalog.genre_corpus());

        let raw: Vec<Vec<f64>> = catalog.iter().map(FeatureSource::feature_vector).collect();
        let scaler = FeatureScaler::fit(scaling, &raw);

        let profiles = catalog
            .rows()
            .par_iter()
            .zip(raw.par_iter())
            .map(|(row, features)| {
                Profile::new(vocabulary.vectorize(row.genres()), scaler.scale(features))
            })
            .collect();

        log::info!(
            "Indexed {} {}: {} genre terms, {} feature scaling",
            catalog.len(),
            T::ENTITY,
            vocabulary.len(),
            scaler.policy()
        );

        Self {
            catalog,
            vocabulary,
            scaler,
            profiles,
        }
    }

    pub fn catalog(&self) -> &Catalog<T> {
        &self.catalog
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn scaler(&self) -> &FeatureScaler {
        &self.scaler
    }

    pub fn profile(&self, index: usize) -> Option<&Profile> {
        self.profiles.get(index)
    }

    /// Similarity of every row to the row at `query`, in catalog order.
    pub fn scores(&self, query: usize) -> Vec<f64> {
        let Some(target) = self.profiles.get(query) else {
            return Vec::new();
        };
        self.profiles
            .par_iter()
            .map(|profile| similarity(target, profile))
            .collect()
    }

    /// Rank the whole catalog against the first row named `name`.
    ///
    /// Rows are ordered by similarity, highest first; equal scores fall
    /// back to `tie_break`, and rows still equal keep catalog order.
    pub fn rank_by<F>(&self, name: &str, tie_break: F) -> Result<Vec<Ranked<'_, T>>>
    where
        F: Fn(&T, &T) -> Ordering,
    {
        let query = self.catalog.require(name)?;
        let matches = self.catalog.find_by_name(name).len();
        if matches > 1 {
            log::debug!(
                "'{}' names {} {}; using the first (row {})",
                name,
                matches,
                T::ENTITY,
                query
            );
        }
        log::debug!(
            "Ranking {} {} against '{}' (row {})",
            self.catalog.len(),
            T::ENTITY,
            name,
            query
        );

        let mut ranked: Vec<Ranked<'_, T>> = self
            .catalog
            .iter()
            .zip(self.scores(query))
            .enumerate()
            .map(|(index, (entry, similarity))| Ranked {
                index,
                entry,
                similarity,
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.similarity
                .total_cmp(&a.similarity)
                .then_with(|| tie_break(a.entry, b.entry))
        });

        Ok(ranked)
    }
}
