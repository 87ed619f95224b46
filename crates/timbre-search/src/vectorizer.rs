//! Genre text vectorizing.
//!
//! A [`Vocabulary`] is built once from every genre string in a catalog and
//! frozen. Any genre string can then be turned into a sparse term-count
//! [`GenreVector`] over that vocabulary; tokens the vocabulary has never
//! seen are dropped.

use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Tokens shorter than this many characters are discarded.
const MIN_TOKEN_CHARS: usize = 2;

/// Split genre text into lowercase tokens.
///
/// Tokens are maximal runs of alphanumeric characters, so brackets, quotes,
/// commas and whitespace all act as separators.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_lowercase)
}

/// A frozen mapping from genre token to column index.
///
/// Indices follow sorted token order, so building twice over the same
/// corpus yields the same mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build a vocabulary from every token in `corpus`.
    pub fn build<'a, I>(corpus: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let terms: BTreeSet<String> = corpus.into_iter().flat_map(tokenize).collect();
        let terms: Vec<String> = terms.into_iter().collect();
        let index = terms
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();

        Self { terms, index }
    }

    /// Number of distinct terms, which is the dimension of every vector.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Count the known tokens of `text`.
    pub fn vectorize(&self, text: &str) -> GenreVector {
        let mut counts: BTreeMap<usize, u32> = BTreeMap::new();
        for token in tokenize(text) {
            if let Some(i) = self.index.get(&token) {
                *counts.entry(*i).or_insert(0) += 1;
            }
        }

        GenreVector {
            dim: self.len(),
            entries: counts.into_iter().collect(),
        }
    }
}

/// A sparse term-count vector: `(column, count)` pairs sorted by column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreVector {
    dim: usize,
    entries: Vec<(usize, u32)>,
}

impl GenreVector {
    /// Dimension of the vector (the vocabulary size).
    pub fn len(&self) -> usize {
        self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.dim == 0
    }

    /// True when no known token was counted.
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(usize, u32)] {
        &self.entries
    }

    pub fn to_dense(&self) -> Vec<u32> {
        let mut dense = vec![0; self.dim];
        for &(column, count) in &self.entries {
            dense[column] = count;
        }
        dense
    }

    pub fn dot(&self, other: &Self) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (ca, va) = self.entries[i];
            let (cb, vb) = other.entries[j];
            match ca.cmp(&cb) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += f64::from(va) * f64::from(vb);
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }
}
