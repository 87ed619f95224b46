//! Blended genre and audio-feature similarity.
//!
//! The score between two entries is the mean of the cosine similarity of
//! their genre vectors and the cosine similarity of their numeric feature
//! vectors. Cosine against a zero vector is 0.

use crate::vectorizer::GenreVector;

/// Everything similarity needs to know about one catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    genres: GenreVector,
    genre_norm: f64,
    features: Vec<f64>,
    feature_norm: f64,
}

impl Profile {
    pub fn new(genres: GenreVector, features: Vec<f64>) -> Self {
        let genre_norm = genres.norm();
        let feature_norm = dot(&features, &features).sqrt();
        Self {
            genres,
            genre_norm,
            features,
            feature_norm,
        }
    }

    pub fn genres(&self) -> &GenreVector {
        &self.genres
    }

    pub fn features(&self) -> &[f64] {
        &self.features
    }

    /// Cosine similarity of the genre vectors.
    pub fn text_similarity(&self, other: &Self) -> f64 {
        cosine(
            self.genres.dot(&other.genres),
            self.genre_norm,
            other.genre_norm,
        )
    }

    /// Cosine similarity of the numeric feature vectors.
    pub fn numeric_similarity(&self, other: &Self) -> f64 {
        cosine(
            dot(&self.features, &other.features),
            self.feature_norm,
            other.feature_norm,
        )
    }
}

/// Cosine from a dot product and the two magnitudes.
///
/// Returns 0 when either magnitude is 0.
pub fn cosine(dot: f64, norm_a: f64, norm_b: f64) -> f64 {
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    let value = dot / (norm_a * norm_b);
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}

/// Blended similarity of two profiles, in `[0, 1]`.
pub fn similarity(a: &Profile, b: &Profile) -> f64 {
    let blended = (a.text_similarity(b) + a.numeric_similarity(b)) / 2.0;
    blended.clamp(0.0, 1.0)
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorizer::Vocabulary;

    const EPSILON: f64 = 1e-9;

    fn vocab() -> Vocabulary {
        Vocabulary::build(["pop rock", "jazz", "dance pop"])
    }

    fn profile(genres: &str, features: &[f64]) -> Profile {
        Profile::new(vocab().vectorize(genres), features.to_vec())
    }

    #[test]
    fn test_cosine_zero_norm_is_zero() {
        assert_eq!(cosine(0.0, 0.0, 3.0), 0.0);
        assert_eq!(cosine(0.0, 2.0, 0.0), 0.0);
    }

    #[test]
    fn test_reflexive() {
        let a = profile("pop rock", &[210.0, 80.0, 0.7, -5.0]);
        assert!((similarity(&a, &a) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_symmetric() {
        let a = profile("pop rock", &[210.0, 80.0, 0.7, -5.0]);
        let b = profile("dance pop pop", &[180.0, 60.0, 0.9, -7.5]);
        assert_eq!(similarity(&a, &b), similarity(&b, &a));
    }

    #[test]
    fn test_empty_genres_use_numeric_half_only() {
        let a = profile("", &[1.0, 2.0]);
        let b = profile("", &[1.0, 2.0]);
        assert_eq!(a.text_similarity(&b), 0.0);
        assert!((similarity(&a, &b) - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_zero_features_use_text_half_only() {
        let a = profile("jazz", &[0.0, 0.0]);
        let b = profile("jazz", &[3.0, 4.0]);
        assert_eq!(a.numeric_similarity(&b), 0.0);
        assert!((similarity(&a, &b) - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_opposed_features_stay_in_range() {
        let a = profile("", &[-1.0, -1.0]);
        let b = profile("", &[1.0, 1.0]);
        assert!((a.numeric_similarity(&b) + 1.0).abs() < EPSILON);
        assert_eq!(similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_shared_genre_raises_text_similarity() {
        let a = profile("pop", &[1.0]);
        let b = profile("pop rock", &[1.0]);
        let c = profile("jazz", &[1.0]);
        assert!(a.text_similarity(&b) > a.text_similarity(&c));
        assert!((a.text_similarity(&b) - 1.0 / 2.0_f64.sqrt()).abs() < EPSILON);
    }
}
