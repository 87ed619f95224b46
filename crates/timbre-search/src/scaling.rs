//! Numeric feature scaling.
//!
//! A [`FeatureScaler`] is fitted once over every feature vector in a
//! catalog and then applied to each row. With [`FeatureScaling::Raw`] it is
//! the identity, so scores match unscaled cosine similarity exactly.

use timbre_core::FeatureScaling;

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureScaler {
    policy: FeatureScaling,
    /// Per-dimension `(offset, divisor)`; a zero divisor maps the dimension to 0.
    params: Vec<(f64, f64)>,
}

impl FeatureScaler {
    /// The identity scaler.
    pub fn raw() -> Self {
        Self {
            policy: FeatureScaling::Raw,
            params: Vec::new(),
        }
    }

    /// Fit `policy` over `rows`, all of which must share one dimension.
    pub fn fit(policy: FeatureScaling, rows: &[Vec<f64>]) -> Self {
        let dims = rows.first().map_or(0, Vec::len);
        let params = match policy {
            FeatureScaling::Raw => Vec::new(),
            FeatureScaling::MinMax => (0..dims)
                .map(|d| {
                    let (min, max) = rows.iter().map(|row| row[d]).fold(
                        (f64::INFINITY, f64::NEG_INFINITY),
                        |(lo, hi), v| (lo.min(v), hi.max(v)),
                    );
                    (min, max - min)
                })
                .collect(),
            FeatureScaling::ZScore => {
                let n = rows.len() as f64;
                (0..dims)
                    .map(|d| {
                        let mean = rows.iter().map(|row| row[d]).sum::<f64>() / n;
                        let variance =
                            rows.iter().map(|row| (row[d] - mean).powi(2)).sum::<f64>() / n;
                        (mean, variance.sqrt())
                    })
                    .collect()
            }
        };

        Self { policy, params }
    }

    pub fn policy(&self) -> FeatureScaling {
        self.policy
    }

    /// Map one raw feature vector into the scaled space.
    pub fn scale(&self, raw: &[f64]) -> Vec<f64> {
        if self.policy == FeatureScaling::Raw {
            return raw.to_vec();
        }

        raw.iter()
            .zip(&self.params)
            .map(|(&value, &(offset, divisor))| {
                if divisor == 0.0 || !divisor.is_finite() {
                    0.0
                } else {
                    (value - offset) / divisor
                }
            })
            .collect()
    }
}

impl Default for FeatureScaler {
    fn default() -> Self {
        Self::raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Vec<f64>> {
        vec![vec![0.0, 10.0], vec![5.0, 10.0], vec![10.0, 10.0]]
    }

    #[test]
    fn test_raw_is_identity() {
        let scaler = FeatureScaler::fit(FeatureScaling::Raw, &rows());
        assert_eq!(scaler.scale(&[3.5, -60.0]), vec![3.5, -60.0]);
    }

    #[test]
    fn test_min_max() {
        let scaler = FeatureScaler::fit(FeatureScaling::MinMax, &rows());
        assert_eq!(scaler.scale(&[5.0, 10.0]), vec![0.5, 0.0]);
        assert_eq!(scaler.scale(&[10.0, 10.0]), vec![1.0, 0.0]);
    }

    #[test]
    fn test_z_score() {
        let scaler = FeatureScaler::fit(FeatureScaling::ZScore, &rows());
        let scaled = scaler.scale(&[10.0, 10.0]);
        let std = (50.0_f64 / 3.0).sqrt();
        assert!((scaled[0] - 5.0 / std).abs() < 1e-12);
        assert_eq!(scaled[1], 0.0);
    }

    #[test]
    fn test_fit_on_empty_catalog() {
        let scaler = FeatureScaler::fit(FeatureScaling::ZScore, &[]);
        assert!(scaler.scale(&[]).is_empty());
    }
}
