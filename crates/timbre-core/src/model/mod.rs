pub mod artist;
pub mod track;

pub use artist::{Artist, ArtistRecord};
pub use track::{AudioFeatures, Track, TrackRecord};

use crate::error::{Error, Result};

/// A row type that can live in a [`Catalog`](crate::Catalog).
///
/// Every entry has a unique identifier, a display name that is *not*
/// unique, and a free-text genre field.
pub trait CatalogEntry: Sized {
    /// Plural entity name used in messages ("songs", "artists").
    const ENTITY: &'static str;

    /// The flat storage row this entry is read from.
    type Record: serde::de::DeserializeOwned;

    fn from_record(record: Self::Record) -> Result<Self>;

    fn id(&self) -> &str;

    fn name(&self) -> &str;

    fn genres(&self) -> &str;
}

/// Convert a count column to an integer.
///
/// Exported catalogs sometimes write counts as `1234.0`, so whole-valued
/// floats are accepted.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn whole_count(id: &str, field: &str, value: f64) -> Result<u64> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
        return Err(Error::InvalidData(format!(
            "{field} for {id} must be a non-negative whole number, got {value}"
        )));
    }
    Ok(value as u64)
}
