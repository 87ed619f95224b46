use serde::Deserialize;

use crate::error::{Error, Result};
use crate::model::{whole_count, CatalogEntry};

/// A musical artist (person or group) in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub genres: String,
    pub followers: u64,

    /// Popularity score, typically 0 to 100.
    pub popularity: u32,
}

impl Artist {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            genres: String::new(),
            followers: 0,
            popularity: 0,
        }
    }

    #[must_use]
    pub fn with_genres(mut self, genres: impl Into<String>) -> Self {
        self.genres = genres.into();
        self
    }

    #[must_use]
    pub fn with_followers(mut self, followers: u64) -> Self {
        self.followers = followers;
        self
    }

    #[must_use]
    pub fn with_popularity(mut self, popularity: u32) -> Self {
        self.popularity = popularity;
        self
    }

    /// The numeric vector used for similarity: `[followers, popularity]`.
    #[allow(clippy::cast_precision_loss)]
    pub fn feature_array(&self) -> [f64; 2] {
        [self.followers as f64, f64::from(self.popularity)]
    }
}

/// One row of the artist catalog CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistRecord {
    pub id: String,
    pub name: String,
    pub followers: f64,
    pub popularity: f64,
    #[serde(default)]
    pub genres: String,
}

impl CatalogEntry for Artist {
    const ENTITY: &'static str = "artists";

    type Record = ArtistRecord;

    fn from_record(r: ArtistRecord) -> Result<Self> {
        let followers = whole_count(&r.id, "followers", r.followers)?;
        let popularity = whole_count(&r.id, "popularity", r.popularity)?;
        let popularity = u32::try_from(popularity).map_err(|_| {
            Error::InvalidData(format!(
                "popularity for {} is out of range, got {}",
                r.id, r.popularity
            ))
        })?;
        Ok(Self {
            followers,
            popularity,
            id: r.id,
            name: r.name,
            genres: r.genres,
        })
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn genres(&self) -> &str {
        &self.genres
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artist_builder() {
        let artist = Artist::new("a1", "Miles Davis")
            .with_genres("jazz bebop")
            .with_followers(3_000_000)
            .with_popularity(72);

        assert_eq!(artist.name, "Miles Davis");
        assert_eq!(artist.feature_array(), [3_000_000.0, 72.0]);
    }

    #[test]
    fn test_from_record_accepts_float_counts() {
        let record = ArtistRecord {
            id: "a1".to_string(),
            name: "Nina Simone".to_string(),
            followers: 1500.0,
            popularity: 64.0,
            genres: "jazz soul".to_string(),
        };
        let artist = Artist::from_record(record).unwrap();
        assert_eq!(artist.followers, 1500);
        assert_eq!(artist.popularity, 64);
    }

    #[test]
    fn test_from_record_rejects_out_of_range_popularity() {
        let record = ArtistRecord {
            id: "a1".to_string(),
            name: "Overflow".to_string(),
            followers: 10.0,
            popularity: 5_000_000_000.0,
            genres: String::new(),
        };
        let err = Artist::from_record(record).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[test]
    fn test_from_record_rejects_negative_followers() {
        let record = ArtistRecord {
            id: "a1".to_string(),
            name: "Nobody".to_string(),
            followers: -1.0,
            popularity: 10.0,
            genres: String::new(),
        };
        assert!(Artist::from_record(record).is_err());
    }
}
