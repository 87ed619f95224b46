//! Read-only, in-memory song and artist catalogs.
//!
//! A catalog is loaded once from CSV and never mutated afterwards. Rows are
//! addressed by position; names are display attributes and may repeat, so
//! name lookups return every match in catalog order.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::{Artist, CatalogEntry, Track};

/// An immutable table of catalog entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog<T> {
    rows: Vec<T>,
}

/// The song catalog.
pub type SongCatalog = Catalog<Track>;

/// The artist catalog.
pub type ArtistCatalog = Catalog<Artist>;

impl<T: CatalogEntry> Catalog<T> {
    /// Build a catalog from rows already in memory.
    pub fn from_rows(rows: Vec<T>) -> Self {
        warn_duplicate_ids(&rows);
        Self { rows }
    }

    /// Load a catalog from a CSV file with a header row.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_reader(file)?;
        log::info!(
            "Loaded {} {} from {}",
            catalog.len(),
            T::ENTITY,
            path.display()
        );
        Ok(catalog)
    }

    /// Load a catalog from any CSV source with a header row.
    ///
    /// Empty fields are read as empty strings, never as missing values.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let mut rows = Vec::new();
        for record in csv_reader.deserialize::<T::Record>() {
            rows.push(T::from_record(record?)?);
        }

        Ok(Self::from_rows(rows))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.rows.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }

    /// Positions of every row whose name equals `name` exactly.
    pub fn find_by_name(&self, name: &str) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.name() == name)
            .map(|(index, _)| index)
            .collect()
    }

    /// Position of the first row whose name equals `name` exactly.
    pub fn position_by_name(&self, name: &str) -> Option<usize> {
        self.rows.iter().position(|row| row.name() == name)
    }

    /// The first row whose name equals `name` exactly.
    pub fn first_by_name(&self, name: &str) -> Option<&T> {
        self.position_by_name(name).map(|index| &self.rows[index])
    }

    /// Like [`position_by_name`](Self::position_by_name), but a miss is an
    /// [`Error::NotFound`].
    pub fn require(&self, name: &str) -> Result<usize> {
        self.position_by_name(name).ok_or_else(|| Error::NotFound {
            entity: T::ENTITY,
            name: name.to_string(),
        })
    }

    /// All genre strings in catalog order.
    pub fn genre_corpus(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.genres())
    }
}

impl<'a, T> IntoIterator for &'a Catalog<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

fn warn_duplicate_ids<T: CatalogEntry>(rows: &[T]) {
    let mut seen = HashSet::with_capacity(rows.len());
    let duplicates = rows.iter().filter(|row| !seen.insert(row.id())).count();
    if duplicates > 0 {
        log::warn!("{} {} rows share an identifier", duplicates, T::ENTITY);
    }
}
