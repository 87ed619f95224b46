//! Core catalog model for timbre.
//!
//! This crate defines the song and artist records, the read-only
//! in-memory catalogs they are loaded into, and the shared error and
//! configuration types.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod model;

pub use catalog::{ArtistCatalog, Catalog, SongCatalog};
pub use config::{Config, FeatureScaling};
pub use error::{Error, Result};
pub use model::{Artist, AudioFeatures, Track};
