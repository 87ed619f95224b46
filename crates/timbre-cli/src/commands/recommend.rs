use anyhow::{Context, Result};
use timbre_core::{ArtistCatalog, Config, SongCatalog};
use timbre_search::{ArtistRecommender, Recommender, SongRecommender};

use crate::output;

/// Recommend songs and artists for a song name.
pub fn run_recommend(config: &Config, song: &str, json: bool) -> Result<()> {
    let recommender = Recommender::from_config(config).context("Failed to load catalogs")?;

    match recommender.recommend(song) {
        Ok(recs) if json => output::print_json(&recs),
        Ok(recs) => {
            println!();
            println!("More songs you might like:");
            println!("{}", output::songs_table(&recs.songs));
            println!();
            println!("Other artists you might like:");
            println!("{}", output::artists_table(&recs.artists));
            Ok(())
        }
        Err(e) if e.is_not_found() => {
            println!();
            println!("Oops! {} was not found in the songs library.", song);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Recommend songs only.
pub fn run_songs(config: &Config, song: &str, json: bool) -> Result<()> {
    let catalog = SongCatalog::load(&config.song_catalog_path).context("Failed to load song catalog")?;
    let recommender = SongRecommender::new(catalog, config.feature_scaling);

    match recommender.recommend_songs(song) {
        Ok(songs) if json => output::print_json(&songs),
        Ok(songs) => {
            println!();
            println!("More songs you might like:");
            println!("{}", output::songs_table(&songs));
            Ok(())
        }
        Err(e) if e.is_not_found() => {
            println!();
            println!("Oops! {} was not found in the songs library.", song);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Recommend artists only.
pub fn run_artists(config: &Config, artist: &str, json: bool) -> Result<()> {
    let catalog =
        ArtistCatalog::load(&config.artist_catalog_path).context("Failed to load artist catalog")?;
    let recommender = ArtistRecommender::new(catalog, config.feature_scaling);

    match recommender.recommend_artists(artist) {
        Ok(artists) if json => output::print_json(&artists),
        Ok(artists) => {
            println!();
            println!("Other artists you might like:");
            println!("{}", output::artists_table(&artists));
            Ok(())
        }
        Err(e) if e.is_not_found() => {
            println!();
            println!("Oops! {} was not found in the artists library.", artist);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
