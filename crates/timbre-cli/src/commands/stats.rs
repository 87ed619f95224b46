use anyhow::{Context, Result};
use std::collections::HashMap;
use timbre_core::{ArtistCatalog, Config, SongCatalog};
use timbre_search::Vocabulary;

pub fn show_stats(config: &Config) -> Result<()> {
    let songs = SongCatalog::load(&config.song_catalog_path).context("Failed to load song catalog")?;
    let artists =
        ArtistCatalog::load(&config.artist_catalog_path).context("Failed to load artist catalog")?;

    let song_vocab = Vocabulary::build(songs.genre_corpus());
    let artist_vocab = Vocabulary::build(artists.genre_corpus());

    println!("\n📊 Timbre Catalogs\n");
    println!("  Songs:   {} ({})", songs.len(), config.song_catalog_path.display());
    println!("  Artists: {} ({})", artists.len(), config.artist_catalog_path.display());
    println!("  Song genre terms:   {}", song_vocab.len());
    println!("  Artist genre terms: {}", artist_vocab.len());

    let shared = shared_names(songs.iter().map(|t| t.name.as_str()));
    if shared > 0 {
        println!("\n  {} song names are shared by more than one track;", shared);
        println!("  queries use the first match in catalog order.");
    }

    Ok(())
}

/// Number of distinct names that appear more than once.
fn shared_names<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for name in names {
        *counts.entry(name).or_insert(0) += 1;
    }
    counts.values().filter(|&&n| n > 1).count()
}
