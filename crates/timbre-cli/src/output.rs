//! Table and JSON rendering for recommendations.

use anyhow::Result;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use timbre_search::{ArtistRecommendation, SongRecommendation};

#[derive(Tabled)]
struct SongRow<'a> {
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "Artists")]
    artists: &'a str,
    #[tabled(rename = "Release Year")]
    release_year: i32,
    #[tabled(rename = "Listen on Spotify")]
    listen_url: &'a str,
}

#[derive(Tabled)]
struct ArtistRow<'a> {
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "Followers")]
    followers: u64,
    #[tabled(rename = "Popularity")]
    popularity: u32,
    #[tabled(rename = "View on Spotify")]
    view_url: &'a str,
}

pub fn songs_table(songs: &[SongRecommendation]) -> String {
    let rows = songs.iter().map(|s| SongRow {
        name: &s.name,
        artists: &s.artists,
        release_year: s.release_year,
        listen_url: &s.listen_url,
    });
    Table::new(rows).with(Style::modern()).to_string()
}

pub fn artists_table(artists: &[ArtistRecommendation]) -> String {
    let rows = artists.iter().map(|a| ArtistRow {
        name: &a.name,
        followers: a.followers,
        popularity: a.popularity,
        view_url: &a.view_url,
    });
    Table::new(rows).with(Style::modern()).to_string()
}

pub fn print_json<T: Serialize>(data: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}
