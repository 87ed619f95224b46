//! End-to-end recommendation tests over CSV catalogs written to a
//! temporary directory and loaded through the real loader.

use std::fmt::Write as _;
use std::path::PathBuf;

use tempfile::TempDir;
use timbre_core::{ArtistCatalog, Config, FeatureScaling, SongCatalog};
use timbre_search::{merge_artist_results, MergePolicy, Recommender};

const SONG_HEADER: &str = "id,name,artists,id_artists,release_year,duration_s,popularity,\
danceability,energy,key,loudness,mode,speechiness,acousticness,instrumentalness,liveness,\
valence,tempo,genres";

const ARTIST_HEADER: &str = "id,followers,genres,name,popularity";

/// (id, name, artists, release_year, popularity, genres)
type SongRow<'a> = (&'a str, &'a str, &'a str, i32, u32, &'a str);

/// (id, name, followers, popularity, genres)
type ArtistRow<'a> = (&'a str, &'a str, u64, u32, &'a str);

fn songs_csv(rows: &[SongRow<'_>]) -> String {
    let mut csv = format!("{SONG_HEADER}\n");
    for (id, name, artists, year, popularity, genres) in rows {
        writeln!(
            csv,
            "{id},{name},\"{artists}\",x,{year},210.0,{popularity},0.6,0.7,5,-6.5,1,0.05,0.1,0.0,0.12,0.5,118.0,\"{genres}\""
        )
        .unwrap();
    }
    csv
}

fn artists_csv(rows: &[ArtistRow<'_>]) -> String {
    let mut csv = format!("{ARTIST_HEADER}\n");
    for (id, name, followers, popularity, genres) in rows {
        writeln!(csv, "{id},{followers},\"{genres}\",{name},{popularity}").unwrap();
    }
    csv
}

const SONGS: &[SongRow<'static>] = &[
    ("sA", "Song A", "Alpha, Beta", 2020, 90, "pop"),
    ("sB", "Song B", "Beta", 2019, 80, "pop rock"),
    ("sC", "Song C", "Gamma", 2000, 50, "jazz"),
    ("sD", "Filler One", "Delta", 1995, 40, "metal"),
    ("sE", "Filler Two", "Delta", 1996, 30, "folk"),
    ("sF", "Filler Three", "Epsilon", 1997, 20, "blues"),
    ("sG", "Filler Four", "Epsilon", 1998, 10, "classical"),
];

const ARTISTS: &[ArtistRow<'static>] = &[
    ("aA", "Alpha", 1_000_000, 80, "dance pop"),
    ("aB", "Beta", 1_050_000, 78, "dance pop"),
    ("aC", "Gamma", 900_000, 75, "pop"),
    ("aD", "Delta", 950_000, 60, "dance"),
    ("aE", "Epsilon", 800_000, 85, "pop rock"),
    ("aF", "Zeta", 1_200_000, 70, "electropop"),
    ("aG", "Eta", 700_000, 65, "dance pop"),
    ("aH", "Theta", 20_000, 30, "jazz"),
];

struct Fixture {
    _dir: TempDir,
    config: Config,
}

fn fixture() -> Fixture {
    let dir = TempDir::new().unwrap();
    let songs_path: PathBuf = dir.path().join("song_library.csv");
    let artists_path: PathBuf = dir.path().join("artist_library.csv");
    std::fs::write(&songs_path, songs_csv(SONGS)).unwrap();
    std::fs::write(&artists_path, artists_csv(ARTISTS)).unwrap();

    let config = Config::default().with_overrides(
        Some(songs_path),
        Some(artists_path),
        Some(FeatureScaling::Raw),
        false,
    );
    Fixture { _dir: dir, config }
}

#[test]
fn test_shared_genre_ranks_above_unrelated_genre() {
    let fx = fixture();
    let recommender = Recommender::from_config(&fx.config).unwrap();

    let ranked = recommender.songs().rank_songs("Song A").unwrap();
    let position = |id: &str| ranked.iter().position(|r| r.entry.id == id).unwrap();

    assert_eq!(position("sA"), 0);
    assert!(position("sB") < position("sC"));
}

#[test]
fn test_song_results_skip_top_two() {
    let fx = fixture();
    let recommender = Recommender::from_config(&fx.config).unwrap();

    let ranked = recommender.songs().rank_songs("Song A").unwrap();
    let results = recommender.songs().recommend_songs("Song A").unwrap();

    assert_eq!(results.len(), 5);
    assert!(results.len() <= recommender.songs().catalog().len() - 2);
    for top in &ranked[..2] {
        assert!(results.iter().all(|r| r.id != top.entry.id));
    }
    let expected: Vec<&str> = ranked[2..7].iter().map(|r| r.entry.id.as_str()).collect();
    let actual: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_missing_song_is_not_found() {
    let fx = fixture();
    let recommender = Recommender::from_config(&fx.config).unwrap();
    let err = recommender.recommend("Song Z").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_overlapping_artist_lists_are_not_deduplicated() {
    let fx = fixture();
    let recommender = Recommender::from_config(&fx.config).unwrap();

    let lists = recommender.artist_recommendations("Song A").unwrap();
    assert_eq!(lists.len(), 2);
    assert_eq!(lists[0].len(), 5);
    assert_eq!(lists[1].len(), 5);

    let concatenated = merge_artist_results(lists.clone(), MergePolicy::Concatenate);
    assert_eq!(concatenated.len(), lists[0].len() + lists[1].len());

    let deduped = merge_artist_results(lists, MergePolicy::Dedupe);
    assert!(deduped.len() < concatenated.len());
}

#[test]
fn test_cross_recommendation_top_five_by_popularity() {
    let fx = fixture();
    let recommender = Recommender::from_config(&fx.config).unwrap();

    let recs = recommender.recommend("Song A").unwrap();
    assert_eq!(recs.songs.len(), 5);
    assert_eq!(recs.artists.len(), 5);
    for pair in recs.artists.windows(2) {
        assert!(
            (pair[0].popularity, pair[0].followers) >= (pair[1].popularity, pair[1].followers)
        );
    }
    assert!(recs
        .artists
        .iter()
        .all(|a| a.view_url == format!("https://open.spotify.com/artist/{}", a.id)));
}

#[test]
fn test_same_query_twice_is_identical() {
    let fx = fixture();
    let recommender = Recommender::from_config(&fx.config).unwrap();

    let first = recommender.recommend("Song A").unwrap();
    let second = recommender.recommend("Song A").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_raw_scaling_matches_unscaled_index() {
    let fx = fixture();
    let songs = SongCatalog::load(&fx.config.song_catalog_path).unwrap();
    let artists = ArtistCatalog::load(&fx.config.artist_catalog_path).unwrap();

    let raw = Recommender::new(songs.clone(), artists.clone(), FeatureScaling::Raw);
    let scaled = Recommender::new(songs, artists, FeatureScaling::MinMax);

    let raw_scores = raw.songs().index().scores(0);
    for (i, row) in raw.songs().catalog().iter().enumerate() {
        let profile = raw.songs().index().profile(i).unwrap();
        assert_eq!(profile.features(), row.features.to_array().as_slice());
    }
    assert!(raw_scores.iter().all(|s| (0.0..=1.0).contains(s)));

    // Scaling is a real policy change, but the result stays well formed.
    let scaled_scores = scaled.songs().index().scores(0);
    assert_eq!(scaled_scores.len(), raw_scores.len());
    assert!(scaled_scores.iter().all(|s| (0.0..=1.0).contains(s)));
}

#[test]
fn test_duplicate_song_names_use_first_match() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("songs.csv");
    std::fs::write(
        &path,
        songs_csv(&[
            ("d1", "Intro", "Alpha", 2010, 50, "pop"),
            ("d2", "Intro", "Beta", 2011, 50, "jazz"),
            ("d3", "Other", "Gamma", 2005, 40, "pop"),
        ]),
    )
    .unwrap();

    let songs = SongCatalog::load(&path).unwrap();
    let recommender = Recommender::new(songs, ArtistCatalog::from_rows(Vec::new()), FeatureScaling::Raw);

    let ranked = recommender.songs().rank_songs("Intro").unwrap();
    let ids: Vec<&str> = ranked.iter().map(|r| r.entry.id.as_str()).collect();
    assert_eq!(ids, vec!["d1", "d3", "d2"]);
    assert!((ranked[0].similarity - 1.0).abs() < 1e-9);

    // The second "Intro" keeps its own genres and is scored against the
    // first one: identical features, no shared genre term.
    let d2 = &ranked[2];
    assert_eq!(d2.entry.genres, "jazz");
    assert!((d2.similarity - 0.5).abs() < 1e-9);
}

#[test]
fn test_recommendations_serialize_to_json() {
    let fx = fixture();
    let recommender = Recommender::from_config(&fx.config).unwrap();
    let recs = recommender.recommend("Song A").unwrap();

    let json = serde_json::to_value(&recs).unwrap();
    assert_eq!(json["songs"].as_array().unwrap().len(), 5);
    assert!(json["songs"][0]["listen_url"]
        .as_str()
        .unwrap()
        .starts_with("https://open.spotify.com/track/"));
    assert!(json["artists"][0]["followers"].is_u64());
}
