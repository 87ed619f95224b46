pub mod config;
pub mod recommend;
pub mod stats;

pub use recommend::{run_artists, run_recommend, run_songs};
pub use stats::show_stats;
