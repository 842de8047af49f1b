//! Playlist Manager - named playlists persisted to a single JSON file
//!
//! The library holds the playlist model and the store; the binary wraps it
//! in a command line and an interactive menu.

pub mod cli;
pub mod config;
pub mod error;
pub mod menu;
pub mod model;
pub mod store;

pub use config::StoreConfig;
pub use error::PlaylistError;
pub use store::{PlaylistStore, SearchHit};
