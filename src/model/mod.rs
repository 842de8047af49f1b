//! In-memory playlist model
//!
//! Songs, playlists and the sort criteria applied to them. Persistence
//! lives in [`crate::store`].

mod playlist;
mod song;
mod sort;

pub use playlist::Playlist;
pub use song::Song;
pub use sort::SortKey;
