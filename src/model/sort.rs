//! Sort criteria for playlists

use super::Song;
use crate::error::PlaylistError;
use std::fmt;
use std::str::FromStr;

/// Field a playlist can be sorted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SortKey {
    Title,
    Artist,
}

impl SortKey {
    /// Extract the comparison key from a song
    pub fn key(self, song: &Song) -> &str {
        match self {
            SortKey::Title => &song.name,
            SortKey::Artist => &song.artist,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Artist => "artist",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortKey {
    type Err = PlaylistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(SortKey::Title),
            "artist" => Ok(SortKey::Artist),
            _ => Err(PlaylistError::UnknownSortKey(s.to_string())),
        }
    }
}
