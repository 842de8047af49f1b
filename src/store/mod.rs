//! Playlist store
//!
//! Owns every playlist by name and persists the whole collection to a
//! single JSON file.

mod file;

pub use file::{read_playlists, write_playlists};

use crate::config::StoreConfig;
use crate::error::{PlaylistError, Result};
use crate::model::{Playlist, SortKey};
use std::collections::BTreeMap;
use std::path::Path;

/// A song found by [`PlaylistStore::search`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    /// Playlist containing the song
    pub playlist: String,

    /// Artist of the matching song
    pub artist: String,
}

/// All playlists, keyed by name
#[derive(Debug)]
pub struct PlaylistStore {
    config: StoreConfig,

    /// Playlists by name. Ordered so listings are stable.
    playlists: BTreeMap<String, Playlist>,
}

impl PlaylistStore {
    /// Create an empty store backed by the configured file (nothing is read)
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            playlists: BTreeMap::new(),
        }
    }

    /// Create a store and load it from the configured file
    pub fn open(config: StoreConfig) -> Result<Self> {
        let mut store = Self::new(config);
        store.load()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Replace the in-memory playlists with the file's contents
    ///
    /// A missing file leaves the store empty.
    pub fn load(&mut self) -> Result<()> {
        log::info!("Loading playlists from {:?}", self.config.path);
        let playlists = read_playlists(&self.config.path)?;

        self.playlists = playlists
            .into_iter()
            .map(|p| (p.name().to_string(), p))
            .collect();

        log::info!("Loaded {} playlist(s)", self.playlists.len());
        Ok(())
    }

    /// Write every playlist to the configured file, replacing its contents
    pub fn save(&self) -> Result<()> {
        write_playlists(&self.config, self.playlists.values())?;
        log::info!(
            "Saved {} playlist(s) to {:?}",
            self.playlists.len(),
            self.config.path
        );
        Ok(())
    }

    /// Add a new empty playlist
    pub fn create(&mut self, name: &str) -> Result<&mut Playlist> {
        if self.playlists.contains_key(name) {
            return Err(PlaylistError::DuplicateName(name.to_string()));
        }
        log::debug!("Creating playlist '{}'", name);
        Ok(self
            .playlists
            .entry(name.to_string())
            .or_insert_with(|| Playlist::new(name)))
    }

    pub fn select(&self, name: &str) -> Result<&Playlist> {
        self.playlists
            .get(name)
            .ok_or_else(|| PlaylistError::NotFound(name.to_string()))
    }

    pub fn select_mut(&mut self, name: &str) -> Result<&mut Playlist> {
        self.playlists
            .get_mut(name)
            .ok_or_else(|| PlaylistError::NotFound(name.to_string()))
    }

    /// Drop a playlist from the store, returning it
    pub fn remove(&mut self, name: &str) -> Result<Playlist> {
        self.playlists
            .remove(name)
            .ok_or_else(|| PlaylistError::NotFound(name.to_string()))
    }

    /// Playlist names in listing order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.playlists.keys().map(String::as_str)
    }

    pub fn playlists(&self) -> impl Iterator<Item = &Playlist> {
        self.playlists.values()
    }

    /// Total number of playlists
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    /// Every occurrence of a song called `song_name`, across all playlists
    pub fn search(&self, song_name: &str) -> Vec<SearchHit> {
        self.playlists
            .values()
            .flat_map(|playlist| {
                playlist
                    .songs()
                    .iter()
                    .filter(move |song| song.name == song_name)
                    .map(move |song| SearchHit {
                        playlist: playlist.name().to_string(),
                        artist: song.artist.clone(),
                    })
            })
            .collect()
    }

    /// Sort every playlist on `key`, then save the store
    pub fn sort_all(&mut self, key: SortKey, reverse: bool) -> Result<()> {
        log::info!(
            "Sorting {} playlist(s) by {} ({})",
            self.playlists.len(),
            key,
            if reverse { "descending" } else { "ascending" }
        );
        for playlist in self.playlists.values_mut() {
            playlist.sort_by(key, reverse);
        }
        self.save()
    }
}
