//! Command line arguments and one-shot commands

use crate::config::{StoreConfig, DEFAULT_STORE_FILE};
use crate::model::{Playlist, Song, SortKey};
use crate::store::PlaylistStore;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;

#[derive(Parser, Debug)]
#[command(name = "playlist-manager")]
#[command(about = "Create, edit and play through named playlists", long_about = None)]
pub struct Args {
    /// Path to the playlist file
    #[arg(short = 'f', long, default_value = DEFAULT_STORE_FILE)]
    pub file: String,

    /// Write the playlist file without indentation
    #[arg(long)]
    pub compact: bool,

    /// Overwrite the playlist file in place instead of via a temp file
    #[arg(long)]
    pub no_atomic_save: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Run a single command instead of the interactive menu
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    /// Store configuration selected by the flags
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::from_user_path(&self.file)
            .with_pretty(!self.compact)
            .with_atomic_save(!self.no_atomic_save)
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List all playlists
    List,

    /// Show the songs in a playlist
    Show { playlist: String },

    /// Find every playlist containing a song
    Search { song: String },

    /// Sort every playlist and save
    Sort {
        #[arg(value_enum)]
        key: SortKey,

        /// Sort in descending order
        #[arg(short, long)]
        reverse: bool,
    },

    /// Create an empty playlist
    Create { name: String },

    /// Append a song to a playlist
    Add {
        playlist: String,
        song: String,
        artist: String,
    },

    /// Remove every song with the given name from a playlist
    Delete { playlist: String, song: String },
}

/// Run a single command against the store, saving if it changed anything
pub fn run_command<W: Write>(
    store: &mut PlaylistStore,
    command: Command,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::List => write_playlist_list(out, store)?,
        Command::Show { playlist } => write_songs(out, store.select(&playlist)?)?,
        Command::Search { song } => write_search(out, store, &song)?,
        Command::Sort { key, reverse } => {
            store.sort_all(key, reverse)?;
            writeln!(out, "{}", sorted_message(key, reverse))?;
        }
        Command::Create { name } => {
            store.create(&name)?;
            store.save()?;
            writeln!(out, "Playlist '{}' created.", name)?;
        }
        Command::Add {
            playlist,
            song,
            artist,
        } => {
            let song = Song::new(song, artist);
            let line = format!("Added '{}' to '{}'.", song, playlist);
            store.select_mut(&playlist)?.add_song(song);
            store.save()?;
            writeln!(out, "{}", line)?;
        }
        Command::Delete { playlist, song } => {
            let removed = store.select_mut(&playlist)?.delete_song(&song);
            store.save()?;
            writeln!(
                out,
                "Removed {} song(s) named '{}' from '{}'.",
                removed, song, playlist
            )?;
        }
    }
    Ok(())
}

pub(crate) fn write_playlist_list<W: Write>(
    out: &mut W,
    store: &PlaylistStore,
) -> std::io::Result<()> {
    if store.is_empty() {
        return writeln!(out, "No playlists.");
    }
    writeln!(out, "Playlists:")?;
    for playlist in store.playlists() {
        writeln!(out, "  {} ({} songs)", playlist.name(), playlist.len())?;
    }
    Ok(())
}

pub(crate) fn write_songs<W: Write>(out: &mut W, playlist: &Playlist) -> std::io::Result<()> {
    writeln!(out, "Songs in playlist '{}':", playlist.name())?;
    for line in playlist.show() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

pub(crate) fn write_search<W: Write>(
    out: &mut W,
    store: &PlaylistStore,
    song: &str,
) -> std::io::Result<()> {
    let hits = store.search(song);
    if hits.is_empty() {
        return writeln!(out, "Song '{}' not found.", song);
    }
    for hit in hits {
        writeln!(
            out,
            "Found '{}' in playlist '{}' by {}",
            song, hit.playlist, hit.artist
        )?;
    }
    Ok(())
}

pub(crate) fn sorted_message(key: SortKey, reverse: bool) -> String {
    let order = if reverse { "descending" } else { "ascending" };
    format!("Playlists sorted by {} in {} order.", key, order)
}
