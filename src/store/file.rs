//! JSON store file reading and writing
//!
//! The file is a single object mapping playlist names to ordered lists of
//! `{"name": ..., "artist": ...}` songs. Cursor positions are not stored.

use crate::config::StoreConfig;
use crate::error::{PlaylistError, Result};
use crate::model::{Playlist, Song};
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// On-disk shape of the store
type StoreFile = BTreeMap<String, Vec<Song>>;

/// Read every playlist from `path`
///
/// A missing file yields no playlists. A file that exists but does not
/// match the expected shape is a [`PlaylistError::CorruptState`].
pub fn read_playlists(path: &Path) -> Result<Vec<Playlist>> {
    let contents = match fs::read(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::info!("No playlist file at {:?}, starting empty", path);
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(PlaylistError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let data: StoreFile =
        serde_json::from_slice(&contents).map_err(|source| PlaylistError::CorruptState {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(data
        .into_iter()
        .map(|(name, songs)| Playlist::with_songs(name, songs))
        .collect())
}

/// Overwrite the store file with the given playlists
pub fn write_playlists<'a>(
    config: &StoreConfig,
    playlists: impl IntoIterator<Item = &'a Playlist>,
) -> Result<()> {
    let data: BTreeMap<&str, &[Song]> = playlists
        .into_iter()
        .map(|p| (p.name(), p.songs()))
        .collect();

    let json = if config.pretty {
        serde_json::to_string_pretty(&data)
    } else {
        serde_json::to_string(&data)
    }
    .map_err(|e| io_error(&config.path, io::Error::other(e)))?;

    if let Some(parent) = config.path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
    }

    if config.atomic_save {
        let tmp_path = config.temp_path();
        write_file(&tmp_path, &json)?;
        if let Err(e) = fs::rename(&tmp_path, &config.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(io_error(&config.path, e));
        }
    } else {
        write_file(&config.path, &json)?;
    }

    log::debug!("Wrote {} bytes to {:?}", json.len(), config.path);
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    let mut file = fs::File::create(path).map_err(|e| io_error(path, e))?;
    file.write_all(contents.as_bytes())
        .and_then(|_| file.sync_all())
        .map_err(|e| io_error(path, e))
}

fn io_error(path: &Path, source: io::Error) -> PlaylistError {
    PlaylistError::Io {
        path: path.to_path_buf(),
        source,
    }
}
