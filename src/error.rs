//! Error taxonomy for playlist and store operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the playlist model and the store
///
/// Everything except [`PlaylistError::CorruptState`] and [`PlaylistError::Io`]
/// is a soft error: the caller reports it and carries on.
#[derive(Debug, Error)]
pub enum PlaylistError {
    #[error("a playlist named '{0}' already exists")]
    DuplicateName(String),

    #[error("playlist '{0}' not found")]
    NotFound(String),

    #[error("no songs in playlist '{0}'")]
    EmptyPlaylist(String),

    #[error("unknown sort criteria '{0}' (expected 'title' or 'artist')")]
    UnknownSortKey(String),

    /// The store file exists but does not hold a playlist map
    #[error("playlist file {path:?} is corrupt: {source}")]
    CorruptState {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PlaylistError {
    /// Whether the interactive session can report this and continue
    pub fn is_soft(&self) -> bool {
        !matches!(
            self,
            PlaylistError::CorruptState { .. } | PlaylistError::Io { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PlaylistError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soft_errors() {
        assert!(PlaylistError::DuplicateName("Gym".to_string()).is_soft());
        assert!(PlaylistError::NotFound("Gym".to_string()).is_soft());
        assert!(PlaylistError::EmptyPlaylist("Gym".to_string()).is_soft());

        let io = PlaylistError::Io {
            path: PathBuf::from("playlists.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!io.is_soft());
    }

    #[test]
    fn test_messages() {
        let err = PlaylistError::EmptyPlaylist("Empty".to_string());
        assert_eq!(err.to_string(), "no songs in playlist 'Empty'");

        let err = PlaylistError::UnknownSortKey("album".to_string());
        assert!(err.to_string().contains("'album'"));
    }
}
