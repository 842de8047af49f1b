//! Store configuration

use std::path::PathBuf;

/// Default store file, relative to the working directory
pub const DEFAULT_STORE_FILE: &str = "playlists.json";

/// Configuration for where and how the playlist store is persisted
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path of the JSON file holding every playlist
    pub path: PathBuf,

    /// Indent the JSON output
    pub pretty: bool,

    /// Write to a sibling temp file, then rename it over `path`
    pub atomic_save: bool,
}

impl StoreConfig {
    /// Create a new store configuration for the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: true,
            atomic_save: true,
        }
    }

    /// Build a configuration from a user-supplied path, expanding `~`
    pub fn from_user_path(path: &str) -> Self {
        let expanded = shellexpand::tilde(path);
        Self::new(PathBuf::from(expanded.as_ref()))
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_atomic_save(mut self, atomic_save: bool) -> Self {
        self.atomic_save = atomic_save;
        self
    }

    /// Temp file used for atomic saves
    pub(crate) fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_FILE)
    }
}
