use super::{Song, SortKey};
use crate::error::{PlaylistError, Result};

/// A named, ordered list of songs with a playback cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    /// Playlist name, unique within a store
    name: String,

    /// Songs in playback order
    songs: Vec<Song>,

    /// Index of the current song. Always 0 when `songs` is empty,
    /// otherwise in `0..songs.len()`.
    current_index: usize,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            songs: Vec::new(),
            current_index: 0,
        }
    }

    /// Build a playlist from already-ordered songs (cursor at the first song)
    pub fn with_songs(name: impl Into<String>, songs: Vec<Song>) -> Self {
        Self {
            name: name.into(),
            songs,
            current_index: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of songs in this playlist
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Append a song. The cursor keeps its position.
    pub fn add_song(&mut self, song: Song) {
        self.songs.push(song);
    }

    /// Remove every song called `name`, returning how many were removed
    ///
    /// The cursor is clamped to the last song if it fell off the end.
    pub fn delete_song(&mut self, name: &str) -> usize {
        let before = self.songs.len();
        self.songs.retain(|song| song.name != name);
        self.clamp_cursor();
        before - self.songs.len()
    }

    pub fn clear(&mut self) {
        self.songs.clear();
        self.current_index = 0;
    }

    /// Songs formatted as "artist - name", in playlist order
    pub fn show(&self) -> Vec<String> {
        self.songs.iter().map(ToString::to_string).collect()
    }

    /// Whether any song in the playlist is called `name`
    pub fn contains_song(&self, name: &str) -> bool {
        self.songs.iter().any(|song| song.name == name)
    }

    /// Stable sort on the given key, descending when `reverse` is set
    ///
    /// Songs with equal keys keep their relative order in both directions.
    pub fn sort_by(&mut self, key: SortKey, reverse: bool) {
        if reverse {
            self.songs.sort_by(|a, b| key.key(b).cmp(key.key(a)));
        } else {
            self.songs.sort_by(|a, b| key.key(a).cmp(key.key(b)));
        }
    }

    pub fn sort_by_title(&mut self, reverse: bool) {
        self.sort_by(SortKey::Title, reverse);
    }

    pub fn sort_by_artist(&mut self, reverse: bool) {
        self.sort_by(SortKey::Artist, reverse);
    }

    /// The song under the cursor
    pub fn play_current(&self) -> Result<&Song> {
        self.songs
            .get(self.current_index)
            .ok_or_else(|| PlaylistError::EmptyPlaylist(self.name.clone()))
    }

    /// Advance the cursor, wrapping to the first song
    pub fn next(&mut self) -> Result<&Song> {
        if self.songs.is_empty() {
            return Err(PlaylistError::EmptyPlaylist(self.name.clone()));
        }
        self.current_index = (self.current_index + 1) % self.songs.len();
        self.play_current()
    }

    /// Step the cursor back, wrapping to the last song
    pub fn previous(&mut self) -> Result<&Song> {
        if self.songs.is_empty() {
            return Err(PlaylistError::EmptyPlaylist(self.name.clone()));
        }
        let len = self.songs.len();
        self.current_index = (self.current_index + len - 1) % len;
        self.play_current()
    }

    fn clamp_cursor(&mut self) {
        self.current_index = self.current_index.min(self.songs.len().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn songs(pairs: &[(&str, &str)]) -> Vec<Song> {
        pairs.iter().map(|(n, a)| Song::new(*n, *a)).collect()
    }

    fn abc() -> Playlist {
        Playlist::with_songs("Test", songs(&[("B", "Z"), ("A", "Y"), ("C", "X")]))
    }

    #[test]
    fn test_add_preserves_order() {
        let mut playlist = Playlist::new("Road Trip");
        playlist.add_song(Song::new("Song A", "Artist X"));
        playlist.add_song(Song::new("Song B", "Artist Y"));
        playlist.add_song(Song::new("Song A", "Artist X"));

        assert_eq!(playlist.len(), 3);
        assert_eq!(
            playlist.show(),
            vec![
                "Artist X - Song A",
                "Artist Y - Song B",
                "Artist X - Song A"
            ]
        );
    }

    #[test]
    fn test_delete_removes_all_matches() {
        let mut playlist = Playlist::with_songs(
            "Test",
            songs(&[("A", "X"), ("B", "Y"), ("A", "Z"), ("C", "W")]),
        );

        assert_eq!(playlist.delete_song("A"), 2);
        assert_eq!(
            playlist.songs(),
            songs(&[("B", "Y"), ("C", "W")]).as_slice()
        );

        assert_eq!(playlist.delete_song("Nope"), 0);
        assert_eq!(playlist.len(), 2);
    }

    #[test]
    fn test_contains_song() {
        let mut playlist = abc();
        assert!(playlist.contains_song("A"));
        assert!(!playlist.contains_song("Nope"));
        assert!(!playlist.contains_song("a"));
        assert!(!playlist.contains_song("Z"));

        playlist.delete_song("A");
        assert!(!playlist.contains_song("A"));
        assert!(!Playlist::new("Empty").contains_song("A"));
    }

    #[test]
    fn test_delete_clamps_cursor() {
        let mut playlist = abc();
        playlist.previous().unwrap();
        assert_eq!(playlist.current_index(), 2);

        playlist.delete_song("C");
        assert_eq!(playlist.current_index(), 1);
        assert_eq!(playlist.play_current().unwrap(), &Song::new("A", "Y"));

        playlist.delete_song("A");
        playlist.delete_song("B");
        assert_eq!(playlist.current_index(), 0);
        assert!(playlist.play_current().is_err());
    }

    #[test]
    fn test_delete_keeps_cursor_in_range() {
        let mut playlist = abc();
        playlist.next().unwrap();
        playlist.delete_song("C");
        assert_eq!(playlist.current_index(), 1);
    }

    #[test]
    fn test_clear_resets_cursor() {
        let mut playlist = abc();
        playlist.next().unwrap();
        playlist.clear();

        assert!(playlist.is_empty());
        assert_eq!(playlist.current_index(), 0);

        playlist.add_song(Song::new("D", "V"));
        assert_eq!(playlist.play_current().unwrap().name, "D");
    }

    #[test]
    fn test_sort_by_title() {
        let mut playlist = abc();
        playlist.sort_by_title(false);
        assert_eq!(
            playlist.songs(),
            songs(&[("A", "Y"), ("B", "Z"), ("C", "X")]).as_slice()
        );
    }

    #[test]
    fn test_sort_by_artist_descending() {
        let mut playlist = abc();
        playlist.sort_by_artist(true);
        assert_eq!(
            playlist.songs(),
            songs(&[("B", "Z"), ("A", "Y"), ("C", "X")]).as_slice()
        );

        playlist.sort_by_artist(false);
        assert_eq!(
            playlist.songs(),
            songs(&[("C", "X"), ("A", "Y"), ("B", "Z")]).as_slice()
        );
    }

    #[test]
    fn test_sort_is_stable() {
        let original = songs(&[("B", "Q"), ("A", "Q"), ("C", "P"), ("A", "P")]);

        for reverse in [false, true] {
            let mut playlist = Playlist::with_songs("Test", original.clone());
            playlist.sort_by_artist(reverse);
            let once = playlist.songs().to_vec();
            playlist.sort_by_artist(reverse);
            assert_eq!(playlist.songs(), once.as_slice());
        }

        let mut playlist = Playlist::with_songs("Test", original.clone());
        playlist.sort_by_artist(false);
        assert_eq!(
            playlist.songs(),
            songs(&[("C", "P"), ("A", "P"), ("B", "Q"), ("A", "Q")]).as_slice()
        );

        let mut playlist = Playlist::with_songs("Test", original);
        playlist.sort_by_artist(true);
        assert_eq!(
            playlist.songs(),
            songs(&[("B", "Q"), ("A", "Q"), ("C", "P"), ("A", "P")]).as_slice()
        );
    }

    #[test]
    fn test_navigation_wraps() {
        let mut playlist = abc();
        assert_eq!(playlist.play_current().unwrap().name, "B");
        assert_eq!(playlist.next().unwrap().name, "A");
        assert_eq!(playlist.next().unwrap().name, "C");
        assert_eq!(playlist.next().unwrap().name, "B");
        assert_eq!(playlist.previous().unwrap().name, "C");
    }

    #[test]
    fn test_next_then_previous_is_identity() {
        for len in 1..5 {
            let mut playlist = Playlist::new("Test");
            for i in 0..len {
                playlist.add_song(Song::new(format!("S{i}"), "A"));
            }
            for start in 0..len {
                while playlist.current_index() != start {
                    playlist.next().unwrap();
                }
                playlist.next().unwrap();
                playlist.previous().unwrap();
                assert_eq!(playlist.current_index(), start);

                playlist.previous().unwrap();
                playlist.next().unwrap();
                assert_eq!(playlist.current_index(), start);
            }
        }
    }

    #[test]
    fn test_empty_playlist_navigation() {
        let mut playlist = Playlist::new("Empty");

        assert!(matches!(
            playlist.play_current(),
            Err(PlaylistError::EmptyPlaylist(ref name)) if name == "Empty"
        ));
        assert!(matches!(
            playlist.next(),
            Err(PlaylistError::EmptyPlaylist(_))
        ));
        assert!(matches!(
            playlist.previous(),
            Err(PlaylistError::EmptyPlaylist(_))
        ));
        assert_eq!(playlist.current_index(), 0);
    }
}
