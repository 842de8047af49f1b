//! Interactive text menu
//!
//! Reads choices line by line from any [`BufRead`] and writes prompts and
//! results to any [`Write`], so a session can be scripted in tests.
//! Soft errors are printed and the loop carries on. End of input behaves
//! like choosing "Exit".

use crate::cli::{sorted_message, write_playlist_list, write_search, write_songs};
use crate::error::PlaylistError;
use crate::model::{Playlist, Song, SortKey};
use crate::store::PlaylistStore;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Whether the session keeps going after a submenu returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Menu<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Consume the menu, returning the output sink
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run the main menu until the user exits, then save the store
    pub fn run(&mut self, store: &mut PlaylistStore) -> Result<()> {
        while self.main_menu(store)? == Flow::Continue {}

        store
            .save()
            .with_context(|| format!("Failed to save playlists to {:?}", store.path()))?;
        writeln!(self.out, "Exiting...")?;
        Ok(())
    }

    fn main_menu(&mut self, store: &mut PlaylistStore) -> Result<Flow> {
        writeln!(self.out, "\nMain Menu:")?;
        writeln!(self.out, "1. Create Playlist")?;
        writeln!(self.out, "2. Manage Playlists")?;
        writeln!(self.out, "3. Search Songs")?;
        writeln!(self.out, "4. Show All Playlists")?;
        writeln!(self.out, "5. Show Songs in a Playlist")?;
        writeln!(self.out, "6. Sort Playlists")?;
        writeln!(self.out, "7. Exit")?;

        let Some(choice) = self.prompt("Enter your choice: ")? else {
            return Ok(Flow::Quit);
        };

        match choice.as_str() {
            "1" => {
                let Some(name) = self.prompt("Enter playlist name: ")? else {
                    return Ok(Flow::Quit);
                };
                match store.create(&name) {
                    Ok(_) => writeln!(self.out, "Playlist '{}' created.", name)?,
                    Err(e) => self.report(e)?,
                }
            }
            "2" => {
                let Some(name) = self.prompt("Enter playlist name to manage: ")? else {
                    return Ok(Flow::Quit);
                };
                match store.select_mut(&name) {
                    Ok(playlist) => return self.manage(playlist),
                    Err(e) => self.report(e)?,
                }
            }
            "3" => {
                let Some(song) = self.prompt("Enter the name of the song to search: ")? else {
                    return Ok(Flow::Quit);
                };
                write_search(&mut self.out, store, &song)?;
            }
            "4" => write_playlist_list(&mut self.out, store)?,
            "5" => {
                let Some(name) = self.prompt("Enter the name of the playlist: ")? else {
                    return Ok(Flow::Quit);
                };
                match store.select(&name) {
                    Ok(playlist) => write_songs(&mut self.out, playlist)?,
                    Err(e) => self.report(e)?,
                }
            }
            "6" => return self.sort_menu(store),
            "7" => return Ok(Flow::Quit),
            _ => writeln!(
                self.out,
                "Invalid choice. Please enter a number from 1 to 7."
            )?,
        }
        Ok(Flow::Continue)
    }

    fn sort_menu(&mut self, store: &mut PlaylistStore) -> Result<Flow> {
        writeln!(self.out, "\nSort Playlists by:")?;
        writeln!(self.out, "1. Title Ascending")?;
        writeln!(self.out, "2. Title Descending")?;
        writeln!(self.out, "3. Artist Ascending")?;
        writeln!(self.out, "4. Artist Descending")?;

        let Some(choice) = self.prompt("Enter your choice: ")? else {
            return Ok(Flow::Quit);
        };

        let (key, reverse) = match choice.as_str() {
            "1" => (SortKey::Title, false),
            "2" => (SortKey::Title, true),
            "3" => (SortKey::Artist, false),
            "4" => (SortKey::Artist, true),
            _ => {
                writeln!(
                    self.out,
                    "Invalid choice. Please enter a number from 1 to 4."
                )?;
                return Ok(Flow::Continue);
            }
        };

        store
            .sort_all(key, reverse)
            .with_context(|| format!("Failed to save playlists to {:?}", store.path()))?;
        writeln!(self.out, "{}", sorted_message(key, reverse))?;
        Ok(Flow::Continue)
    }

    fn manage(&mut self, playlist: &mut Playlist) -> Result<Flow> {
        loop {
            writeln!(self.out, "\nManaging Playlist: {}", playlist.name())?;
            writeln!(self.out, "1. Add Song")?;
            writeln!(self.out, "2. Delete Song")?;
            writeln!(self.out, "3. Show Songs")?;
            writeln!(self.out, "4. Sort by Title")?;
            writeln!(self.out, "5. Sort by Artist")?;
            writeln!(self.out, "6. Play Current Song")?;
            writeln!(self.out, "7. Next Song")?;
            writeln!(self.out, "8. Previous Song")?;
            writeln!(self.out, "9. Back to Main Menu")?;

            let Some(choice) = self.prompt("Enter your choice: ")? else {
                return Ok(Flow::Quit);
            };

            match choice.as_str() {
                "1" => {
                    let Some(name) = self.prompt("Enter song name: ")? else {
                        return Ok(Flow::Quit);
                    };
                    let Some(artist) = self.prompt("Enter artist name: ")? else {
                        return Ok(Flow::Quit);
                    };
                    playlist.add_song(Song::new(name, artist));
                }
                "2" => {
                    let Some(name) = self.prompt("Enter the name of the song to delete: ")? else {
                        return Ok(Flow::Quit);
                    };
                    let removed = playlist.delete_song(&name);
                    log::debug!("Removed {} song(s) named '{}'", removed, name);
                }
                "3" => {
                    for line in playlist.show() {
                        writeln!(self.out, "{}", line)?;
                    }
                }
                "4" => {
                    playlist.sort_by_title(false);
                    writeln!(self.out, "Playlist sorted by title.")?;
                }
                "5" => {
                    playlist.sort_by_artist(false);
                    writeln!(self.out, "Playlist sorted by artist.")?;
                }
                "6" => {
                    let result = playlist.play_current().map(ToString::to_string);
                    self.report_playback(result)?;
                }
                "7" => {
                    let result = playlist.next().map(ToString::to_string);
                    self.report_playback(result)?;
                }
                "8" => {
                    let result = playlist.previous().map(ToString::to_string);
                    self.report_playback(result)?;
                }
                "9" => return Ok(Flow::Continue),
                _ => writeln!(
                    self.out,
                    "Invalid choice. Please enter a number from 1 to 9."
                )?,
            }
        }
    }

    fn report_playback(&mut self, result: Result<String, PlaylistError>) -> Result<()> {
        match result {
            Ok(song) => writeln!(self.out, "Playing: {}", song)?,
            Err(e) => self.report(e)?,
        }
        Ok(())
    }

    /// Print a soft error; anything else is returned to the caller
    fn report(&mut self, error: PlaylistError) -> Result<()> {
        if !error.is_soft() {
            return Err(error.into());
        }
        writeln!(self.out, "{}", error)?;
        Ok(())
    }

    /// Print `message` and read one trimmed line; `None` at end of input
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.out, "{}", message)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
