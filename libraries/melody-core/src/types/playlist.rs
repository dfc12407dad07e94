/// Playlist domain types
use crate::types::{PlaylistId, Song, SongId};
use serde::{Deserialize, Serialize};

/// Named, ordered collection of songs owned by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist name
    pub name: String,

    /// Songs in insertion order
    pub songs: Vec<Song>,
}

impl Playlist {
    /// Create an empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PlaylistId::generate(),
            name: name.into(),
            songs: Vec::new(),
        }
    }

    /// Find a song in this playlist
    pub fn song(&self, id: &SongId) -> Option<&Song> {
        self.songs.iter().find(|s| &s.id == id)
    }

    /// Remove a song, keeping the order of the others
    pub fn remove_song(&mut self, id: &SongId) -> Option<Song> {
        let index = self.songs.iter().position(|s| &s.id == id)?;
        Some(self.songs.remove(index))
    }
}

/// Playlist creation input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePlaylist {
    /// Playlist name
    pub name: String,
}
