/// Song domain types
use crate::types::SongId;
use serde::{Deserialize, Serialize};

/// A song entry in a playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Unique song identifier
    pub id: SongId,

    /// Song title
    pub name: String,

    /// Composer or artist
    pub composer: String,

    /// Where the audio can be fetched from
    pub music_url: String,
}

impl Song {
    /// Create a new song
    pub fn new(
        name: impl Into<String>,
        composer: impl Into<String>,
        music_url: impl Into<String>,
    ) -> Self {
        Self {
            id: SongId::generate(),
            name: name.into(),
            composer: composer.into(),
            music_url: music_url.into(),
        }
    }
}

/// Input for adding a song to a playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddSong {
    /// Song title
    pub name: String,
    /// Composer or artist
    pub composer: String,
    /// Audio URL
    pub music_url: String,
}

impl From<AddSong> for Song {
    fn from(input: AddSong) -> Self {
        Song::new(input.name, input.composer, input.music_url)
    }
}
