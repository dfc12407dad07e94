//! Melody Core
//!
//! Domain types, storage trait, and error handling for the Melody playlist service.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `Playlist`, `Song` and their id newtypes
//! - **Core Traits**: `Storage`, implemented by `melody-storage`
//! - **Error Handling**: Unified `MelodyError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use melody_core::types::{Playlist, Song, User};
//!
//! // Register a user
//! let mut user = User::new("Alice", "alice@example.com");
//! assert_eq!(user.secret_code.as_str().len(), 8);
//!
//! // Give them a playlist with one song
//! let mut playlist = Playlist::new("Road Trip");
//! playlist.songs.push(Song::new("Clair de Lune", "Debussy", "https://example.com/clair.mp3"));
//! user.playlists.push(playlist);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{MelodyError, Result};
pub use storage::Storage;

pub use types::{
    AddSong, CreatePlaylist, Playlist, PlaylistId, RegisterUser, SecretCode, Song, SongId, User,
    UserId,
};
