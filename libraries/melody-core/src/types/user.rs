/// User domain type
use crate::types::{Playlist, PlaylistId, SecretCode, UserId};
use serde::{Deserialize, Serialize};

/// Registered user and the playlists they own
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Code used to log in
    pub secret_code: SecretCode,

    /// Display name
    pub name: String,

    /// Contact email (not required to be unique)
    pub email: String,

    /// Owned playlists, in creation order
    pub playlists: Vec<Playlist>,
}

impl User {
    /// Create a new user with a fresh id and secret code
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self::with_secret_code(name, email, SecretCode::generate())
    }

    /// Create a new user with a caller-chosen secret code
    pub fn with_secret_code(
        name: impl Into<String>,
        email: impl Into<String>,
        secret_code: SecretCode,
    ) -> Self {
        Self {
            id: UserId::generate(),
            secret_code,
            name: name.into(),
            email: email.into(),
            playlists: Vec::new(),
        }
    }

    /// Find an owned playlist
    pub fn playlist(&self, id: &PlaylistId) -> Option<&Playlist> {
        self.playlists.iter().find(|p| &p.id == id)
    }

    /// Find an owned playlist for mutation
    pub fn playlist_mut(&mut self, id: &PlaylistId) -> Option<&mut Playlist> {
        self.playlists.iter_mut().find(|p| &p.id == id)
    }

    /// Remove an owned playlist, keeping the order of the others
    pub fn remove_playlist(&mut self, id: &PlaylistId) -> Option<Playlist> {
        let index = self.playlists.iter().position(|p| &p.id == id)?;
        Some(self.playlists.remove(index))
    }
}

/// Registration input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterUser {
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
}
