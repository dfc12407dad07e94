/// Core error types for Melody
use thiserror::Error;
use crate::types::{PlaylistId, SongId, UserId};

/// Result type alias using `MelodyError`
pub type Result<T> = std::result::Result<T, MelodyError>;

/// Core error type for Melody
#[derive(Error, Debug)]
pub enum MelodyError {
    /// User not found
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    /// Playlist not found (or not owned by the requesting user)
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(PlaylistId),

    /// Song not found in the addressed playlist
    #[error("Song not found: {0}")]
    SongNotFound(SongId),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl MelodyError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Whether this error means the addressed entity does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::PlaylistNotFound(_) | Self::SongNotFound(_)
        )
    }
}
