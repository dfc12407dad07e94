//! Storage trait for users, playlists and songs

use crate::error::Result;
use crate::types::{
    AddSong, CreatePlaylist, Playlist, PlaylistId, RegisterUser, Song, SongId, User, UserId,
};
use async_trait::async_trait;

/// Storage backend for the playlist service
///
/// Lookups by playlist or song id are global: they search every user.
/// Mutations are scoped to the given user, so a playlist owned by someone
/// else is reported as [`MelodyError::PlaylistNotFound`](crate::MelodyError::PlaylistNotFound).
#[async_trait]
pub trait Storage: Send + Sync {
    // ========================================================================
    // Users
    // ========================================================================

    /// Register a new user with a freshly generated id and secret code
    async fn register_user(&self, user: RegisterUser) -> Result<User>;

    /// Get user by ID
    async fn find_user(&self, id: &UserId) -> Result<Option<User>>;

    /// Get user by login secret code
    async fn find_user_by_secret_code(&self, secret_code: &str) -> Result<Option<User>>;

    /// Number of registered users
    async fn user_count(&self) -> Result<usize>;

    // ========================================================================
    // Playlists
    // ========================================================================

    /// Get playlist by ID, whoever owns it
    async fn find_playlist(&self, id: &PlaylistId) -> Result<Option<Playlist>>;

    /// Append a new playlist to the user's playlists, returning the updated user
    async fn create_playlist(&self, user_id: &UserId, playlist: CreatePlaylist) -> Result<User>;

    /// Delete one of the user's playlists along with its songs
    async fn delete_playlist(&self, user_id: &UserId, playlist_id: &PlaylistId) -> Result<()>;

    // ========================================================================
    // Songs
    // ========================================================================

    /// Get song by ID, whichever playlist holds it
    async fn find_song(&self, id: &SongId) -> Result<Option<Song>>;

    /// Append a song to one of the user's playlists, returning the updated user
    async fn add_song_to_playlist(
        &self,
        user_id: &UserId,
        playlist_id: &PlaylistId,
        song: AddSong,
    ) -> Result<User>;

    /// Remove a song from one of the user's playlists
    async fn delete_song_from_playlist(
        &self,
        user_id: &UserId,
        playlist_id: &PlaylistId,
        song_id: &SongId,
    ) -> Result<()>;

    /// Convenience: the songs of a playlist, whoever owns it
    async fn playlist_songs(&self, id: &PlaylistId) -> Result<Option<Vec<Song>>> {
        Ok(self.find_playlist(id).await?.map(|p| p.songs))
    }
}
