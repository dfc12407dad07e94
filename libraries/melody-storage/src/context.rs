use crate::{playlists, songs, users, Library};
use async_trait::async_trait;
use melody_core::{error::Result, storage::Storage, types::*};
use tokio::sync::RwLock;

/// In-memory storage behind a single lock
#[derive(Debug)]
pub struct MemoryStorage {
    library: RwLock<Library>,
    secret_code_length: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::with_secret_code_length(SecretCode::DEFAULT_LENGTH)
    }

    /// Storage that issues secret codes of `len` characters
    pub fn with_secret_code_length(len: usize) -> Self {
        Self {
            library: RwLock::new(Library::new()),
            secret_code_length: len,
        }
    }

    pub fn secret_code_length(&self) -> usize {
        self.secret_code_length
    }

    /// Run `f` against a consistent snapshot of the library
    pub async fn inspect<R>(&self, f: impl FnOnce(&Library) -> R) -> R {
        let library = self.library.read().await;
        f(&library)
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    // Users
    async fn register_user(&self, user: RegisterUser) -> Result<User> {
        let mut library = self.library.write().await;
        let user = users::register(&mut library, user, self.secret_code_length)?;
        tracing::debug!(user_id = %user.id, "Registered user");
        Ok(user)
    }

    async fn find_user(&self, id: &UserId) -> Result<Option<User>> {
        let library = self.library.read().await;
        Ok(users::get_by_id(&library, id).cloned())
    }

    async fn find_user_by_secret_code(&self, secret_code: &str) -> Result<Option<User>> {
        let library = self.library.read().await;
        Ok(users::get_by_secret_code(&library, secret_code).cloned())
    }

    async fn user_count(&self) -> Result<usize> {
        Ok(self.library.read().await.user_count())
    }

    // Playlists
    async fn find_playlist(&self, id: &PlaylistId) -> Result<Option<Playlist>> {
        let library = self.library.read().await;
        Ok(playlists::get_by_id(&library, id).cloned())
    }

    async fn create_playlist(&self, user_id: &UserId, playlist: CreatePlaylist) -> Result<User> {
        let mut library = self.library.write().await;
        let user = playlists::create(&mut library, user_id, playlist)?;
        tracing::debug!(%user_id, playlists = user.playlists.len(), "Created playlist");
        Ok(user)
    }

    async fn delete_playlist(&self, user_id: &UserId, playlist_id: &PlaylistId) -> Result<()> {
        let mut library = self.library.write().await;
        let removed = playlists::delete(&mut library, user_id, playlist_id)?;
        tracing::debug!(
            %user_id,
            %playlist_id,
            songs = removed.songs.len(),
            "Deleted playlist"
        );
        Ok(())
    }

    // Songs
    async fn find_song(&self, id: &SongId) -> Result<Option<Song>> {
        let library = self.library.read().await;
        Ok(songs::get_by_id(&library, id).cloned())
    }

    async fn add_song_to_playlist(
        &self,
        user_id: &UserId,
        playlist_id: &PlaylistId,
        song: AddSong,
    ) -> Result<User> {
        let mut library = self.library.write().await;
        let user = songs::add(&mut library, user_id, playlist_id, song)?;
        tracing::debug!(%user_id, %playlist_id, "Added song");
        Ok(user)
    }

    async fn delete_song_from_playlist(
        &self,
        user_id: &UserId,
        playlist_id: &PlaylistId,
        song_id: &SongId,
    ) -> Result<()> {
        let mut library = self.library.write().await;
        songs::remove(&mut library, user_id, playlist_id, song_id)?;
        tracing::debug!(%user_id, %playlist_id, %song_id, "Removed song");
        Ok(())
    }
}
