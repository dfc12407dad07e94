use melody_core::types::{PlaylistId, SecretCode, SongId, User, UserId};
use std::collections::HashMap;

/// Unlocked in-memory state
///
/// `users` is the source of truth. The other maps are indexes that every
/// slice keeps in step with it.
#[derive(Debug, Default)]
pub struct Library {
    pub(crate) users: HashMap<UserId, User>,
    pub(crate) secret_codes: HashMap<SecretCode, UserId>,
    pub(crate) playlist_owners: HashMap<PlaylistId, UserId>,
    pub(crate) song_locations: HashMap<SongId, (UserId, PlaylistId)>,
}

impl Library {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered users
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Check that every index entry points at a live entity and that every
    /// entity is indexed. Used by tests.
    pub fn is_consistent(&self) -> bool {
        let codes_ok = self.secret_codes.len() == self.users.len()
            && self.users.values().all(|u| {
                self.secret_codes.get(&u.secret_code) == Some(&u.id)
            });

        let playlist_count: usize = self.users.values().map(|u| u.playlists.len()).sum();
        let playlists_ok = self.playlist_owners.len() == playlist_count
            && self.users.values().all(|u| {
                u.playlists
                    .iter()
                    .all(|p| self.playlist_owners.get(&p.id) == Some(&u.id))
            });

        let song_count: usize = self
            .users
            .values()
            .flat_map(|u| &u.playlists)
            .map(|p| p.songs.len())
            .sum();
        let songs_ok = self.song_locations.len() == song_count
            && self.users.values().all(|u| {
                u.playlists.iter().all(|p| {
                    p.songs.iter().all(|s| {
                        self.song_locations.get(&s.id) == Some(&(u.id.clone(), p.id.clone()))
                    })
                })
            });

        codes_ok && playlists_ok && songs_ok
    }
}
