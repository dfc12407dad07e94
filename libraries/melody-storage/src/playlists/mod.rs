//! Playlist lookup, creation and deletion

use crate::{users, Library};
use melody_core::{
    error::{MelodyError, Result},
    types::{CreatePlaylist, Playlist, PlaylistId, User, UserId},
};

/// Get playlist by ID, whoever owns it
pub fn get_by_id<'a>(library: &'a Library, id: &PlaylistId) -> Option<&'a Playlist> {
    let owner = library.playlist_owners.get(id)?;
    library.users.get(owner)?.playlist(id)
}

/// Append a new, empty playlist to the user's playlists
///
/// Returns the updated user.
pub fn create(library: &mut Library, user_id: &UserId, input: CreatePlaylist) -> Result<User> {
    if input.name.is_empty() {
        return Err(MelodyError::invalid_input("Playlist name is required"));
    }

    let user = users::get_mut(library, user_id)?;
    let playlist = Playlist::new(input.name);
    let playlist_id = playlist.id.clone();
    user.playlists.push(playlist);
    let updated = user.clone();

    library.playlist_owners.insert(playlist_id, user_id.clone());
    Ok(updated)
}

/// Delete one of the user's playlists and forget its songs
pub fn delete(library: &mut Library, user_id: &UserId, playlist_id: &PlaylistId) -> Result<Playlist> {
    let user = users::get_mut(library, user_id)?;
    let removed = user
        .remove_playlist(playlist_id)
        .ok_or_else(|| MelodyError::PlaylistNotFound(playlist_id.clone()))?;

    library.playlist_owners.remove(playlist_id);
    for song in &removed.songs {
        library.song_locations.remove(&song.id);
    }

    Ok(removed)
}

/// Get one of the user's playlists for mutation
///
/// A playlist that exists but belongs to someone else is `PlaylistNotFound`.
pub(crate) fn get_owned_mut<'a>(
    library: &'a mut Library,
    user_id: &UserId,
    playlist_id: &PlaylistId,
) -> Result<&'a mut Playlist> {
    users::get_mut(library, user_id)?
        .playlist_mut(playlist_id)
        .ok_or_else(|| MelodyError::PlaylistNotFound(playlist_id.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use melody_core::types::RegisterUser;

    fn library_with_user() -> (Library, UserId) {
        let mut library = Library::new();
        let user = users::register(
            &mut library,
            RegisterUser {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
            },
            8,
        )
        .unwrap();
        (library, user.id)
    }

    fn named(name: &str) -> CreatePlaylist {
        CreatePlaylist {
            name: name.to_string(),
        }
    }

    #[test]
    fn create_appends_and_indexes() {
        let (mut library, user_id) = library_with_user();

        create(&mut library, &user_id, named("First")).unwrap();
        let user = create(&mut library, &user_id, named("Second")).unwrap();

        let names: Vec<_> = user.playlists.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["First", "Second"]);

        let second = &user.playlists[1];
        assert_eq!(get_by_id(&library, &second.id), Some(second));
        assert!(library.is_consistent());
    }

    #[test]
    fn create_for_unknown_user_fails() {
        let (mut library, _) = library_with_user();
        let err = create(&mut library, &UserId::new("ghost"), named("x")).unwrap_err();
        assert!(matches!(err, MelodyError::UserNotFound(_)));
    }

    #[test]
    fn create_requires_name() {
        let (mut library, user_id) = library_with_user();
        let err = create(&mut library, &user_id, named("")).unwrap_err();
        assert!(matches!(err, MelodyError::InvalidInput(_)));
    }

    #[test]
    fn delete_removes_playlist_and_index() {
        let (mut library, user_id) = library_with_user();
        let user = create(&mut library, &user_id, named("Doomed")).unwrap();
        let playlist_id = user.playlists[0].id.clone();

        delete(&mut library, &user_id, &playlist_id).unwrap();

        assert!(get_by_id(&library, &playlist_id).is_none());
        assert!(users::get_by_id(&library, &user_id).unwrap().playlists.is_empty());
        assert!(library.is_consistent());

        let err = delete(&mut library, &user_id, &playlist_id).unwrap_err();
        assert!(matches!(err, MelodyError::PlaylistNotFound(_)));
    }
}
