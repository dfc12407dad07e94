//! Song lookup, insertion and removal

use crate::{playlists, Library};
use melody_core::{
    error::{MelodyError, Result},
    types::{AddSong, PlaylistId, Song, SongId, User, UserId},
};

/// Get song by ID, whichever playlist holds it
pub fn get_by_id<'a>(library: &'a Library, id: &SongId) -> Option<&'a Song> {
    let (owner, playlist_id) = library.song_locations.get(id)?;
    library
        .users
        .get(owner)?
        .playlist(playlist_id)?
        .song(id)
}

/// Append a song to one of the user's playlists
///
/// The playlist keeps its position in the user's list. Returns the updated user.
pub fn add(
    library: &mut Library,
    user_id: &UserId,
    playlist_id: &PlaylistId,
    input: AddSong,
) -> Result<User> {
    if input.name.is_empty() || input.composer.is_empty() || input.music_url.is_empty() {
        return Err(MelodyError::invalid_input(
            "Song name, composer, and music URL are required",
        ));
    }

    let playlist = playlists::get_owned_mut(library, user_id, playlist_id)?;
    let song = Song::from(input);
    let song_id = song.id.clone();
    playlist.songs.push(song);

    library
        .song_locations
        .insert(song_id, (user_id.clone(), playlist_id.clone()));

    // Owner was resolved above
    library
        .users
        .get(user_id)
        .cloned()
        .ok_or_else(|| MelodyError::UserNotFound(user_id.clone()))
}

/// Remove a song from one of the user's playlists
pub fn remove(
    library: &mut Library,
    user_id: &UserId,
    playlist_id: &PlaylistId,
    song_id: &SongId,
) -> Result<Song> {
    let playlist = playlists::get_owned_mut(library, user_id, playlist_id)?;
    let removed = playlist
        .remove_song(song_id)
        .ok_or_else(|| MelodyError::SongNotFound(song_id.clone()))?;

    library.song_locations.remove(song_id);
    Ok(removed)
}
