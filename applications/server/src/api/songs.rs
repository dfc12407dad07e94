/// Songs API routes
use crate::{
    error::{Result, ServerError},
    extract::FormFields,
    response::{ApiJson, MessageResponse},
    state::AppState,
};
use axum::extract::State;
use melody_core::types::{AddSong, PlaylistId, Song, SongId, User, UserId};

/// POST /addSongToPlaylist
/// Append a song to one of the user's playlists
pub async fn add_song_to_playlist(
    State(app_state): State<AppState>,
    fields: FormFields,
) -> Result<ApiJson<User>> {
    let [song_name, composer, music_url] = fields.required(
        ["song_name", "composer", "music_url"],
        "Song name, composer, and music URL are required",
    )?;
    let [user_id, playlist_id] = fields.required(
        ["user_id", "playlist_id"],
        "User ID and playlist ID are required",
    )?;

    let user_id = UserId::new(user_id);
    let playlist_id = PlaylistId::new(playlist_id);
    let user = app_state
        .storage
        .add_song_to_playlist(
            &user_id,
            &playlist_id,
            AddSong {
                name: song_name.to_string(),
                composer: composer.to_string(),
                music_url: music_url.to_string(),
            },
        )
        .await?;

    tracing::info!(%user_id, %playlist_id, song = song_name, "Added song");
    Ok(ApiJson(user))
}

/// DELETE /deleteSongFromPlaylist
/// Remove a song from one of the user's playlists
pub async fn delete_song_from_playlist(
    State(app_state): State<AppState>,
    fields: FormFields,
) -> Result<ApiJson<MessageResponse>> {
    let [user_id, playlist_id, song_id] = fields.required(
        ["user_id", "playlist_id", "song_id"],
        "User ID, playlist ID, and song ID are required",
    )?;

    let user_id = UserId::new(user_id);
    let playlist_id = PlaylistId::new(playlist_id);
    let song_id = SongId::new(song_id);
    app_state
        .storage
        .delete_song_from_playlist(&user_id, &playlist_id, &song_id)
        .await?;

    tracing::info!(%user_id, %playlist_id, %song_id, "Deleted song");
    Ok(ApiJson(MessageResponse::new("Song deleted successfully")))
}

/// GET /getSongDetail
/// Look a song up in any playlist
pub async fn get_song_detail(
    State(app_state): State<AppState>,
    fields: FormFields,
) -> Result<ApiJson<Song>> {
    let [song_id] = fields.required(["song_id"], "Song ID is required")?;

    let song = app_state
        .storage
        .find_song(&SongId::new(song_id))
        .await?
        .ok_or_else(|| ServerError::NotFound("Song not found".to_string()))?;

    Ok(ApiJson(song))
}
