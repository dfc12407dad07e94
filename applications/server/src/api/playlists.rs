/// Playlists API routes
use crate::{
    error::{Result, ServerError},
    extract::FormFields,
    response::{ApiJson, MessageResponse},
    state::AppState,
};
use axum::extract::State;
use melody_core::types::{CreatePlaylist, PlaylistId, Song, User, UserId};

/// GET /getAllSongsOfPlaylist
/// Songs of any user's playlist
pub async fn get_all_songs_of_playlist(
    State(app_state): State<AppState>,
    fields: FormFields,
) -> Result<ApiJson<Vec<Song>>> {
    let [playlist_id] = fields.required(["playlist_id"], "Playlist ID is required")?;

    let songs = app_state
        .storage
        .playlist_songs(&PlaylistId::new(playlist_id))
        .await?
        .ok_or_else(|| ServerError::NotFound("Playlist not found".to_string()))?;

    Ok(ApiJson(songs))
}

/// POST /createPlaylist
/// Create an empty playlist for the user
pub async fn create_playlist(
    State(app_state): State<AppState>,
    fields: FormFields,
) -> Result<ApiJson<User>> {
    let [name] = fields.required(["name"], "Playlist name is required")?;
    let [user_id] = fields.required(["user_id"], "User ID is required")?;

    let user_id = UserId::new(user_id);
    let user = app_state
        .storage
        .create_playlist(
            &user_id,
            CreatePlaylist {
                name: name.to_string(),
            },
        )
        .await?;

    tracing::info!(%user_id, name, "Created playlist");
    Ok(ApiJson(user))
}

/// DELETE /deletePlaylist
/// Delete one of the user's playlists
pub async fn delete_playlist(
    State(app_state): State<AppState>,
    fields: FormFields,
) -> Result<ApiJson<MessageResponse>> {
    let [user_id, playlist_id] = fields.required(
        ["user_id", "playlist_id"],
        "User ID and playlist ID are required",
    )?;

    let user_id = UserId::new(user_id);
    let playlist_id = PlaylistId::new(playlist_id);
    app_state
        .storage
        .delete_playlist(&user_id, &playlist_id)
        .await?;

    tracing::info!(%user_id, %playlist_id, "Deleted playlist");
    Ok(ApiJson(MessageResponse::new("Playlist deleted successfully")))
}
