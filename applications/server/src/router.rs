/// HTTP route table
use crate::{api, config::ServerSettings, state::AppState};
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

pub fn create_router(app_state: AppState, settings: &ServerSettings) -> Router {
    let routes = Router::new()
        .route("/", get(api::home::home))
        .route("/health", get(api::health::health))
        // Accounts
        .route("/login", post(api::users::login))
        .route("/register", post(api::users::register))
        .route("/viewProfile", get(api::users::view_profile))
        // Playlists
        .route(
            "/getAllSongsOfPlaylist",
            get(api::playlists::get_all_songs_of_playlist),
        )
        .route("/createPlaylist", post(api::playlists::create_playlist))
        .route("/deletePlaylist", delete(api::playlists::delete_playlist))
        // Songs
        .route("/addSongToPlaylist", post(api::songs::add_song_to_playlist))
        .route(
            "/deleteSongFromPlaylist",
            delete(api::songs::delete_song_from_playlist),
        )
        .route("/getSongDetail", get(api::songs::get_song_detail));

    let routes = routes.layer(
        TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default().include_headers(true)),
    );

    let routes = if settings.cors {
        routes.layer(CorsLayer::permissive())
    } else {
        routes
    };

    routes.with_state(app_state)
}
