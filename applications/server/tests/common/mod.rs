/// Common test utilities and fixtures
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use melody_server::{config::ServerConfig, create_router, state::AppState};
use melody_storage::MemoryStorage;
use std::sync::Arc;
use tower::util::ServiceExt;

/// Build the full router over fresh in-memory storage
pub fn create_test_app() -> Router {
    let storage = Arc::new(MemoryStorage::new());
    create_router(AppState::new(storage), &ServerConfig::default().server)
}

/// Response status plus body as text
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("Response body is not JSON")
    }
}

pub fn encode(pairs: &[(&str, &str)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|h| h.to_str().ok())
        .map(str::to_string);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    TestResponse {
        status,
        content_type,
        body: String::from_utf8(body_bytes.to_vec()).unwrap(),
    }
}

/// POST with a url-encoded body
pub async fn post_form(app: &Router, uri: &str, pairs: &[(&str, &str)]) -> TestResponse {
    let request = Request::builder()
        .uri(uri)
        .method(Method::POST)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(encode(pairs)))
        .unwrap();
    send(app, request).await
}

/// Request with the fields in the query string
pub async fn query(app: &Router, method: Method, path: &str, pairs: &[(&str, &str)]) -> TestResponse {
    let uri = if pairs.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, encode(pairs))
    };
    let request = Request::builder()
        .uri(uri)
        .method(method)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Register a user and return the response JSON
pub async fn register(app: &Router, name: &str, email: &str) -> serde_json::Value {
    let response = post_form(app, "/register", &[("name", name), ("email", email)]).await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.body);
    response.json()
}

/// Create a playlist and return its id
pub async fn create_playlist(app: &Router, user_id: &str, name: &str) -> String {
    let response = post_form(
        app,
        "/createPlaylist",
        &[("user_id", user_id), ("name", name)],
    )
    .await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.body);
    let user = response.json();
    let playlists = user["playlists"].as_array().unwrap();
    playlists.last().unwrap()["id"].as_str().unwrap().to_string()
}

/// Add a song and return its id
pub async fn add_song(app: &Router, user_id: &str, playlist_id: &str, name: &str) -> String {
    let url = format!("https://example.com/{}.mp3", name);
    let response = post_form(
        app,
        "/addSongToPlaylist",
        &[
            ("user_id", user_id),
            ("playlist_id", playlist_id),
            ("song_name", name),
            ("composer", "Chopin"),
            ("music_url", url.as_str()),
        ],
    )
    .await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.body);
    let user = response.json();
    let playlist = user["playlists"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["id"] == playlist_id)
        .unwrap()
        .clone();
    playlist["songs"].as_array().unwrap().last().unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string()
}
