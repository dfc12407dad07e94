/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use melody_core::MelodyError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("JSON encoding error: {0}")]
    Encoding(#[source] serde_json::Error),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Core(#[from] MelodyError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    /// Status code and plain-text body sent to the client
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ServerError::Core(e) => match e {
                MelodyError::UserNotFound(_) => (StatusCode::NOT_FOUND, "User not found".to_string()),
                MelodyError::PlaylistNotFound(_) => {
                    (StatusCode::NOT_FOUND, "Playlist not found".to_string())
                }
                MelodyError::SongNotFound(_) => (
                    StatusCode::NOT_FOUND,
                    "Song not found in the playlist".to_string(),
                ),
                MelodyError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                MelodyError::Serialization(_) | MelodyError::Other(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                ),
            },
            ServerError::Encoding(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "JSON encoding error".to_string(),
            ),
            ServerError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
            ServerError::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Configuration error".to_string(),
            ),
            ServerError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO error".to_string()),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!(status = status.as_u16(), "{}", message);
        }

        (status, message).into_response()
    }
}
