//! Melody Server Library
//!
//! In-memory playlist service: users register, log in with a secret code,
//! and manage playlists of songs over form-encoded HTTP endpoints.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod response;
pub mod router;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use router::create_router;
pub use state::AppState;
