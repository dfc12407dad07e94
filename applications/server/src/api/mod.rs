/// API route modules
pub mod health;
pub mod home;
pub mod playlists;
pub mod songs;
pub mod users;
