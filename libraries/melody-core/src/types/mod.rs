mod ids;
mod playlist;
mod secret;
mod song;
mod user;

pub use ids::{PlaylistId, SongId, UserId};
pub use playlist::{CreatePlaylist, Playlist};
pub use secret::SecretCode;
pub use song::{AddSong, Song};
pub use user::{RegisterUser, User};
