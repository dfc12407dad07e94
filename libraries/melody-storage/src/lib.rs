//! Melody Storage
//!
//! In-memory storage layer for the Melody playlist service.
//!
//! # Architecture
//!
//! - **Keyed**: users live in a map keyed by id, with secondary indexes for
//!   secret codes, playlist owners and song locations
//! - **Vertical Slicing**: `users`, `playlists` and `songs` each own their
//!   lookups and mutations over a [`Library`]
//! - **One Lock**: [`MemoryStorage`] wraps the library in a single `RwLock`,
//!   so every `Storage` call is atomic
//!
//! Nothing is persisted; state is lost when the process exits.
//!
//! # Example
//!
//! ```rust
//! use melody_core::{RegisterUser, Storage};
//! use melody_storage::MemoryStorage;
//!
//! # async fn example() -> melody_core::Result<()> {
//! let storage = MemoryStorage::new();
//!
//! let user = storage
//!     .register_user(RegisterUser {
//!         name: "Alice".to_string(),
//!         email: "alice@example.com".to_string(),
//!     })
//!     .await?;
//!
//! let same = storage.find_user_by_secret_code(user.secret_code.as_str()).await?;
//! assert_eq!(same, Some(user));
//! # Ok(())
//! # }
//! ```

mod context;
mod library;

// Vertical slices
pub mod playlists;
pub mod songs;
pub mod users;

pub use context::MemoryStorage;
pub use library::Library;
