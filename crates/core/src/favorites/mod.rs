//! Favorite routes and their local persistence.

pub mod storage;
pub mod store;

pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
pub use store::{favorite_id, FavoriteRoute, FavoriteStore, FavoritesError};
