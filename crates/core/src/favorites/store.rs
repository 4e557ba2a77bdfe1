//! Locally persisted favorite routes.

use chrono::{DateTime, Utc};
use gil_transit::identifiers::FavoriteIdentifier;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::route::types::{Congestion, RouteSummary};

use super::storage::{KeyValueStorage, StorageError};

/// The whole favorites list lives as one JSON array under this key.
const STORAGE_KEY: &str = "favorites_routes";

#[derive(Debug, thiserror::Error)]
pub enum FavoritesError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("favorites payload is corrupt: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("no favorite with id {0}")]
    NotFound(FavoriteIdentifier),
}

/// Deterministic favorite id for a station pair, so re-searching the same
/// pair can detect "already favorited" without touching any server.
pub fn favorite_id(from: &str, to: &str) -> FavoriteIdentifier {
    FavoriteIdentifier::new(format!("search:{from}:{to}"))
}

/// A user-saved origin/destination pair with a custom display name and an
/// optional summary snapshot captured at save time for offline display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FavoriteRoute {
    pub id: FavoriteIdentifier,
    pub name: String,
    pub from: String,
    pub to: String,
    #[serde(rename = "time", default, skip_serializing_if = "Option::is_none")]
    pub total_time_min: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub congestion: Option<Congestion>,
    #[serde(default = "Utc::now")]
    pub saved_at: DateTime<Utc>,
}

impl FavoriteRoute {
    /// Build a favorite from a search, snapshotting the top result if any.
    /// Without an alias the name defaults to "from → to".
    pub fn from_search(
        from: impl Into<String>,
        to: impl Into<String>,
        alias: Option<String>,
        top_route: Option<&RouteSummary>,
    ) -> Self {
        let from = from.into();
        let to = to.into();
        Self {
            id: favorite_id(&from, &to),
            name: alias.unwrap_or_else(|| format!("{from} → {to}")),
            from,
            to,
            total_time_min: top_route.map(|r| r.total_time_min),
            congestion: top_route.map(|r| r.congestion),
            saved_at: Utc::now(),
        }
    }
}

/// Favorites list over a [`KeyValueStorage`] backend.
///
/// Every operation loads, transforms, and rewrites the whole list; the list
/// is a handful of entries, and one key keeps the layout compatible with a
/// plain key-value store.
pub struct FavoriteStore<S: KeyValueStorage> {
    storage: S,
}

impl<S: KeyValueStorage> FavoriteStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// All saved favorites. A key that was never written is an empty list.
    pub async fn list(&self) -> Result<Vec<FavoriteRoute>, FavoritesError> {
        let Some(bytes) = self.storage.load(STORAGE_KEY).await? else {
            return Ok(Vec::new());
        };

        serde_json::from_slice(&bytes).map_err(|e| {
            warn!(error = %e, "stored favorites failed to parse");
            FavoritesError::Serde(e)
        })
    }

    /// Add a favorite. Idempotent: an id that is already saved leaves the
    /// stored list unchanged and returns it as-is.
    pub async fn add(&self, favorite: FavoriteRoute) -> Result<Vec<FavoriteRoute>, FavoritesError> {
        let mut favorites = self.list().await?;

        if favorites.iter().any(|f| f.id == favorite.id) {
            debug!(id = %favorite.id, "favorite already saved");
            return Ok(favorites);
        }

        favorites.push(favorite);
        self.persist(&favorites).await?;
        Ok(favorites)
    }

    /// Remove a favorite by id. Removing an absent id is a no-op.
    pub async fn remove(
        &self,
        id: &FavoriteIdentifier,
    ) -> Result<Vec<FavoriteRoute>, FavoritesError> {
        let mut favorites = self.list().await?;
        favorites.retain(|f| &f.id != id);
        self.persist(&favorites).await?;
        Ok(favorites)
    }

    /// Rename a favorite. Only the display name changes; every other field
    /// and every other entry stays untouched.
    pub async fn rename(
        &self,
        id: &FavoriteIdentifier,
        new_name: impl Into<String>,
    ) -> Result<(), FavoritesError> {
        let mut favorites = self.list().await?;

        let Some(favorite) = favorites.iter_mut().find(|f| &f.id == id) else {
            return Err(FavoritesError::NotFound(id.clone()));
        };
        favorite.name = new_name.into();

        self.persist(&favorites).await
    }

    /// Whether a favorite with this id is saved.
    pub async fn contains(&self, id: &FavoriteIdentifier) -> Result<bool, FavoritesError> {
        Ok(self.list().await?.iter().any(|f| &f.id == id))
    }

    async fn persist(&self, favorites: &[FavoriteRoute]) -> Result<(), FavoritesError> {
        let bytes = serde_json::to_vec(favorites)?;
        self.storage.save(STORAGE_KEY, &bytes).await?;
        Ok(())
    }
}
