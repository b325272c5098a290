//! Saved filter and favorites selection from the menu filter demo.

use super::KeyValueStore;
use crate::errors::AppError;
use crate::models::{CategoryFilter, Favorites};

pub const FILTER_KEY: &str = "gourmet_menu_filter";
pub const FAVORITES_KEY: &str = "gourmet_favorites";

/// User preferences restored on the next visit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    pub category: CategoryFilter,
    pub favorites: Favorites,
}

pub struct PreferencesStore<S> {
    backend: S,
}

impl<S: KeyValueStore> PreferencesStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Save both preferences. Favorites are written first, so a failed
    /// save never leaves a new category next to stale favorites; it can
    /// leave new favorites next to the previous category.
    pub async fn save(&self, preferences: &Preferences) -> Result<(), AppError> {
        let favorites = serde_json::to_string(&preferences.favorites)
            .map_err(|e| AppError::Storage(format!("Failed to encode favorites: {}", e)))?;

        self.backend.set(FAVORITES_KEY, &favorites).await?;
        self.backend
            .set(FILTER_KEY, preferences.category.as_str())
            .await?;
        tracing::debug!(
            "Saved preferences: category={}, favorites={}",
            preferences.category.as_str(),
            preferences.favorites.len()
        );
        Ok(())
    }

    /// Load saved preferences. Missing, unknown or malformed values fall
    /// back to their defaults.
    pub async fn load(&self) -> Preferences {
        let category = match self.backend.get(FILTER_KEY).await {
            Ok(Some(raw)) => CategoryFilter::from_str(&raw).unwrap_or_else(|| {
                tracing::warn!("Ignoring unknown saved category {:?}", raw);
                CategoryFilter::All
            }),
            Ok(None) => CategoryFilter::All,
            Err(e) => {
                tracing::warn!("Reading saved category failed: {}", e);
                CategoryFilter::All
            }
        };

        let favorites = match self.backend.get(FAVORITES_KEY).await {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("Discarding malformed favorites: {}", e);
                Favorites::default()
            }),
            Ok(None) => Favorites::default(),
            Err(e) => {
                tracing::warn!("Reading favorites failed: {}", e);
                Favorites::default()
            }
        };

        Preferences {
            category,
            favorites,
        }
    }
}
