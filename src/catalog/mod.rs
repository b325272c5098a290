//! Menu catalog: loading menu data and computing the visible subset.
//!
//! Filtering is pure and synchronous. Loading is the only suspension point.

mod demo;

pub use demo::demo_menu;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::errors::AppError;
use crate::models::{CategoryFilter, Favorites, FilterState, MenuEntry};

/// Where menu data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuSource {
    /// Entries already in hand.
    Static(Vec<MenuEntry>),
    /// JSON array served over HTTP(S).
    Url(String),
    /// JSON array on the local filesystem.
    File(PathBuf),
}

impl MenuSource {
    /// Interpret a configured location: `http(s)://` values are URLs,
    /// anything else is a file path.
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            MenuSource::Url(location.to_string())
        } else {
            MenuSource::File(PathBuf::from(location))
        }
    }
}

/// Loads menu entries from a [`MenuSource`].
#[derive(Debug, Clone, Default)]
pub struct MenuLoader {
    client: reqwest::Client,
}

impl MenuLoader {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Load the menu. Transport failures, non-success statuses and payloads
    /// that are not a JSON array of entries are reported as [`AppError::Load`].
    pub async fn load(&self, source: &MenuSource) -> Result<Vec<MenuEntry>, AppError> {
        let entries = match source {
            MenuSource::Static(entries) => entries.clone(),
            MenuSource::Url(url) => self.fetch(url).await?,
            MenuSource::File(path) => read_file(path).await?,
        };
        tracing::debug!("Loaded {} menu entries", entries.len());
        Ok(entries)
    }

    async fn fetch(&self, url: &str) -> Result<Vec<MenuEntry>, AppError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Load(format!(
                "Menu request to {} failed with status {}",
                url, status
            )));
        }
        let body = response.text().await?;
        parse_menu(&body)
    }
}

/// Load with a default HTTP client.
pub async fn load(source: &MenuSource) -> Result<Vec<MenuEntry>, AppError> {
    MenuLoader::default().load(source).await
}

async fn read_file(path: &Path) -> Result<Vec<MenuEntry>, AppError> {
    tracing::debug!("Reading menu file {}", path.display());
    let body = tokio::fs::read_to_string(path).await?;
    parse_menu(&body)
}

/// Parse a JSON array of menu entries. Ids must be unique.
pub fn parse_menu(body: &str) -> Result<Vec<MenuEntry>, AppError> {
    let entries: Vec<MenuEntry> = serde_json::from_str(body)?;

    let mut seen = HashSet::new();
    if let Some(dup) = entries.iter().find(|e| !seen.insert(e.id)) {
        return Err(AppError::Load(format!("Duplicate menu entry id {}", dup.id)));
    }

    Ok(entries)
}

/// Entries visible under `filter`, in input order.
pub fn apply(entries: &[MenuEntry], filter: &FilterState) -> Vec<MenuEntry> {
    entries
        .iter()
        .filter(|entry| filter.matches(entry))
        .cloned()
        .collect()
}

/// Load status of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogState {
    Loading,
    Ready(Vec<MenuEntry>),
    /// Last load failed; the page shows a "no data" state.
    Unavailable(String),
}

/// Identifies one load request. Only the most recent ticket is honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Menu entries plus the user's filter and favorites selection.
#[derive(Debug, Clone)]
pub struct MenuCatalog {
    state: CatalogState,
    filter: FilterState,
    favorites: Favorites,
    generation: u64,
}

impl Default for MenuCatalog {
    fn default() -> Self {
        Self::with_entries(Vec::new())
    }
}

impl MenuCatalog {
    pub fn with_entries(entries: Vec<MenuEntry>) -> Self {
        Self {
            state: CatalogState::Ready(entries),
            filter: FilterState::default(),
            favorites: Favorites::default(),
            generation: 0,
        }
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    /// Loaded entries, or an empty slice while loading or after a failure.
    pub fn entries(&self) -> &[MenuEntry] {
        match &self.state {
            CatalogState::Ready(entries) => entries,
            _ => &[],
        }
    }

    /// Entries passing the current filter.
    pub fn visible(&self) -> Vec<MenuEntry> {
        apply(self.entries(), &self.filter)
    }

    pub fn select_category(&mut self, category: CategoryFilter) {
        self.filter.select(category);
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filter.set_search(term);
    }

    pub fn set_filter(&mut self, filter: FilterState) {
        self.filter = filter;
    }

    pub fn set_favorites(&mut self, favorites: Favorites) {
        self.favorites = favorites;
    }

    pub fn toggle_favorite(&mut self, id: u32) {
        self.favorites = self.favorites.toggled(id);
    }

    /// Start a load. Any earlier outstanding ticket is superseded.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.state = CatalogState::Loading;
        LoadTicket(self.generation)
    }

    /// Record the outcome of a load. Returns `false` if the ticket was
    /// superseded and the result discarded.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<MenuEntry>, AppError>,
    ) -> bool {
        if ticket.0 != self.generation {
            tracing::debug!("Discarding superseded menu load {}", ticket.0);
            return false;
        }

        self.state = match result {
            Ok(entries) => CatalogState::Ready(entries),
            Err(e) => {
                tracing::warn!("Menu unavailable: {}", e);
                CatalogState::Unavailable(e.to_string())
            }
        };
        true
    }

    /// Load from `source` and replace the catalog contents.
    pub async fn refresh(&mut self, loader: &MenuLoader, source: &MenuSource) -> &CatalogState {
        let ticket = self.begin_load();
        let result = loader.load(source).await;
        self.finish_load(ticket, result);
        &self.state
    }
}
