//! Menu models matching the menu JSON resource.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Filter value that selects every category.
pub const ALL_CATEGORIES: &str = "gjitha";

/// Menu category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fillestar,
    Kryesor,
    #[serde(rename = "ëmbëlsira")]
    Embelsira,
    Pije,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Fillestar,
        Category::Kryesor,
        Category::Embelsira,
        Category::Pije,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fillestar => "fillestar",
            Category::Kryesor => "kryesor",
            Category::Embelsira => "ëmbëlsira",
            Category::Pije => "pije",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "fillestar" => Some(Category::Fillestar),
            "kryesor" => Some(Category::Kryesor),
            "ëmbëlsira" => Some(Category::Embelsira),
            "pije" => Some(Category::Pije),
            _ => None,
        }
    }
}

/// Single-valued category selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    /// Parse a filter-surface value. Returns `None` outside the fixed set.
    pub fn from_str(s: &str) -> Option<Self> {
        if s == ALL_CATEGORIES {
            return Some(CategoryFilter::All);
        }
        Category::from_str(s).map(CategoryFilter::Only)
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected.as_str() == category,
        }
    }
}

/// A dish or drink on the menu.
///
/// `category` is kept as the raw string so entries with an unknown
/// category still load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    pub id: u32,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Decimal price as shown, e.g. "10.90"
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge_class: Option<String>,
}

/// Current category and search selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub search_term: String,
}

impl FilterState {
    pub fn new(category: CategoryFilter, search_term: impl Into<String>) -> Self {
        Self {
            category,
            search_term: search_term.into(),
        }
    }

    /// Replace the selected category.
    pub fn select(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Category AND case-insensitive title search.
    pub fn matches(&self, entry: &MenuEntry) -> bool {
        if !self.category.matches(&entry.category) {
            return false;
        }
        self.search_term.is_empty()
            || entry
                .title
                .to_lowercase()
                .contains(&self.search_term.to_lowercase())
    }
}

/// Set of favorite menu entry ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites(BTreeSet<u32>);

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the set with `id` flipped: removed if present, added otherwise.
    pub fn toggled(&self, id: u32) -> Self {
        let mut ids = self.0.clone();
        if !ids.remove(&id) {
            ids.insert(id);
        }
        Self(ids)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<u32> for Favorites {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u32, category: &str, title: &str) -> MenuEntry {
        MenuEntry {
            id,
            title: title.to_string(),
            category: category.to_string(),
            description: String::new(),
            price: "1.00".to_string(),
            badge: None,
            badge_class: None,
        }
    }

    #[test]
    fn test_category_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.as_str()), Some(category));
        }
        assert_eq!(Category::from_str("desserts"), None);
    }

    #[test]
    fn test_category_serde_uses_site_names() {
        let json = serde_json::to_string(&Category::Embelsira).unwrap();
        assert_eq!(json, "\"ëmbëlsira\"");
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!(CategoryFilter::from_str("gjitha"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::from_str("pije"),
            Some(CategoryFilter::Only(Category::Pije))
        );
        assert_eq!(CategoryFilter::from_str("all"), None);
    }

    #[test]
    fn test_filter_matches() {
        let lemonade = entry(1, "pije", "Limonadë e Freskët");
        let all = FilterState::default();
        assert!(all.matches(&lemonade));

        let drinks = FilterState::new(CategoryFilter::Only(Category::Pije), "LIMON");
        assert!(drinks.matches(&lemonade));

        let mains = FilterState::new(CategoryFilter::Only(Category::Kryesor), "");
        assert!(!mains.matches(&lemonade));

        let miss = FilterState::new(CategoryFilter::All, "risotto");
        assert!(!miss.matches(&lemonade));
    }

    #[test]
    fn test_select_replaces_category() {
        let mut state = FilterState::default();
        state.select(CategoryFilter::Only(Category::Pije));
        state.select(CategoryFilter::Only(Category::Kryesor));
        assert_eq!(state.category, CategoryFilter::Only(Category::Kryesor));
    }

    #[test]
    fn test_unknown_category_only_visible_under_all() {
        let special = entry(9, "special", "Chef's Table");
        assert!(FilterState::default().matches(&special));
        for category in Category::ALL {
            let state = FilterState::new(CategoryFilter::Only(category), "");
            assert!(!state.matches(&special));
        }
    }

    #[test]
    fn test_favorites_toggle() {
        let empty = Favorites::new();
        let one = empty.toggled(3);
        assert!(one.contains(3));
        assert!(empty.is_empty());

        let back = one.toggled(3);
        assert_eq!(back, empty);
    }

    #[test]
    fn test_menu_entry_json_shape() {
        let json = r#"{"id":4,"title":"Fileto Viçi","category":"kryesor",
            "description":"Fileto me salcë piper","price":"14.50",
            "badge":"Chef","badgeClass":"gold"}"#;
        let parsed: MenuEntry = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.badge_class.as_deref(), Some("gold"));
        assert_eq!(parsed.category, "kryesor");
    }
}
