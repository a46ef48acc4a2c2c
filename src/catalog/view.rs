//! Derivation of the grouped catalog view handed to the rendering layer.
//!
//! The view is a pure function of the product collection and an explicit,
//! serializable [`CatalogViewState`]; re-deriving it with the same inputs
//! yields the same sections.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::filter::{distinct_categories, filter, FilterCriteria, Selector};
use super::product::Product;
use crate::config::{SECTION_KEY_NEW, SECTION_KEY_TRENDING, SECTION_PREVIEW_LIMIT};

/// Explicit view state: the active filter criteria plus which sections are
/// expanded. Sections are independent; any number may be expanded at once.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogViewState {
    pub criteria: FilterCriteria,
    pub expanded: BTreeSet<String>,
}

impl CatalogViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the section with the given key is expanded.
    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.contains(key)
    }

    /// Flip the expansion state of one section, leaving the others alone.
    /// Returns the new state of that section.
    pub fn toggle_expanded(&mut self, key: &str) -> bool {
        if self.expanded.remove(key) {
            false
        } else {
            self.expanded.insert(key.to_string());
            true
        }
    }
}

/// A named, capped subset of the filtered catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    /// Stable key used for expansion state ("trending", "new", or a
    /// category value).
    pub key: String,

    /// Display title.
    pub title: String,

    /// Products to display: the full slice when expanded, otherwise at
    /// most the preview limit.
    pub items: Vec<Product>,

    /// Size of the section before truncation.
    pub total: usize,

    pub expanded: bool,
}

impl Section {
    fn new(key: &str, title: String, mut items: Vec<Product>, expanded: bool) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        let total = items.len();
        if !expanded {
            items.truncate(SECTION_PREVIEW_LIMIT);
        }
        Some(Self {
            key: key.to_string(),
            title,
            items,
            total,
            expanded,
        })
    }
}

/// The derived, re-computable view object for the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogView {
    pub sections: Vec<Section>,

    /// True when the criteria exclude every product, regardless of which
    /// selector produced the exclusion.
    pub no_results: bool,
}

/// Derive the grouped catalog view from an immutable product collection.
///
/// With the category selector on `All`, the view leads with a trending
/// section (filtered products, stable-sorted descending by rating) and a
/// newly-added section (filtered products in input order, a placeholder
/// until entries carry a recency field), followed by one section per
/// distinct category of the full collection. With an exact category
/// selected, only that category's section is derived. Empty sections are
/// suppressed.
pub fn build_view(products: &[Product], state: &CatalogViewState) -> CatalogView {
    let filtered = filter(products, &state.criteria);
    let no_results = filtered.is_empty();

    let mut sections = Vec::new();
    match &state.criteria.category {
        Selector::Only(category) => {
            sections.extend(category_section(category, &filtered, state));
        }
        Selector::All => {
            let mut trending = filtered.clone();
            // Stable sort: equal ratings keep their input order.
            trending.sort_by(|a, b| b.rating.total_cmp(&a.rating));
            sections.extend(Section::new(
                SECTION_KEY_TRENDING,
                "Trending Now".to_string(),
                trending,
                state.is_expanded(SECTION_KEY_TRENDING),
            ));

            sections.extend(Section::new(
                SECTION_KEY_NEW,
                "Newly Added".to_string(),
                filtered.clone(),
                state.is_expanded(SECTION_KEY_NEW),
            ));

            for category in distinct_categories(products) {
                sections.extend(category_section(&category, &filtered, state));
            }
        }
    }

    CatalogView {
        sections,
        no_results,
    }
}

fn category_section(
    category: &str,
    filtered: &[Product],
    state: &CatalogViewState,
) -> Option<Section> {
    let items: Vec<Product> = filtered
        .iter()
        .filter(|p| p.category == category)
        .cloned()
        .collect();
    Section::new(
        category,
        title_case(category),
        items,
        state.is_expanded(category),
    )
}

/// Capitalize the first character, matching how category values are shown.
fn title_case(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
