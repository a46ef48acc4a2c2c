//! The catalog filter engine: a pure predicate pipeline over an immutable
//! product collection, recomputed on every criteria change.

use serde::{Deserialize, Serialize};

use super::product::Product;

/// A selector that either admits every value or exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selector {
    #[default]
    All,
    Only(String),
}

impl Selector {
    /// Whether this selector admits the given value (exact match).
    pub fn admits(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }
}

/// Ephemeral filter state derived from user input.
///
/// The default value matches every product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Category selector: all, or an exact category value.
    pub category: Selector,

    /// Brand selector: all, or an exact brand value.
    pub brand: Selector,

    /// Minimum rating threshold in [0, 5].
    pub min_rating: f64,

    /// Free-text query, matched case-insensitively as a substring of the
    /// product name or brand.
    pub query: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            category: Selector::All,
            brand: Selector::All,
            min_rating: 0.0,
            query: String::new(),
        }
    }
}

impl FilterCriteria {
    /// Whether a product passes all four sub-predicates.
    pub fn matches(&self, product: &Product) -> bool {
        let matches_category = self.category.admits(&product.category);
        let matches_brand = self.brand.admits(&product.brand);
        let matches_rating = product.rating >= self.min_rating;
        let matches_query = self.query.is_empty() || {
            let query = self.query.to_lowercase();
            product.name.to_lowercase().contains(&query)
                || product.brand.to_lowercase().contains(&query)
        };

        matches_category && matches_brand && matches_rating && matches_query
    }
}

/// Filter a product collection against the given criteria.
///
/// Pure and order-preserving; an empty result is a valid outcome, not an
/// error.
pub fn filter(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    products
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect()
}

/// Distinct category values in first-seen order.
pub fn distinct_categories(products: &[Product]) -> Vec<String> {
    distinct(products.iter().map(|p| p.category.as_str()))
}

/// Distinct brand values in first-seen order.
pub fn distinct_brands(products: &[Product]) -> Vec<String> {
    distinct(products.iter().map(|p| p.brand.as_str()))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = Vec::new();
    for value in values {
        if !seen.iter().any(|s: &String| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}
