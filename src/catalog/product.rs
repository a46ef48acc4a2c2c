use serde::{Deserialize, Serialize};

use crate::config::MAX_RATING;

/// Billing granularity of a rental price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentalUnit {
    PerHour,
    PerDay,
}

impl std::fmt::Display for RentalUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PerHour => write!(f, "hour"),
            Self::PerDay => write!(f, "day"),
        }
    }
}

/// A rentable product in the catalog.
///
/// The collection a view is derived from is immutable input; nothing in
/// this crate creates, updates, or deletes catalog entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Stable identifier, unique within the active collection.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Image reference (URL or data URL).
    pub image: String,

    /// Rental price, non-negative.
    pub price: f64,

    /// Billing unit the price applies to.
    pub unit: RentalUnit,

    /// Average rating in [0, 5].
    pub rating: f64,

    /// Human-readable pickup location.
    pub location: String,

    /// Display distance from the viewer (e.g. "0.8 miles away").
    pub distance: String,

    /// Whether the product can currently be rented.
    pub available: bool,

    /// Free-form category value, also used as a section key.
    pub category: String,

    /// Free-form brand value.
    pub brand: String,
}

impl Product {
    /// Create a new product builder.
    pub const fn builder() -> ProductBuilder {
        ProductBuilder::new()
    }
}

/// Builder for catalog products.
///
/// Checks the catalog invariants (required identity fields, non-negative
/// price, rating within the scale) at build time.
#[derive(Debug, Default)]
pub struct ProductBuilder {
    id: Option<String>,
    name: Option<String>,
    image: Option<String>,
    price: Option<f64>,
    unit: Option<RentalUnit>,
    rating: Option<f64>,
    location: Option<String>,
    distance: Option<String>,
    available: bool,
    category: Option<String>,
    brand: Option<String>,
}

impl ProductBuilder {
    pub const fn new() -> Self {
        Self {
            id: None,
            name: None,
            image: None,
            price: None,
            unit: None,
            rating: None,
            location: None,
            distance: None,
            available: true,
            category: None,
            brand: None,
        }
    }

    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[must_use]
    pub fn price(mut self, price: f64, unit: RentalUnit) -> Self {
        self.price = Some(price);
        self.unit = Some(unit);
        self
    }

    #[must_use]
    pub const fn rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn distance(mut self, distance: impl Into<String>) -> Self {
        self.distance = Some(distance.into());
        self
    }

    #[must_use]
    pub const fn available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Build the product (returns error if required fields are missing or
    /// an invariant is violated).
    pub fn build(self) -> Result<Product, String> {
        let price = self.price.ok_or("price is required")?;
        if price < 0.0 {
            return Err(format!("price must be non-negative, got {price}"));
        }
        let rating = self.rating.ok_or("rating is required")?;
        if !(0.0..=MAX_RATING).contains(&rating) {
            return Err(format!("rating must be within [0, {MAX_RATING}], got {rating}"));
        }

        Ok(Product {
            id: self.id.ok_or("id is required")?,
            name: self.name.ok_or("name is required")?,
            image: self.image.unwrap_or_default(),
            price,
            unit: self.unit.ok_or("unit is required")?,
            rating,
            location: self.location.ok_or("location is required")?,
            distance: self.distance.unwrap_or_default(),
            available: self.available,
            category: self.category.ok_or("category is required")?,
            brand: self.brand.ok_or("brand is required")?,
        })
    }
}
