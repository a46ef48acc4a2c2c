use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::catalog::RentalUnit;
use crate::config::{MAX_LISTING_IMAGES, MIN_DESCRIPTION_LEN, MIN_LOCATION_LEN, MIN_TITLE_LEN};
use crate::error::FieldError;

/// The fixed set of categories a new listing can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Electronics,
    HomeAppliances,
    Furniture,
    SportsEquipment,
    Tools,
    Clothing,
    Books,
    MusicalInstruments,
    Vehicles,
    Other,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 10] = [
        Self::Electronics,
        Self::HomeAppliances,
        Self::Furniture,
        Self::SportsEquipment,
        Self::Tools,
        Self::Clothing,
        Self::Books,
        Self::MusicalInstruments,
        Self::Vehicles,
        Self::Other,
    ];

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::HomeAppliances => "Home Appliances",
            Self::Furniture => "Furniture",
            Self::SportsEquipment => "Sports Equipment",
            Self::Tools => "Tools",
            Self::Clothing => "Clothing",
            Self::Books => "Books",
            Self::MusicalInstruments => "Musical Instruments",
            Self::Vehicles => "Vehicles",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| format!("unknown category '{s}'"))
    }
}

/// An in-progress listing form, editable field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub category: Option<Category>,
    pub brand: String,
    pub price: f64,
    pub unit: RentalUnit,
    pub location: String,
    pub available_from: NaiveDate,
    pub available_to: NaiveDate,
    pub images: Vec<String>,
}

impl ListingDraft {
    /// Fresh draft with the availability window defaulting to one month
    /// starting today.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: None,
            brand: String::new(),
            price: 0.0,
            unit: RentalUnit::PerDay,
            location: String::new(),
            available_from: today,
            available_to: today.checked_add_months(Months::new(1)).unwrap_or(today),
            images: Vec::new(),
        }
    }

    /// Attach an image reference. Returns false once the cap is reached.
    pub fn add_image(&mut self, image: impl Into<String>) -> bool {
        if self.images.len() >= MAX_LISTING_IMAGES {
            return false;
        }
        self.images.push(image.into());
        true
    }

    /// Detach the image at the given position, if it exists.
    pub fn remove_image(&mut self, index: usize) -> Option<String> {
        if index < self.images.len() {
            Some(self.images.remove(index))
        } else {
            None
        }
    }

    /// Check every structural constraint, collecting one error per
    /// offending field. An empty result means the draft is submittable.
    pub fn validate(&self, today: NaiveDate) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.title.trim().chars().count() < MIN_TITLE_LEN {
            errors.push(FieldError::new(
                "title",
                format!("Product name must be at least {MIN_TITLE_LEN} characters."),
            ));
        }
        if self.description.trim().chars().count() < MIN_DESCRIPTION_LEN {
            errors.push(FieldError::new(
                "description",
                format!("Description must be at least {MIN_DESCRIPTION_LEN} characters."),
            ));
        }
        if self.category.is_none() {
            errors.push(FieldError::new("category", "Please select a category."));
        }
        if self.brand.trim().is_empty() {
            errors.push(FieldError::new("brand", "Please enter a brand name."));
        }
        if self.price <= 0.0 {
            errors.push(FieldError::new(
                "price",
                "Price must be a positive number.",
            ));
        }
        if self.location.trim().chars().count() < MIN_LOCATION_LEN {
            errors.push(FieldError::new(
                "location",
                "Please enter a valid location.",
            ));
        }
        if self.available_from < today {
            errors.push(FieldError::new(
                "available_from",
                "Availability cannot start in the past.",
            ));
        }
        if self.available_to < self.available_from {
            errors.push(FieldError::new(
                "available_to",
                "Availability must end on or after it starts.",
            ));
        }
        if self.images.len() > MAX_LISTING_IMAGES {
            errors.push(FieldError::new(
                "images",
                format!("At most {MAX_LISTING_IMAGES} images are allowed."),
            ));
        }

        errors
    }

    /// Validate and freeze the draft into a submittable payload.
    pub fn finalize(&self, today: NaiveDate) -> Result<NewListing, Vec<FieldError>> {
        let errors = self.validate(today);
        if !errors.is_empty() {
            return Err(errors);
        }
        let Some(category) = self.category else {
            // validate() already guarantees a category
            return Err(vec![FieldError::new("category", "Please select a category.")]);
        };

        Ok(NewListing {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            category,
            brand: self.brand.trim().to_string(),
            price: self.price,
            unit: self.unit,
            location: self.location.trim().to_string(),
            available_from: self.available_from,
            available_to: self.available_to,
            images: self.images.clone(),
        })
    }
}

/// A structurally valid listing payload, ready for the submission gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewListing {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub brand: String,
    pub price: f64,
    pub unit: RentalUnit,
    pub location: String,
    pub available_from: NaiveDate,
    pub available_to: NaiveDate,
    pub images: Vec<String>,
}
