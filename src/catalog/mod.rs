//! The browsable product catalog: data model, filter engine, and the
//! derived section view handed to the rendering layer.

pub mod filter;
pub mod product;
pub mod sample;
pub mod view;

pub use filter::{distinct_brands, distinct_categories, filter, FilterCriteria, Selector};
pub use product::{Product, ProductBuilder, RentalUnit};
pub use sample::sample_products;
pub use view::{build_view, CatalogView, CatalogViewState, Section};
