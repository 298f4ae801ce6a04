//! Typed content records and data access for the showroom site.
//!
//! - **Records**: [`Car`], [`Brand`], [`Dealership`], decoded and validated
//!   from raw content objects
//! - **Relations**: [`Reference`], either a bare id or the inlined object
//! - **Formatting**: [`Price`], mileage, CDN image URLs, [`TrustedHtml`]
//! - **Data access**: [`Catalog`], one async function per query shape
//!
//! # Example
//!
//! ```rust,ignore
//! use showroom_catalog::Catalog;
//!
//! let catalog = Catalog::new(&client, &logger).with_recorder(&recorder);
//! if let Some(brand) = catalog.brand("ferrari").await? {
//!     let cars = catalog.cars_by_brand(&brand.id).await?;
//!     println!("{}: {} cars", brand.name(), cars.len());
//! }
//! ```

mod catalog;
mod decode;
mod error;
mod html;
mod media;
mod money;
mod record;
mod reference;

pub use catalog::{Catalog, LIST_PROPS};
pub use error::CatalogError;
pub use html::TrustedHtml;
pub use media::{ImageAsset, ImageFit};
pub use money::{group_thousands, mileage_label, Price};
pub use record::{
    Brand, BrandMetadata, Car, CarMetadata, Condition, ConditionKey, Dealership,
    DealershipMetadata, Object, BRANDS, CARS, DEALERSHIPS,
};
pub use reference::Reference;
