//! Showroom pages.
//!
//! [`resolve_page`] turns a [`Route`](showroom_core::Route) into a
//! [`PageOutcome`] by querying the catalog. The resulting [`Page`] is a
//! list of named sections that the workload streams after the shell
//! built by [`shell_for`].
//!
//! ```rust,ignore
//! let catalog = Catalog::new(&client, &logger);
//! let outcome = resolve_page(Route::parse("/brands/ferrari").as_ref(), &catalog, "Elite Sports Cars").await;
//! let html = render_document(&outcome.into_page(), "Elite Sports Cars");
//! ```

pub mod components;
mod page;
mod pages;
mod styles;

pub use page::{render_document, shell_for, Page, PageOutcome, Section};
pub use pages::resolve_page;
pub use styles::SITE_STYLES;
