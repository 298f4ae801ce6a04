//! Page assemblers: fetch, degrade, render.
//!
//! A failed collection fetch is logged and rendered as an empty
//! collection. A failed single-entity fetch is logged and resolves to
//! [`PageOutcome::NotFound`].

mod brands;
mod cars;
mod dealerships;
mod home;

use std::error::Error as _;

use showroom_catalog::{Catalog, CatalogError};
use showroom_core::Route;

use crate::page::PageOutcome;

/// Resolve `route` into a page. `None` is an unmatched path.
pub async fn resolve_page(
    route: Option<&Route>,
    catalog: &Catalog<'_>,
    site_name: &str,
) -> PageOutcome {
    let Some(route) = route else {
        return PageOutcome::NotFound;
    };
    match route {
        Route::Home => PageOutcome::Found(home::home(catalog, site_name).await),
        Route::Cars => PageOutcome::Found(cars::car_list(catalog).await),
        Route::Car { slug } => cars::car_detail(catalog, slug).await,
        Route::Brands => PageOutcome::Found(brands::brand_list(catalog).await),
        Route::Brand { slug } => brands::brand_detail(catalog, slug).await,
        Route::Dealerships => PageOutcome::Found(dealerships::dealership_list(catalog).await),
        Route::Dealership { slug } => dealerships::dealership_detail(catalog, slug).await,
    }
}

/// Collection result with failures logged and replaced by an empty list.
fn collection<T>(catalog: &Catalog<'_>, result: Result<Vec<T>, CatalogError>) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            catalog
                .logger()
                .warn_builder("rendering empty collection")
                .field("entity", e.entity())
                .field("error", e.to_string())
                .field("cause", cause_of(&e))
                .emit();
            Vec::new()
        }
    }
}

/// Single-entity result with failures logged and treated as absent.
fn detail<T>(catalog: &Catalog<'_>, result: Result<Option<T>, CatalogError>) -> Option<T> {
    match result {
        Ok(item) => item,
        Err(e) => {
            catalog
                .logger()
                .error_builder("rendering not found after fetch failure")
                .field("entity", e.entity())
                .field("error", e.to_string())
                .field("cause", cause_of(&e))
                .emit();
            None
        }
    }
}

fn cause_of(e: &CatalogError) -> String {
    e.source().map(|s| s.to_string()).unwrap_or_default()
}
