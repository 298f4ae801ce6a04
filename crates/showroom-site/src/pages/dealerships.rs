//! `/dealerships` and `/dealerships/{slug}`.

use showroom_catalog::Catalog;

use super::{collection, detail};
use crate::components::{
    breadcrumb, dealership_grid, dealership_header, dealership_inventory, page_intro,
};
use crate::page::{Page, PageOutcome};

const LIST_TITLE: &str = "Our Dealership Locations";
const LIST_LEAD: &str = "Visit our premium showrooms to experience our exclusive collection of luxury sports cars in person.";

pub(super) async fn dealership_list(catalog: &Catalog<'_>) -> Page {
    let dealerships = collection(catalog, catalog.dealerships().await);
    Page::new(LIST_TITLE, LIST_LEAD)
        .with_section("intro", page_intro(LIST_TITLE, LIST_LEAD))
        .with_section("grid", dealership_grid(&dealerships))
}

pub(super) async fn dealership_detail(catalog: &Catalog<'_>, slug: &str) -> PageOutcome {
    let Some(dealership) = detail(catalog, catalog.dealership(slug).await) else {
        return PageOutcome::NotFound;
    };
    let cars = collection(catalog, catalog.cars_by_dealership(&dealership.id).await);

    let description = format!("Visit {} and browse its current inventory", dealership.name());
    let page = Page::new(dealership.name().to_string(), description)
        .with_section(
            "breadcrumb",
            breadcrumb(
                &[("Home", "/"), ("Dealerships", "/dealerships")],
                dealership.name(),
            ),
        )
        .with_section("header", dealership_header(&dealership))
        .with_section("inventory", dealership_inventory(&dealership, &cars));
    PageOutcome::Found(page)
}
