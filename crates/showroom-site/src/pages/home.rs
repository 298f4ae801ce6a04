//! `/`: hero plus featured cars, brands and locations.

use showroom_catalog::Catalog;

use super::collection;
use crate::components::{brand_grid, car_grid, dealership_grid, hero, section_heading};
use crate::page::Page;

/// Featured cars shown on the home page.
pub const FEATURED_CARS: usize = 6;

pub(super) async fn home(catalog: &Catalog<'_>, site_name: &str) -> Page {
    let (cars, brands, dealerships) = futures::join!(
        catalog.available_cars(),
        catalog.brands(),
        catalog.dealerships()
    );
    let mut cars = collection(catalog, cars);
    let brands = collection(catalog, brands);
    let dealerships = collection(catalog, dealerships);
    cars.truncate(FEATURED_CARS);

    let featured = (!cars.is_empty()).then(|| {
        home_section(
            "featured-cars",
            "",
            &section_heading(
                "Featured Vehicles",
                "Handpicked selection of the finest sports cars available",
            ),
            &format!(
                r#"{}<div class="section-more"><a href="/cars" class="button button--primary">View All Vehicles</a></div>"#,
                car_grid(&cars, "", "")
            ),
        )
    });
    let brands = (!brands.is_empty()).then(|| {
        home_section(
            "brands",
            " home-section--alt",
            &section_heading(
                "Prestigious Brands",
                "Discover vehicles from the world's most celebrated automotive manufacturers",
            ),
            &brand_grid(&brands),
        )
    });
    let locations = (!dealerships.is_empty()).then(|| {
        home_section(
            "dealerships",
            "",
            &section_heading(
                "Our Locations",
                "Visit our premium showrooms for a personalized experience",
            ),
            &dealership_grid(&dealerships),
        )
    });

    Page::new(
        site_name,
        "Discover the world's most exclusive sports cars from legendary brands.",
    )
    .with_section("hero", hero(site_name))
    .with_optional_section("featured-cars", featured)
    .with_optional_section("brands", brands)
    .with_optional_section("dealerships", locations)
}

fn home_section(name: &str, modifier: &str, heading: &str, body: &str) -> String {
    format!(
        r#"<section id="{name}" class="home-section{modifier}" data-section="{name}">
    {heading}
    {body}
</section>"#
    )
}
