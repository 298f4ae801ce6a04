//! `/brands` and `/brands/{slug}`.

use showroom_catalog::Catalog;

use super::{collection, detail};
use crate::components::{breadcrumb, brand_grid, brand_header, car_grid, escape_html, page_intro};
use crate::page::{Page, PageOutcome};

const LIST_TITLE: &str = "Luxury Car Brands";
const LIST_LEAD: &str = "Explore the world's most prestigious automotive brands and discover their rich heritage and exceptional craftsmanship.";

pub(super) async fn brand_list(catalog: &Catalog<'_>) -> Page {
    let brands = collection(catalog, catalog.brands().await);
    Page::new(LIST_TITLE, LIST_LEAD)
        .with_section("intro", page_intro(LIST_TITLE, LIST_LEAD))
        .with_section("grid", brand_grid(&brands))
}

/// Header followed by the brand's cars.
pub(super) async fn brand_detail(catalog: &Catalog<'_>, slug: &str) -> PageOutcome {
    let Some(brand) = detail(catalog, catalog.brand(slug).await) else {
        return PageOutcome::NotFound;
    };

    let cars = collection(catalog, catalog.cars_by_brand(&brand.id).await);
    let name = escape_html(brand.name());

    let inventory = if cars.is_empty() {
        car_grid(
            &cars,
            "No cars available",
            "No vehicles from this brand are currently in our inventory.",
        )
    } else {
        format!(
            "<h2>Available {name} Vehicles ({count})</h2>\n{grid}",
            count = cars.len(),
            grid = car_grid(&cars, "", "")
        )
    };
    let description = format!("{} vehicles and history", brand.name());
    let page = Page::new(brand.name().to_string(), description)
        .with_section(
            "breadcrumb",
            breadcrumb(&[("Home", "/"), ("Brands", "/brands")], brand.name()),
        )
        .with_section("header", brand_header(&brand))
        .with_section(
            "cars",
            format!(r#"<section class="related" data-section="cars">{inventory}</section>"#),
        );
    PageOutcome::Found(page)
}

#[cfg(test)]
mod tests {
    use showroom_catalog::Catalog;
    use showroom_observability::FetchRecorder;

    use super::*;
    use crate::pages::fixtures::*;

    #[tokio::test]
    async fn test_brand_list() {
        let store = store();
        let log = logger();
        let catalog = Catalog::new(&store, &log);

        let page = brand_list(&catalog).await;
        let grid = &page.section("grid").unwrap().html;
        assert!(grid.contains(r#"href="/brands/ferrari""#));
        assert!(grid.contains(r#"href="/brands/porsche""#));
    }

    #[tokio::test]
    async fn test_brand_detail_only_matching_cars() {
        let store = store();
        let log = logger();
        let catalog = Catalog::new(&store, &log);

        let PageOutcome::Found(page) = brand_detail(&catalog, "ferrari").await else {
            panic!("expected a page");
        };
        assert_eq!(page.title, "Ferrari");
        assert!(page.section("header").unwrap().html.contains("<h1>Ferrari</h1>"));

        let cars = &page.section("cars").unwrap().html;
        assert!(cars.contains("Available Ferrari Vehicles (2)"));
        assert!(cars.contains("/cars/f8-tributo"));
        assert!(cars.contains("/cars/roma"));
        assert!(!cars.contains("/cars/911-turbo"));

        let names: Vec<&str> = page.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["breadcrumb", "header", "cars"]);
    }

    #[tokio::test]
    async fn test_brand_detail_fetches_brand_then_cars() {
        let store = store();
        let log = logger();
        let recorder = FetchRecorder::default();
        let catalog = Catalog::new(&store, &log).with_recorder(&recorder);

        brand_detail(&catalog, "ferrari").await;
        let entities: Vec<String> = recorder.take().into_iter().map(|f| f.entity).collect();
        assert_eq!(entities, vec!["brand ferrari", "cars for brand b1"]);
    }

    #[tokio::test]
    async fn test_brand_without_inventory() {
        let store = store().with_object(brand("b3", "lamborghini", "Lamborghini"));
        let log = logger();
        let catalog = Catalog::new(&store, &log);

        let PageOutcome::Found(page) = brand_detail(&catalog, "lamborghini").await else {
            panic!("expected a page");
        };
        let cars = &page.section("cars").unwrap().html;
        assert!(cars.contains("No vehicles from this brand are currently in our inventory."));
    }
}
