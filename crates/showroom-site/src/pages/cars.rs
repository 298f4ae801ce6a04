//! `/cars` and `/cars/{slug}`.

use showroom_catalog::Catalog;

use super::{collection, detail};
use crate::components::{breadcrumb, car_grid, car_overview, car_summary, page_intro};
use crate::page::{Page, PageOutcome};

const LIST_TITLE: &str = "Our Car Collection";
const LIST_LEAD: &str = "Discover our exclusive selection of premium sports cars from the world's most prestigious manufacturers.";

pub(super) async fn car_list(catalog: &Catalog<'_>) -> Page {
    let cars = collection(catalog, catalog.cars().await);
    Page::new(LIST_TITLE, LIST_LEAD)
        .with_section("intro", page_intro(LIST_TITLE, LIST_LEAD))
        .with_section(
            "grid",
            car_grid(&cars, "No cars available", "Check back soon for new inventory."),
        )
}

pub(super) async fn car_detail(catalog: &Catalog<'_>, slug: &str) -> PageOutcome {
    let Some(car) = detail(catalog, catalog.car(slug).await) else {
        return PageOutcome::NotFound;
    };

    let description = format!("{} available at {}", car.headline(), car.price_label());
    let page = Page::new(car.title.clone(), description)
        .with_section(
            "breadcrumb",
            breadcrumb(&[("Home", "/"), ("Cars", "/cars")], &car.title),
        )
        .with_section("summary", car_summary(&car))
        .with_section("overview", car_overview(&car));
    PageOutcome::Found(page)
}

#[cfg(test)]
mod tests {
    use showroom_catalog::Catalog;

    use super::*;
    use crate::pages::fixtures::*;

    #[tokio::test]
    async fn test_car_list_shows_every_car() {
        let store = store();
        let log = logger();
        let catalog = Catalog::new(&store, &log);

        let page = car_list(&catalog).await;
        assert_eq!(page.title, LIST_TITLE);
        let grid = &page.section("grid").unwrap().html;
        assert_eq!(grid.matches(r#"class="car-card""#).count(), 3);
    }

    #[tokio::test]
    async fn test_car_detail_sections() {
        let store = store();
        let log = logger();
        let catalog = Catalog::new(&store, &log);

        let PageOutcome::Found(page) = car_detail(&catalog, "f8-tributo").await else {
            panic!("expected a page");
        };
        assert_eq!(page.section_names(), vec!["breadcrumb", "summary", "overview"]);
        let summary = &page.section("summary").unwrap().html;
        assert!(summary.contains(r#"href="/brands/ferrari""#));
        assert!(summary.contains("$250,000"));
        let overview = &page.section("overview").unwrap().html;
        assert!(overview.contains("Available At"));
        assert!(overview.contains(r#"href="tel:3055550199""#));
    }
}
