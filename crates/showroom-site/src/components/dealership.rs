//! Dealership cards, header and inventory.

use showroom_catalog::{Car, Dealership};

use super::{
    brand_badge, brand_href, car_grid, dealership_href, empty_state, escape_html,
    image_or_placeholder, multiline, ImageSlot,
};

/// One badge per inlined specialty brand, in list order.
pub fn specialty_badges(dealership: &Dealership) -> String {
    dealership
        .specialties()
        .into_iter()
        .map(|brand| brand_badge(brand.name()))
        .collect()
}

pub fn dealership_card(dealership: &Dealership) -> String {
    let meta = &dealership.metadata;
    let image = image_or_placeholder(
        meta.showroom_image.as_ref(),
        ImageSlot::SHOWROOM_CARD,
        &format!("{} showroom", dealership.name()),
        "card-image",
        "Showroom",
    );

    let mut details = String::new();
    if let Some(address) = &meta.address {
        details.push_str(&format!(r#"<p class="address">{}</p>"#, multiline(address)));
    }
    if let Some(phone) = &meta.phone {
        details.push_str(&format!(r#"<p class="phone">{}</p>"#, escape_html(phone)));
    }
    if let Some(email) = &meta.email {
        details.push_str(&format!(r#"<p class="email">{}</p>"#, escape_html(email)));
    }
    if let Some(manager) = &meta.manager_name {
        details.push_str(&format!(
            r#"<p class="manager">Manager: {}</p>"#,
            escape_html(manager)
        ));
    }
    if !dealership.specialties().is_empty() {
        details.push_str(&format!(
            r#"<div class="specialties"><span class="label">Specializes in:</span><div class="badges">{}</div></div>"#,
            specialty_badges(dealership)
        ));
    }
    if let Some(hours) = &meta.hours {
        details.push_str(&format!(
            r#"<div class="hours"><span class="label">Hours:</span><p>{}</p></div>"#,
            multiline(hours)
        ));
    }

    format!(
        r#"<article class="dealership-card">
    <a class="card-media" href="{href}">{image}</a>
    <div class="card-body">
        <h3 class="card-title"><a href="{href}">{name}</a></h3>
        {details}
    </div>
</article>"#,
        href = dealership_href(&dealership.slug),
        image = image,
        name = escape_html(dealership.name()),
        details = details,
    )
}

pub fn dealership_grid(dealerships: &[Dealership]) -> String {
    if dealerships.is_empty() {
        return empty_state(
            "No dealerships available",
            "Check back soon for more locations.",
        );
    }
    let cards: String = dealerships.iter().map(dealership_card).collect();
    format!(r#"<div class="card-grid card-grid--dealerships">{cards}</div>"#)
}

/// Showroom image, contact information, hours and brand links.
pub fn dealership_header(dealership: &Dealership) -> String {
    let meta = &dealership.metadata;
    let name = escape_html(dealership.name());
    let banner = match &meta.showroom_image {
        Some(image) => format!(
            r#"<div class="dealership-banner">{}<h1>{}</h1></div>"#,
            image_or_placeholder(
                Some(image),
                ImageSlot::SHOWROOM_HEADER,
                &format!("{} showroom", dealership.name()),
                "banner-image",
                "",
            ),
            name
        ),
        None => format!(r#"<div class="dealership-banner dealership-banner--plain"><h1>{name}</h1></div>"#),
    };

    let mut contact = String::new();
    if let Some(address) = &meta.address {
        contact.push_str(&format!(
            r#"<div><h3>Address</h3><p>{}</p></div>"#,
            multiline(address)
        ));
    }
    if let Some(phone) = &meta.phone {
        let value = match dealership.phone_href() {
            Some(tel) => format!(r#"<a href="{}">{}</a>"#, escape_html(&tel), escape_html(phone)),
            None => escape_html(phone),
        };
        contact.push_str(&format!(r#"<div><h3>Phone</h3><p>{value}</p></div>"#));
    }
    if let Some(email) = &meta.email {
        contact.push_str(&format!(
            r#"<div><h3>Email</h3><p><a href="mailto:{0}">{0}</a></p></div>"#,
            escape_html(email)
        ));
    }
    if let Some(manager) = &meta.manager_name {
        contact.push_str(&format!(
            r#"<div><h3>Manager</h3><p>{}</p></div>"#,
            escape_html(manager)
        ));
    }

    let hours = meta
        .hours
        .as_ref()
        .map(|hours| {
            format!(
                r#"<div class="panel"><h2>Hours of Operation</h2><p>{}</p></div>"#,
                multiline(hours)
            )
        })
        .unwrap_or_default();

    let brands = dealership.specialties();
    let specialties = if brands.is_empty() {
        String::new()
    } else {
        let items: String = brands
            .into_iter()
            .map(|brand| {
                if brand.slug.is_empty() {
                    return format!("<li>{}</li>", brand_badge(brand.name()));
                }
                let country = brand
                    .metadata
                    .country
                    .as_ref()
                    .map(|c| format!(r#"<span class="brand-country">{}</span>"#, escape_html(c)))
                    .unwrap_or_default();
                format!(
                    r#"<li><a href="{}">{}</a>{}</li>"#,
                    brand_href(&brand.slug),
                    escape_html(brand.name()),
                    country
                )
            })
            .collect();
        format!(r#"<div class="panel"><h2>Specializes In</h2><ul class="specialty-list">{items}</ul></div>"#)
    };

    format!(
        r#"<section class="dealership-header" data-section="header">
    {banner}
    <div class="dealership-info">
        <div class="panel"><h2>Contact Information</h2>{contact}</div>
        {hours}
        {specialties}
    </div>
</section>"#
    )
}

/// "Current Inventory at … (N vehicle(s))" with the car grid.
pub fn dealership_inventory(dealership: &Dealership, cars: &[Car]) -> String {
    let name = escape_html(dealership.name());
    if cars.is_empty() {
        return format!(
            r#"<section class="inventory" data-section="inventory">
    <h2>Current Inventory</h2>
    <p>No vehicles are currently available at this location.</p>
</section>"#
        );
    }
    let noun = if cars.len() == 1 { "vehicle" } else { "vehicles" };
    format!(
        r#"<section class="inventory" data-section="inventory">
    <h2>Current Inventory at {name} ({count} {noun})</h2>
    {grid}
</section>"#,
        name = name,
        count = cars.len(),
        noun = noun,
        grid = car_grid(cars, "", ""),
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn dealership() -> Dealership {
        serde_json::from_value(json!({
            "id": "d1", "slug": "beverly-hills", "title": "Beverly Hills", "type": "dealerships",
            "metadata": {
                "dealership_name": "Elite Motors Beverly Hills",
                "address": "9000 Wilshire Blvd\nBeverly Hills, CA",
                "phone": "(310) 555-0100",
                "manager_name": "Dana Reyes",
                "hours": "Mon-Fri 9-7\nSat 10-5",
                "specializes_in": [
                    {"id": "b2", "slug": "porsche", "title": "Porsche", "metadata": {"brand_name": "Porsche"}},
                    {"id": "b1", "slug": "ferrari", "title": "Ferrari", "metadata": {"brand_name": "Ferrari"}},
                    "b3"
                ]
            }
        }))
        .unwrap()
    }

    fn car(slug: &str) -> Car {
        serde_json::from_value(json!({
            "id": slug, "slug": slug, "title": slug, "metadata": {"year": 2021, "price": 100000}
        }))
        .unwrap()
    }

    #[test]
    fn test_specialty_badges_in_order() {
        let html = specialty_badges(&dealership());
        assert_eq!(html.matches("badge--brand").count(), 2);
        let porsche = html.find("Porsche").unwrap();
        let ferrari = html.find("Ferrari").unwrap();
        assert!(porsche < ferrari);
    }

    #[test]
    fn test_bare_specialty_ids_are_dropped() {
        assert!(!dealership_card(&dealership()).contains("Unknown Brand"));
        assert!(!dealership_header(&dealership()).contains("Unknown Brand"));

        let mut unresolved = dealership();
        unresolved.metadata.specializes_in.retain(|brand| brand.expanded().is_none());
        assert!(!dealership_card(&unresolved).contains("Specializes in:"));
        assert!(!dealership_header(&unresolved).contains("Specializes In"));
    }

    #[test]
    fn test_card_details() {
        let html = dealership_card(&dealership());
        assert!(html.contains("9000 Wilshire Blvd<br>Beverly Hills, CA"));
        assert!(html.contains("Manager: Dana Reyes"));
        assert!(html.contains("Mon-Fri 9-7<br>Sat 10-5"));
        assert!(html.contains(r#"<span>Showroom</span>"#));
    }

    #[test]
    fn test_header_links_brands() {
        let html = dealership_header(&dealership());
        assert!(html.contains(r#"<a href="tel:3105550100">(310) 555-0100</a>"#));
        assert!(html.contains(r#"<a href="/brands/ferrari">Ferrari</a>"#));
        assert!(html.contains("Hours of Operation"));
    }

    #[test]
    fn test_inventory_count() {
        let d = dealership();
        let one = dealership_inventory(&d, &[car("a")]);
        assert!(one.contains("(1 vehicle)"));
        let two = dealership_inventory(&d, &[car("a"), car("b")]);
        assert!(two.contains("(2 vehicles)"));
        let none = dealership_inventory(&d, &[]);
        assert!(none.contains("No vehicles are currently available at this location."));
    }
}
