//! Car cards, gallery, specifications and detail panels.

use showroom_catalog::Car;

use super::{
    availability_badge, brand_href, car_href, condition_badge, dealership_href, empty_state,
    escape_html, image_or_placeholder, multiline, ImageSlot,
};

/// Thumbnails shown under the main gallery image.
pub const MAX_THUMBNAILS: usize = 4;

/// Car card: image, condition and availability badges, brand, year,
/// price, mileage and performance figures.
pub fn car_card(car: &Car) -> String {
    let image = image_or_placeholder(
        car.primary_image(),
        ImageSlot::CARD,
        &car.title,
        "card-image",
        "No image available",
    );
    let available = if car.metadata.available {
        availability_badge(true)
    } else {
        String::new()
    };
    let mileage = car
        .mileage_label()
        .map(|m| format!(r#"<span class="car-mileage">{}</span>"#, escape_html(&m)))
        .unwrap_or_default();

    let mut stats = String::new();
    if let Some(hp) = car.metadata.horsepower {
        stats.push_str(&format!(
            r#"<div><span class="stat-label">Power:</span> <span class="stat-value">{hp} HP</span></div>"#
        ));
    }
    if let Some(acceleration) = &car.metadata.acceleration {
        stats.push_str(&format!(
            r#"<div><span class="stat-label">0-60:</span> <span class="stat-value">{}</span></div>"#,
            escape_html(acceleration)
        ));
    }

    format!(
        r#"<a class="car-card" href="{href}">
    <div class="card-media">
        {image}
        <div class="card-badges"><span class="card-badge-left">{condition}</span><span class="card-badge-right">{available}</span></div>
    </div>
    <div class="card-body">
        <div class="card-meta"><span class="car-brand">{brand}</span><span class="car-year">{year}</span></div>
        <h3 class="card-title">{title}</h3>
        <div class="card-price-row"><span class="car-price">{price}</span>{mileage}</div>
        <div class="car-stats">{stats}</div>
    </div>
</a>"#,
        href = car_href(&car.slug),
        image = image,
        condition = condition_badge(car),
        available = available,
        brand = escape_html(car.brand_name()),
        year = car.metadata.year,
        title = escape_html(&car.title),
        price = escape_html(&car.price_label()),
        mileage = mileage,
        stats = stats,
    )
}

/// Grid of car cards, or the empty state when there are none.
pub fn car_grid(cars: &[Car], empty_title: &str, empty_message: &str) -> String {
    if cars.is_empty() {
        return empty_state(empty_title, empty_message);
    }
    let cards: String = cars.iter().map(car_card).collect();
    format!(r#"<div class="card-grid card-grid--cars">{cards}</div>"#)
}

/// Title, brand link, badges and price.
pub fn car_summary(car: &Car) -> String {
    let brand = match car.brand() {
        Some(brand) if !brand.slug.is_empty() => format!(
            r#"<a class="car-brand-link" href="{}">{}</a>"#,
            brand_href(&brand.slug),
            escape_html(brand.name())
        ),
        _ => format!(
            r#"<span class="car-brand-link">{}</span>"#,
            escape_html(car.brand_name())
        ),
    };

    format!(
        r#"<section class="car-summary" data-section="summary">
    <div>
        <h1>{title}</h1>
        <div class="car-summary-meta">{brand}{condition}{availability}</div>
    </div>
    <div class="car-summary-price">{price}</div>
</section>"#,
        title = escape_html(&car.title),
        brand = brand,
        condition = condition_badge(car),
        availability = availability_badge(car.metadata.available),
        price = escape_html(&car.price_label()),
    )
}

/// Main image plus up to four thumbnails.
pub fn car_gallery(car: &Car) -> String {
    let images = car.images();
    let Some((main, rest)) = images.split_first() else {
        return r#"<div class="gallery gallery--empty image-placeholder"><span>No images available</span></div>"#
            .to_string();
    };

    let main = image_or_placeholder(Some(*main), ImageSlot::GALLERY_MAIN, &car.title, "gallery-main", "");
    let thumbnails: String = rest
        .iter()
        .take(MAX_THUMBNAILS)
        .enumerate()
        .map(|(i, image)| {
            image_or_placeholder(
                Some(*image),
                ImageSlot::GALLERY_THUMB,
                &format!("{} - Image {}", car.title, i + 2),
                "gallery-thumb",
                "",
            )
        })
        .collect();
    let thumbnails = if thumbnails.is_empty() {
        String::new()
    } else {
        format!(r#"<div class="gallery-thumbs">{thumbnails}</div>"#)
    };

    format!(r#"<div class="gallery">{main}{thumbnails}</div>"#)
}

/// Label/value pairs for the fields that are present, in display order.
pub fn car_spec_rows(car: &Car) -> Vec<(&'static str, String)> {
    let meta = &car.metadata;
    [
        ("Year", Some(meta.year.to_string())),
        ("Engine", meta.engine.clone()),
        ("Horsepower", meta.horsepower.map(|hp| format!("{hp} HP"))),
        ("0-60 mph", meta.acceleration.clone()),
        ("Top Speed", meta.top_speed.clone()),
        ("Exterior Color", meta.exterior_color.clone()),
        ("Interior Color", meta.interior_color.clone()),
        ("Mileage", car.mileage_label()),
        ("Condition", meta.condition.as_ref().map(|c| c.label.clone())),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|v| (label, v)))
    .collect()
}

pub fn car_specs(car: &Car) -> String {
    let rows: String = car_spec_rows(car)
        .iter()
        .map(|(label, value)| {
            format!(
                r#"<div class="spec"><dt>{}</dt><dd>{}</dd></div>"#,
                label,
                escape_html(value)
            )
        })
        .collect();
    format!(r#"<div class="panel car-specs"><h3>Specifications</h3><dl>{rows}</dl></div>"#)
}

/// Rich-text description panel, when the car has one.
pub fn car_description(car: &Car) -> Option<String> {
    let description = car.metadata.description.as_ref()?;
    if description.is_blank() {
        return None;
    }
    Some(format!(
        r#"<div class="panel car-description"><h3>Description</h3><div class="prose">{}</div></div>"#,
        description.as_trusted_markup()
    ))
}

/// "Available At" panel linking to the car's dealership.
pub fn available_at(car: &Car) -> Option<String> {
    let dealership = car.dealership()?;
    let meta = &dealership.metadata;

    let mut details = String::new();
    if let Some(address) = &meta.address {
        details.push_str(&format!(r#"<p class="address">{}</p>"#, multiline(address)));
    }
    if let Some(phone) = &meta.phone {
        details.push_str(&format!(
            r#"<p><span class="label">Phone:</span> {}</p>"#,
            escape_html(phone)
        ));
    }
    if let Some(email) = &meta.email {
        details.push_str(&format!(
            r#"<p><span class="label">Email:</span> {}</p>"#,
            escape_html(email)
        ));
    }

    Some(format!(
        r#"<div class="panel available-at">
    <h3>Available At</h3>
    <a class="dealership-link" href="{}"><h4>{}</h4>{}</a>
</div>"#,
        dealership_href(&dealership.slug),
        escape_html(dealership.name()),
        details
    ))
}

/// "Interested in this car?" call panel, for available cars only.
pub fn contact_panel(car: &Car) -> Option<String> {
    if !car.metadata.available {
        return None;
    }
    let action = match car.dealership().and_then(|d| d.phone_href()) {
        Some(tel) => format!(
            r#"<a class="button button--light" href="{}">Call Now</a>"#,
            escape_html(&tel)
        ),
        None => r#"<a class="button button--light" href="/dealerships">Find a Dealer</a>"#
            .to_string(),
    };
    Some(format!(
        r#"<div class="panel contact-panel">
    <h3>Interested in this car?</h3>
    <p>Contact our team to schedule a test drive or get more information.</p>
    {action}
</div>"#
    ))
}

/// Gallery and description beside specifications and dealership panels.
pub fn car_overview(car: &Car) -> String {
    let main = [Some(car_gallery(car)), car_description(car)]
        .into_iter()
        .flatten()
        .collect::<String>();
    let sidebar = [Some(car_specs(car)), available_at(car), contact_panel(car)]
        .into_iter()
        .flatten()
        .collect::<String>();
    format!(
        r#"<section class="car-overview" data-section="overview">
    <div class="car-overview-main">{main}</div>
    <aside class="car-overview-sidebar">{sidebar}</aside>
</section>"#
    )
}
