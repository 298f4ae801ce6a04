//! Brand cards and the brand page header.

use showroom_catalog::Brand;

use super::{brand_href, empty_state, escape_html, image_or_placeholder, ImageSlot};

/// Characters of description shown on a brand card.
pub const EXCERPT_CHARS: usize = 150;

pub fn brand_card(brand: &Brand) -> String {
    let meta = &brand.metadata;
    let logo = match &meta.brand_logo {
        Some(logo) => image_or_placeholder(
            Some(logo),
            ImageSlot::BRAND_LOGO,
            &format!("{} logo", brand.name()),
            "brand-logo",
            "",
        ),
        None => format!(
            r#"<div class="brand-logo brand-logo--initial"><span>{}</span></div>"#,
            escape_html(&brand.name().chars().take(1).collect::<String>())
        ),
    };

    let mut facts = String::new();
    if let Some(country) = &meta.country {
        facts.push_str(&format!("<span>{}</span>", escape_html(country)));
    }
    if let Some(year) = meta.founded_year {
        facts.push_str(&format!("<span>Est. {year}</span>"));
    }

    let excerpt = meta
        .description
        .as_ref()
        .filter(|d| !d.is_blank())
        .map(|d| {
            format!(
                r#"<p class="brand-excerpt">{}</p>"#,
                escape_html(&d.excerpt(EXCERPT_CHARS))
            )
        })
        .unwrap_or_default();

    format!(
        r#"<a class="brand-card" href="{href}">
    <div class="brand-card-logo">{logo}</div>
    <h3 class="card-title">{name}</h3>
    <div class="brand-facts">{facts}</div>
    {excerpt}
</a>"#,
        href = brand_href(&brand.slug),
        logo = logo,
        name = escape_html(brand.name()),
        facts = facts,
        excerpt = excerpt,
    )
}

pub fn brand_grid(brands: &[Brand]) -> String {
    if brands.is_empty() {
        return empty_state("No brands available", "Check back soon for more brands.");
    }
    let cards: String = brands.iter().map(brand_card).collect();
    format!(r#"<div class="card-grid card-grid--brands">{cards}</div>"#)
}

/// Logo, name, country, founding year, website link and description.
pub fn brand_header(brand: &Brand) -> String {
    let meta = &brand.metadata;
    let logo = meta
        .brand_logo
        .as_ref()
        .map(|logo| {
            image_or_placeholder(
                Some(logo),
                ImageSlot::BRAND_HEADER_LOGO,
                &format!("{} logo", brand.name()),
                "brand-header-logo",
                "",
            )
        })
        .unwrap_or_default();

    let mut facts = String::new();
    if let Some(country) = &meta.country {
        facts.push_str(&format!(
            r#"<span><span class="label">Country:</span> {}</span>"#,
            escape_html(country)
        ));
    }
    if let Some(year) = meta.founded_year {
        facts.push_str(&format!(
            r#"<span><span class="label">Founded:</span> {year}</span>"#
        ));
    }
    if let Some(website) = &meta.website {
        facts.push_str(&format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">Visit Website →</a>"#,
            escape_html(website)
        ));
    }

    let description = meta
        .description
        .as_ref()
        .map(|d| format!(r#"<div class="prose">{}</div>"#, d.as_trusted_markup()))
        .unwrap_or_default();

    format!(
        r#"<section class="panel brand-header" data-section="header">
    {logo}
    <div class="brand-header-body">
        <h1>{name}</h1>
        <div class="brand-facts">{facts}</div>
        {description}
    </div>
</section>"#,
        logo = logo,
        name = escape_html(brand.name()),
        facts = facts,
        description = description,
    )
}
