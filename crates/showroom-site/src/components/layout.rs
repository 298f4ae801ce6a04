//! Site chrome and generic blocks.

use super::escape_html;

/// Top navigation: Home, Vehicles, Brands, Locations.
pub fn site_header(site_name: &str) -> String {
    format!(
        r#"<header class="site-header">
    <nav class="site-nav">
        <a href="/" class="site-brand"><span class="site-mark">{mark}</span> {name}</a>
        <div class="site-links">
            <a href="/">Home</a>
            <a href="/cars">Vehicles</a>
            <a href="/brands">Brands</a>
            <a href="/dealerships">Locations</a>
        </div>
    </nav>
</header>"#,
        mark = escape_html(&initials(site_name)),
        name = escape_html(site_name),
    )
}

pub fn site_footer(site_name: &str, year: i32) -> String {
    format!(
        r#"<footer class="site-footer">
    <div class="footer-grid">
        <div class="footer-about">
            <p class="footer-name">{name}</p>
            <p>Discover the world's most exclusive sports cars from legendary brands.</p>
        </div>
        <div>
            <h3>Quick Links</h3>
            <ul>
                <li><a href="/cars">View All Cars</a></li>
                <li><a href="/brands">Our Brands</a></li>
                <li><a href="/dealerships">Locations</a></li>
            </ul>
        </div>
        <div>
            <h3>Contact</h3>
            <p>Premium Automotive Excellence</p>
            <p>Powered by Cosmic CMS</p>
        </div>
    </div>
    <p class="footer-legal">&copy; {year} {name}. All rights reserved.</p>
</footer>"#,
        name = escape_html(site_name),
        year = year,
    )
}

pub fn hero(site_name: &str) -> String {
    format!(
        r#"<section class="hero" data-section="hero">
    <div class="hero-content">
        <h1>{}</h1>
        <p>Experience automotive excellence with the world's most prestigious brands</p>
        <div class="hero-actions">
            <a href="/cars" class="button button--primary">Explore Collection</a>
            <a href="/dealerships" class="button button--outline">Find Dealers</a>
        </div>
    </div>
</section>"#,
        escape_html(site_name)
    )
}

/// Centered page heading with a lead paragraph.
pub fn page_intro(title: &str, lead: &str) -> String {
    format!(
        r#"<section class="page-intro" data-section="intro">
    <h1>{}</h1>
    <p>{}</p>
</section>"#,
        escape_html(title),
        escape_html(lead)
    )
}

/// Heading block for a home page section.
pub fn section_heading(title: &str, lead: &str) -> String {
    format!(
        r#"<div class="section-heading"><h2>{}</h2><p>{}</p></div>"#,
        escape_html(title),
        escape_html(lead)
    )
}

/// `Home / Cars / F8 Tributo`. The last crumb is plain text.
pub fn breadcrumb(crumbs: &[(&str, &str)], current: &str) -> String {
    let links: String = crumbs
        .iter()
        .map(|(label, href)| {
            format!(
                r#"<li><a href="{}">{}</a></li><li aria-hidden="true">/</li>"#,
                escape_html(href),
                escape_html(label)
            )
        })
        .collect();
    format!(
        r#"<nav class="breadcrumb" data-section="breadcrumb"><ol>{}<li class="breadcrumb-current">{}</li></ol></nav>"#,
        links,
        escape_html(current)
    )
}

pub fn empty_state(title: &str, message: &str) -> String {
    format!(
        r#"<div class="empty-state">
    <h3>{}</h3>
    <p>{}</p>
</div>"#,
        escape_html(title),
        escape_html(message)
    )
}

pub fn not_found() -> String {
    r#"<section class="not-found" data-section="not-found">
    <h1>Page Not Found</h1>
    <p>The page you are looking for does not exist or has been moved.</p>
    <a href="/" class="button button--primary">Back to Home</a>
</section>"#
        .to_string()
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .filter(|c| c.is_alphanumeric())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_nav() {
        let html = site_header("Elite Sports Cars");
        for (href, label) in [
            ("/", "Home"),
            ("/cars", "Vehicles"),
            ("/brands", "Brands"),
            ("/dealerships", "Locations"),
        ] {
            assert!(html.contains(&format!(r#"<a href="{href}">{label}</a>"#)));
        }
        assert!(html.contains(r#"<span class="site-mark">ES</span>"#));
    }

    #[test]
    fn test_footer_year() {
        let html = site_footer("Elite Sports Cars", 2026);
        assert!(html.contains("&copy; 2026 Elite Sports Cars."));
    }

    #[test]
    fn test_breadcrumb() {
        let html = breadcrumb(&[("Home", "/"), ("Cars", "/cars")], "F8 <Tributo>");
        assert!(html.contains(r#"<a href="/cars">Cars</a>"#));
        assert!(html.contains(r#"<li class="breadcrumb-current">F8 &lt;Tributo&gt;</li>"#));
    }

    #[test]
    fn test_empty_state() {
        let html = empty_state("No cars available", "Check back soon for new inventory.");
        assert!(html.contains("empty-state"));
        assert!(html.contains("No cars available"));
    }
}
