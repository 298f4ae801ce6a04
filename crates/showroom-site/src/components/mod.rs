//! Presentational components.
//!
//! Pure functions from records to HTML strings. Record text is escaped;
//! rich text goes through [`TrustedHtml`](showroom_catalog::TrustedHtml).

mod badge;
mod brand;
mod car;
mod dealership;
mod image;
mod layout;

pub use badge::*;
pub use brand::*;
pub use car::*;
pub use dealership::*;
pub use image::*;
pub use layout::*;

use showroom_core::Route;

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escaped text with line breaks kept as `<br>`.
pub(crate) fn multiline(s: &str) -> String {
    s.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(escape_html)
        .collect::<Vec<_>>()
        .join("<br>")
}

pub(crate) fn car_href(slug: &str) -> String {
    Route::Car {
        slug: slug.to_string(),
    }
    .path()
}

pub(crate) fn brand_href(slug: &str) -> String {
    Route::Brand {
        slug: slug.to_string(),
    }
    .path()
}

pub(crate) fn dealership_href(slug: &str) -> String {
    Route::Dealership {
        slug: slug.to_string(),
    }
    .path()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Rosso" & 'Nero'</b>"#),
            "&lt;b&gt;&quot;Rosso&quot; &amp; &#39;Nero&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_multiline() {
        assert_eq!(multiline("Mon-Fri 9-7\n\nSat <10-5>"), "Mon-Fri 9-7<br>Sat &lt;10-5&gt;");
    }

    #[test]
    fn test_hrefs_encode_slugs() {
        assert_eq!(car_href("f8-tributo"), "/cars/f8-tributo");
        assert_eq!(brand_href("aston martin"), "/brands/aston%20martin");
    }
}
