//! Resolved pages and the document shell around them.

use chrono::Datelike;
use http::StatusCode;
use showroom_streaming::{HeadContent, Shell};

use crate::components::{not_found, site_footer, site_header};
use crate::styles::SITE_STYLES;

/// One named, independently streamable chunk of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub html: String,
}

/// A resolved page: title, meta description and ordered sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub description: String,
    pub sections: Vec<Section>,
}

impl Page {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            sections: Vec::new(),
        }
    }

    /// Append a section.
    pub fn with_section(mut self, name: &str, html: String) -> Self {
        self.sections.push(Section {
            name: name.to_string(),
            html,
        });
        self
    }

    /// Append a section when there is one.
    pub fn with_optional_section(self, name: &str, html: Option<String>) -> Self {
        match html {
            Some(html) => self.with_section(name, html),
            None => self,
        }
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn section_names(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.name.as_str()).collect()
    }

    /// Page shown for unknown paths and slugs.
    pub fn not_found() -> Self {
        Page::new(
            "Page Not Found",
            "The page you are looking for does not exist.",
        )
        .with_section("not-found", not_found())
    }
}

/// Result of resolving a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    Found(Page),
    NotFound,
}

impl PageOutcome {
    pub fn status(&self) -> StatusCode {
        match self {
            PageOutcome::Found(_) => StatusCode::OK,
            PageOutcome::NotFound => StatusCode::NOT_FOUND,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PageOutcome::Found(_))
    }

    /// The page to render; the not-found page for `NotFound`.
    pub fn into_page(self) -> Page {
        match self {
            PageOutcome::Found(page) => page,
            PageOutcome::NotFound => Page::not_found(),
        }
    }
}

/// Shell with head, site header and footer for `page`.
pub fn shell_for(page: &Page, site_name: &str) -> Shell {
    let title = if page.title == site_name {
        site_name.to_string()
    } else {
        format!("{} | {}", page.title, site_name)
    };
    let year = chrono::Utc::now().year();

    Shell::new(
        HeadContent::new(title)
            .with_meta("viewport", "width=device-width, initial-scale=1")
            .with_meta("description", &page.description)
            .with_style(SITE_STYLES),
    )
    .with_body_start(format!(
        "<body>\n{}\n<main class=\"site-main\">\n",
        site_header(site_name)
    ))
    .with_body_end(format!(
        "</main>\n{}\n</body>\n</html>",
        site_footer(site_name, year)
    ))
}

/// Complete HTML document for `page`.
pub fn render_document(page: &Page, site_name: &str) -> String {
    shell_for(page, site_name).render_document(page.sections.iter().map(|s| s.html.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status() {
        assert_eq!(PageOutcome::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            PageOutcome::Found(Page::new("Cars", "")).status(),
            StatusCode::OK
        );
    }

    #[test]
    fn test_not_found_page() {
        let page = PageOutcome::NotFound.into_page();
        assert_eq!(page.title, "Page Not Found");
        assert_eq!(page.section_names(), vec!["not-found"]);
    }

    #[test]
    fn test_optional_sections() {
        let page = Page::new("Cars", "All cars")
            .with_section("intro", "<h1>Cars</h1>".to_string())
            .with_optional_section("missing", None)
            .with_optional_section("grid", Some("<div></div>".to_string()));
        assert_eq!(page.section_names(), vec!["intro", "grid"]);
        assert!(page.section("grid").is_some());
    }

    #[test]
    fn test_render_document() {
        let page = Page::new("Luxury Car Brands", "Brands & heritage")
            .with_section("intro", "<h1>Brands</h1>".to_string());
        let html = render_document(&page, "Elite Sports Cars");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Luxury Car Brands | Elite Sports Cars</title>"));
        assert!(html.contains(r#"content="Brands &amp; heritage""#));
        assert!(html.contains(r#"<a href="/cars">Vehicles</a>"#));
        assert!(html.contains("<h1>Brands</h1>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_home_title_is_site_name() {
        let page = Page::new("Elite Sports Cars", "");
        let html = render_document(&page, "Elite Sports Cars");
        assert!(html.contains("<title>Elite Sports Cars</title>"));
    }
}
