//! Document shell around streamed sections.

/// Head content for the shell.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    /// Page title.
    pub title: Option<String>,
    /// `<meta name=.. content=..>` pairs.
    pub meta: Vec<(String, String)>,
    /// Raw head markup (inline styles).
    pub links: Vec<String>,
}

impl HeadContent {
    /// Create new head content with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add inline CSS styles.
    pub fn with_style(mut self, css: &str) -> Self {
        self.links.push(format!("<style>{}</style>", css));
        self
    }

    /// Render head content to HTML. Title and meta values are escaped.
    pub fn render(&self) -> String {
        let mut html = String::from("<meta charset=\"utf-8\">\n");

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", escape_attr(title)));
        }

        for (name, content) in &self.meta {
            html.push_str(&format!(
                "<meta name=\"{}\" content=\"{}\">\n",
                escape_attr(name),
                escape_attr(content)
            ));
        }

        for link in &self.links {
            html.push_str(link);
            html.push('\n');
        }

        html
    }
}

/// Shell template: everything before and after the page sections.
#[derive(Debug, Clone)]
pub struct Shell {
    /// Document language.
    pub lang: String,
    /// Head content.
    pub head: HeadContent,
    /// HTML before sections (opening body, site header, wrapper).
    pub body_start: String,
    /// HTML after sections (closing wrapper, footer, closing tags).
    pub body_end: String,
}

impl Shell {
    /// Create a new shell with basic structure.
    pub fn new(head: HeadContent) -> Self {
        Self {
            lang: "en".to_string(),
            head,
            body_start: "<body>\n<main>\n".to_string(),
            body_end: "</main>\n</body>\n</html>".to_string(),
        }
    }

    /// Set custom body start HTML.
    pub fn with_body_start(mut self, html: impl Into<String>) -> Self {
        self.body_start = html.into();
        self
    }

    /// Set custom body end HTML.
    pub fn with_body_end(mut self, html: impl Into<String>) -> Self {
        self.body_end = html.into();
        self
    }

    /// Render the opening part of the shell (before sections).
    pub fn render_opening(&self) -> String {
        let mut html = String::from("<!DOCTYPE html>\n");
        html.push_str(&format!("<html lang=\"{}\">\n<head>\n", escape_attr(&self.lang)));
        html.push_str(&self.head.render());
        html.push_str("</head>\n");
        html.push_str(&self.body_start);
        html
    }

    /// Render the closing part of the shell (after sections).
    pub fn render_closing(&self) -> String {
        self.body_end.clone()
    }

    /// Assemble a complete document in one string.
    pub fn render_document<'a>(&self, sections: impl IntoIterator<Item = &'a str>) -> String {
        let mut html = self.render_opening();
        for section in sections {
            html.push_str(section);
            html.push('\n');
        }
        html.push_str(&self.body_end);
        html
    }
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_escapes_title_and_meta() {
        let head = HeadContent::new("Rolls & Royce <Ghost>")
            .with_meta("description", "The \"best\" cars");
        let html = head.render();
        assert!(html.contains("<title>Rolls &amp; Royce &lt;Ghost&gt;</title>"));
        assert!(html.contains(r#"content="The &quot;best&quot; cars""#));
        assert!(html.starts_with("<meta charset=\"utf-8\">"));
    }

    #[test]
    fn test_opening_and_closing() {
        let shell = Shell::new(HeadContent::new("Cars").with_style("body{margin:0}"))
            .with_body_start("<body><main>")
            .with_body_end("</main></body></html>");

        let opening = shell.render_opening();
        assert!(opening.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(opening.contains("<style>body{margin:0}</style>"));
        assert!(opening.ends_with("</head>\n<body><main>"));
        assert_eq!(shell.render_closing(), "</main></body></html>");
    }

    #[test]
    fn test_render_document_orders_sections() {
        let shell = Shell::new(HeadContent::new("x"));
        let doc = shell.render_document(["<p>one</p>", "<p>two</p>"]);
        let one = doc.find("one").unwrap();
        let two = doc.find("two").unwrap();
        assert!(one < two);
        assert!(doc.ends_with("</html>"));
    }
}
