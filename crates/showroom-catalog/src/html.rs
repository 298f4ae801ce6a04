//! Rich text from the content store.

use std::fmt;

/// Markup authored in the CMS, inserted into pages without escaping.
///
/// Content is not sanitized. Construct only from content-store fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    /// Wrap markup from the content store.
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// The markup, for direct insertion into a page.
    pub fn as_trusted_markup(&self) -> &str {
        &self.0
    }

    /// Whether the markup has no visible text.
    pub fn is_blank(&self) -> bool {
        self.plain_text().is_empty()
    }

    /// Text content with tags removed and whitespace collapsed.
    pub fn plain_text(&self) -> String {
        let mut text = String::with_capacity(self.0.len());
        let mut in_tag = false;
        for c in self.0.chars() {
            match c {
                '<' => {
                    in_tag = true;
                    text.push(' ');
                }
                '>' if in_tag => in_tag = false,
                _ if !in_tag => text.push(c),
                _ => {}
            }
        }
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// First `max_chars` characters of the plain text, with `...`
    /// appended when anything was cut.
    pub fn excerpt(&self, max_chars: usize) -> String {
        let text = self.plain_text();
        if text.chars().count() <= max_chars {
            return text;
        }
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut.trim_end())
    }
}

impl fmt::Display for TrustedHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_passes_through() {
        let html = TrustedHtml::new("<p>Hand-built in <strong>Maranello</strong></p>");
        assert_eq!(
            html.as_trusted_markup(),
            "<p>Hand-built in <strong>Maranello</strong></p>"
        );
    }

    #[test]
    fn test_plain_text() {
        let html = TrustedHtml::new("<p>Founded&nbsp;in</p><p>1947</p>");
        assert_eq!(html.plain_text(), "Founded&nbsp;in 1947");
        assert!(TrustedHtml::new("<p> </p>").is_blank());
    }

    #[test]
    fn test_excerpt() {
        let short = TrustedHtml::new("<p>Short</p>");
        assert_eq!(short.excerpt(150), "Short");

        let long = TrustedHtml::new(format!("<p>{}</p>", "a".repeat(200)));
        let excerpt = long.excerpt(150);
        assert!(excerpt.ends_with("..."));
        assert_eq!(excerpt.chars().count(), 153);
    }
}
