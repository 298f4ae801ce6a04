//! CDN images with placeholders.

use showroom_catalog::{ImageAsset, ImageFit};

use super::escape_html;

/// Target size and fit for one image slot.
#[derive(Debug, Clone, Copy)]
pub struct ImageSlot {
    pub width: u32,
    pub height: u32,
    pub fit: ImageFit,
}

impl ImageSlot {
    pub const CARD: ImageSlot = ImageSlot::crop(800, 400);
    pub const GALLERY_MAIN: ImageSlot = ImageSlot::crop(1200, 675);
    pub const GALLERY_THUMB: ImageSlot = ImageSlot::crop(400, 300);
    pub const BRAND_LOGO: ImageSlot = ImageSlot::new(200, 200, ImageFit::Contain);
    pub const BRAND_HEADER_LOGO: ImageSlot = ImageSlot::new(200, 100, ImageFit::Max);
    pub const SHOWROOM_CARD: ImageSlot = ImageSlot::crop(800, 300);
    pub const SHOWROOM_HEADER: ImageSlot = ImageSlot::crop(1200, 400);

    pub const fn new(width: u32, height: u32, fit: ImageFit) -> Self {
        Self { width, height, fit }
    }

    pub const fn crop(width: u32, height: u32) -> Self {
        Self::new(width, height, ImageFit::Crop)
    }
}

/// `<img>` for the asset, or a placeholder block with `placeholder` text.
pub fn image_or_placeholder(
    image: Option<&ImageAsset>,
    slot: ImageSlot,
    alt: &str,
    class: &str,
    placeholder: &str,
) -> String {
    match image {
        Some(image) => format!(
            r#"<img src="{}" alt="{}" class="{}" loading="lazy">"#,
            escape_html(&image.transformed(slot.width, slot.height, slot.fit)),
            escape_html(alt),
            class
        ),
        None => format!(
            r#"<div class="{} image-placeholder"><span>{}</span></div>"#,
            class,
            escape_html(placeholder)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_uses_cdn_transform() {
        let image = ImageAsset {
            url: "https://cdn.example/a.jpg".to_string(),
            imgix_url: "https://imgix.example/a.jpg".to_string(),
        };
        let html = image_or_placeholder(Some(&image), ImageSlot::CARD, "F8", "card-image", "");
        assert!(html.contains(
            r#"src="https://imgix.example/a.jpg?w=800&amp;h=400&amp;fit=crop&amp;auto=format,compress""#
        ));
        assert!(html.contains(r#"alt="F8""#));
    }

    #[test]
    fn test_placeholder() {
        let html = image_or_placeholder(None, ImageSlot::CARD, "F8", "card-image", "No image available");
        assert!(html.contains("image-placeholder"));
        assert!(html.contains("No image available"));
        assert!(!html.contains("<img"));
    }
}
