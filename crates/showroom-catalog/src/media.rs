//! Images served through the imgix CDN.

use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Resize mode passed to the CDN as `fit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFit {
    Crop,
    Max,
    Contain,
}

impl ImageFit {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFit::Crop => "crop",
            ImageFit::Max => "max",
            ImageFit::Contain => "contain",
        }
    }
}

impl fmt::Display for ImageFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored image: the original URL plus its CDN-transformable URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    pub url: String,
    pub imgix_url: String,
}

impl ImageAsset {
    /// Decode an image object. Missing or empty `imgix_url` means no image.
    pub fn from_value(value: &Value) -> Option<Self> {
        let imgix_url = value
            .get("imgix_url")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())?;
        let url = value
            .get("url")
            .and_then(Value::as_str)
            .map(str::trim)
            .unwrap_or(imgix_url);
        Some(Self {
            url: url.to_string(),
            imgix_url: imgix_url.to_string(),
        })
    }

    /// CDN URL resized to `width`×`height`.
    ///
    /// ```
    /// use showroom_catalog::{ImageAsset, ImageFit};
    /// let image = ImageAsset {
    ///     url: "https://cdn.example/f40.jpg".into(),
    ///     imgix_url: "https://imgix.example/f40.jpg".into(),
    /// };
    /// assert_eq!(
    ///     image.transformed(800, 600, ImageFit::Crop),
    ///     "https://imgix.example/f40.jpg?w=800&h=600&fit=crop&auto=format,compress"
    /// );
    /// ```
    pub fn transformed(&self, width: u32, height: u32, fit: ImageFit) -> String {
        let separator = if self.imgix_url.contains('?') { '&' } else { '?' };
        format!(
            "{}{}w={}&h={}&fit={}&auto=format,compress",
            self.imgix_url, separator, width, height, fit
        )
    }
}

pub(crate) fn opt_image<'de, D>(deserializer: D) -> Result<Option<ImageAsset>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(ImageAsset::from_value(&Value::deserialize(deserializer)?))
}

/// Invalid entries are dropped.
pub(crate) fn image_list<'de, D>(deserializer: D) -> Result<Vec<ImageAsset>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.iter().filter_map(ImageAsset::from_value).collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_from_value() {
        let image = ImageAsset::from_value(&json!({
            "url": "https://cdn.example/a.jpg",
            "imgix_url": "https://imgix.example/a.jpg"
        }))
        .unwrap();
        assert_eq!(image.imgix_url, "https://imgix.example/a.jpg");

        assert!(ImageAsset::from_value(&json!({"url": "x", "imgix_url": ""})).is_none());
        assert!(ImageAsset::from_value(&json!(null)).is_none());
        assert!(ImageAsset::from_value(&json!("https://x")).is_none());
    }

    #[test]
    fn test_transformed_appends_to_existing_query() {
        let image = ImageAsset {
            url: String::new(),
            imgix_url: "https://imgix.example/a.jpg?v=2".to_string(),
        };
        assert_eq!(
            image.transformed(100, 100, ImageFit::Max),
            "https://imgix.example/a.jpg?v=2&w=100&h=100&fit=max&auto=format,compress"
        );
    }
}
