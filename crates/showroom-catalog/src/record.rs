//! Content records: cars, brands and dealerships.

use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::decode::{lenient_bool, opt_html, opt_integer, opt_string, required_integer, text_of};
use crate::html::TrustedHtml;
use crate::media::{image_list, opt_image, ImageAsset};
use crate::money::{mileage_label, Price};
use crate::reference::{optional_reference, reference_list, Reference};

/// Object type tags in the content store.
pub const CARS: &str = "cars";
pub const BRANDS: &str = "brands";
pub const DEALERSHIPS: &str = "dealerships";

/// Shared shape of every content object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Object<M> {
    pub id: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub object_type: String,
    pub metadata: M,
}

pub type Car = Object<CarMetadata>;
pub type Brand = Object<BrandMetadata>;
pub type Dealership = Object<DealershipMetadata>;

// === Condition ===

/// Closed set of condition keys; anything else is kept as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConditionKey {
    New,
    Used,
    Certified,
    Other(String),
}

impl ConditionKey {
    pub fn parse(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "new" => ConditionKey::New,
            "used" => ConditionKey::Used,
            "certified" => ConditionKey::Certified,
            other => ConditionKey::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ConditionKey::New => "new",
            ConditionKey::Used => "used",
            ConditionKey::Certified => "certified",
            ConditionKey::Other(key) => key,
        }
    }

    fn default_label(&self) -> String {
        match self {
            ConditionKey::New => "New".to_string(),
            ConditionKey::Used => "Used".to_string(),
            ConditionKey::Certified => "Certified Pre-Owned".to_string(),
            ConditionKey::Other(key) => {
                let mut chars = key.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        }
    }
}

impl fmt::Display for ConditionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A condition key paired with its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub key: ConditionKey,
    pub label: String,
}

impl Condition {
    /// Decode `{"key": "new", "value": "New"}` or a bare key string.
    /// A missing label is derived from the key.
    pub fn from_value(value: &Value) -> Option<Self> {
        let (key, label) = match value {
            Value::Object(map) => (
                map.get("key").and_then(text_of),
                map.get("value").and_then(text_of),
            ),
            Value::String(_) => (text_of(value), None),
            _ => return None,
        };
        let key = match (key, &label) {
            (Some(key), _) => ConditionKey::parse(&key),
            (None, Some(label)) => ConditionKey::parse(label),
            (None, None) => return None,
        };
        let label = label.unwrap_or_else(|| key.default_label());
        Some(Self { key, label })
    }
}

fn opt_condition<'de, D>(deserializer: D) -> Result<Option<Condition>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Condition::from_value(&Value::deserialize(deserializer)?))
}

// === Car ===

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CarMetadata {
    #[serde(default, deserialize_with = "opt_string")]
    pub model_name: Option<String>,
    #[serde(deserialize_with = "required_integer")]
    pub year: i32,
    pub price: Price,
    #[serde(default, deserialize_with = "opt_html")]
    pub description: Option<TrustedHtml>,
    #[serde(default, deserialize_with = "opt_string")]
    pub engine: Option<String>,
    #[serde(default, deserialize_with = "opt_integer")]
    pub horsepower: Option<u32>,
    #[serde(default, deserialize_with = "opt_string")]
    pub acceleration: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub top_speed: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub exterior_color: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub interior_color: Option<String>,
    #[serde(default, deserialize_with = "opt_integer")]
    pub mileage: Option<u64>,
    #[serde(default, deserialize_with = "opt_condition")]
    pub condition: Option<Condition>,
    #[serde(default, deserialize_with = "opt_image")]
    pub main_image: Option<ImageAsset>,
    #[serde(default, deserialize_with = "image_list")]
    pub gallery_images: Vec<ImageAsset>,
    #[serde(default, deserialize_with = "optional_reference")]
    pub brand: Option<Reference<BrandMetadata>>,
    #[serde(default, deserialize_with = "optional_reference")]
    pub dealership: Option<Reference<DealershipMetadata>>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub available: bool,
}

impl Object<CarMetadata> {
    /// Brand display name, or `Unknown Brand` unless the brand is inlined.
    pub fn brand_name(&self) -> &str {
        self.metadata
            .brand
            .as_ref()
            .map_or(UNKNOWN_BRAND, |brand| brand.display_name())
    }

    pub fn dealership_name(&self) -> &str {
        self.metadata
            .dealership
            .as_ref()
            .map_or(UNKNOWN_DEALERSHIP, |dealership| dealership.display_name())
    }

    /// The inlined brand, if any.
    pub fn brand(&self) -> Option<&Brand> {
        self.metadata.brand.as_ref().and_then(Reference::expanded)
    }

    /// The inlined dealership, if any.
    pub fn dealership(&self) -> Option<&Dealership> {
        self.metadata.dealership.as_ref().and_then(Reference::expanded)
    }

    pub fn condition_label(&self) -> &str {
        self.metadata
            .condition
            .as_ref()
            .map_or("Condition not specified", |c| c.label.as_str())
    }

    pub fn price_label(&self) -> String {
        self.metadata.price.display()
    }

    pub fn mileage_label(&self) -> Option<String> {
        self.metadata.mileage.map(mileage_label)
    }

    /// Main image first, then the gallery.
    pub fn images(&self) -> Vec<&ImageAsset> {
        self.metadata
            .main_image
            .iter()
            .chain(self.metadata.gallery_images.iter())
            .collect()
    }

    pub fn primary_image(&self) -> Option<&ImageAsset> {
        self.metadata
            .main_image
            .as_ref()
            .or_else(|| self.metadata.gallery_images.first())
    }

    /// `2023 Ferrari F8 Tributo` style heading text.
    pub fn headline(&self) -> String {
        match (self.brand(), &self.metadata.model_name) {
            (Some(brand), Some(model)) => {
                format!("{} {} {}", self.metadata.year, brand.name(), model)
            }
            _ => format!("{} {}", self.metadata.year, self.title),
        }
    }
}

// === Brand ===

const UNKNOWN_BRAND: &str = "Unknown Brand";
const UNKNOWN_DEALERSHIP: &str = "Unknown Dealership";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BrandMetadata {
    #[serde(default, deserialize_with = "opt_string")]
    pub brand_name: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "opt_integer")]
    pub founded_year: Option<i32>,
    #[serde(default, deserialize_with = "opt_html")]
    pub description: Option<TrustedHtml>,
    #[serde(default, deserialize_with = "opt_image")]
    pub brand_logo: Option<ImageAsset>,
    #[serde(default, deserialize_with = "opt_string")]
    pub website: Option<String>,
}

impl Object<BrandMetadata> {
    /// `brand_name`, else the object title, else `Unknown Brand`.
    pub fn name(&self) -> &str {
        self.metadata
            .brand_name
            .as_deref()
            .or_else(|| Some(self.title.as_str()).filter(|t| !t.trim().is_empty()))
            .unwrap_or(UNKNOWN_BRAND)
    }
}

impl Reference<BrandMetadata> {
    /// Name of the inlined brand; `Unknown Brand` for a bare id.
    pub fn display_name(&self) -> &str {
        self.expanded().map_or(UNKNOWN_BRAND, |brand| brand.name())
    }
}

// === Dealership ===

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DealershipMetadata {
    #[serde(default, deserialize_with = "opt_string")]
    pub dealership_name: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub manager_name: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub hours: Option<String>,
    #[serde(default, deserialize_with = "opt_image")]
    pub showroom_image: Option<ImageAsset>,
    #[serde(default, deserialize_with = "reference_list")]
    pub specializes_in: Vec<Reference<BrandMetadata>>,
}

impl Reference<DealershipMetadata> {
    /// Name of the inlined dealership; `Unknown Dealership` for a bare id.
    pub fn display_name(&self) -> &str {
        self.expanded()
            .map_or(UNKNOWN_DEALERSHIP, |dealership| dealership.name())
    }
}

impl Object<DealershipMetadata> {
    /// `dealership_name`, else the object title, else `Unknown Dealership`.
    pub fn name(&self) -> &str {
        self.metadata
            .dealership_name
            .as_deref()
            .or_else(|| Some(self.title.as_str()).filter(|t| !t.trim().is_empty()))
            .unwrap_or(UNKNOWN_DEALERSHIP)
    }

    /// Address split on line breaks, blank lines dropped.
    pub fn address_lines(&self) -> Vec<&str> {
        self.metadata
            .address
            .as_deref()
            .map(|address| {
                address
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// `tel:` target with spaces and punctuation other than `+` removed.
    pub fn phone_href(&self) -> Option<String> {
        let phone = self.metadata.phone.as_deref()?;
        let digits: String = phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        (!digits.is_empty()).then(|| format!("tel:{digits}"))
    }

    /// Inlined brands this dealership specializes in, in list order.
    pub fn specialties(&self) -> Vec<&Brand> {
        self.metadata
            .specializes_in
            .iter()
            .filter_map(Reference::expanded)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn car_json() -> Value {
        json!({
            "id": "c1",
            "slug": "ferrari-f8",
            "title": "Ferrari F8 Tributo",
            "type": "cars",
            "metadata": {
                "model_name": "F8 Tributo",
                "year": 2023,
                "price": 276000,
                "description": "<p>Mid-engine V8</p>",
                "engine": "3.9L Twin-Turbo V8",
                "horsepower": "710",
                "acceleration": "2.9s",
                "top_speed": "",
                "mileage": 1200,
                "condition": {"key": "new", "value": "New"},
                "main_image": {"url": "https://cdn/x.jpg", "imgix_url": "https://imgix/x.jpg"},
                "gallery_images": [
                    {"url": "https://cdn/y.jpg", "imgix_url": "https://imgix/y.jpg"},
                    {"url": "https://cdn/z.jpg", "imgix_url": ""}
                ],
                "brand": {
                    "id": "b1", "slug": "ferrari", "title": "Ferrari", "type": "brands",
                    "metadata": {"brand_name": "Ferrari"}
                },
                "dealership": "d1",
                "available": true
            }
        })
    }

    // === Car Tests ===

    #[test]
    fn test_car_decodes() {
        let car: Car = serde_json::from_value(car_json()).unwrap();
        assert_eq!(car.object_type, CARS);
        assert_eq!(car.metadata.year, 2023);
        assert_eq!(car.price_label(), "$276,000");
        assert_eq!(car.metadata.horsepower, Some(710));
        assert_eq!(car.metadata.top_speed, None);
        assert_eq!(car.mileage_label().as_deref(), Some("1,200 miles"));
        assert_eq!(car.metadata.gallery_images.len(), 1);
        assert_eq!(car.images().len(), 2);
        assert_eq!(car.brand_name(), "Ferrari");
        assert_eq!(car.dealership_name(), "Unknown Dealership");
        assert_eq!(car.condition_label(), "New");
        assert_eq!(car.headline(), "2023 Ferrari F8 Tributo");
        assert!(car.metadata.available);
    }

    #[test]
    fn test_car_without_price_is_rejected() {
        let mut value = car_json();
        value["metadata"]
            .as_object_mut()
            .unwrap()
            .remove("price");
        assert!(serde_json::from_value::<Car>(value).is_err());

        let mut value = car_json();
        value["metadata"]["price"] = json!("POA");
        assert!(serde_json::from_value::<Car>(value).is_err());
    }

    #[test]
    fn test_car_missing_optionals() {
        let car: Car = serde_json::from_value(json!({
            "id": "c2", "slug": "911", "title": "911",
            "metadata": {"year": "2019", "price": "150000"}
        }))
        .unwrap();
        assert!(car.metadata.brand.is_none());
        assert!(car.primary_image().is_none());
        assert_eq!(car.condition_label(), "Condition not specified");
        assert_eq!(car.brand_name(), "Unknown Brand");
        assert_eq!(car.headline(), "2019 911");
        assert!(!car.metadata.available);
    }

    // === Condition Tests ===

    #[test]
    fn test_condition_shapes() {
        let condition = Condition::from_value(&json!({"key": "certified", "value": "CPO"})).unwrap();
        assert_eq!(condition.key, ConditionKey::Certified);
        assert_eq!(condition.label, "CPO");

        let bare = Condition::from_value(&json!("used")).unwrap();
        assert_eq!(bare.key, ConditionKey::Used);
        assert_eq!(bare.label, "Used");

        assert!(Condition::from_value(&json!(null)).is_none());
        assert!(Condition::from_value(&json!({"key": "", "value": ""})).is_none());
    }

    #[test]
    fn test_unrecognized_condition_keeps_label() {
        let condition =
            Condition::from_value(&json!({"key": "demo", "value": "Demonstrator"})).unwrap();
        assert_eq!(condition.key, ConditionKey::Other("demo".to_string()));
        assert_eq!(condition.label, "Demonstrator");

        let derived = Condition::from_value(&json!({"key": "salvage"})).unwrap();
        assert_eq!(derived.label, "Salvage");
    }

    // === Brand and Dealership Tests ===

    #[test]
    fn test_brand_name_fallbacks() {
        let named: Brand = serde_json::from_value(json!({
            "id": "b1", "title": "Ferrari S.p.A.", "metadata": {"brand_name": "Ferrari"}
        }))
        .unwrap();
        assert_eq!(named.name(), "Ferrari");

        let titled: Brand =
            serde_json::from_value(json!({"id": "b2", "title": "Porsche", "metadata": {}})).unwrap();
        assert_eq!(titled.name(), "Porsche");

        let anonymous: Brand =
            serde_json::from_value(json!({"id": "b3", "metadata": {"brand_name": ""}})).unwrap();
        assert_eq!(anonymous.name(), "Unknown Brand");
    }

    #[test]
    fn test_dealership_helpers() {
        let dealership: Dealership = serde_json::from_value(json!({
            "id": "d1",
            "slug": "beverly-hills",
            "title": "Beverly Hills",
            "metadata": {
                "dealership_name": "Elite Motors Beverly Hills",
                "address": "9000 Wilshire Blvd\n\nBeverly Hills, CA 90211",
                "phone": "(310) 555-0100",
                "specializes_in": [
                    {"id": "b1", "title": "Ferrari", "metadata": {"brand_name": "Ferrari"}},
                    "b2",
                    {"id": "b3", "title": "McLaren", "metadata": {"brand_name": "McLaren"}}
                ]
            }
        }))
        .unwrap();

        assert_eq!(dealership.name(), "Elite Motors Beverly Hills");
        assert_eq!(
            dealership.address_lines(),
            vec!["9000 Wilshire Blvd", "Beverly Hills, CA 90211"]
        );
        assert_eq!(dealership.phone_href().as_deref(), Some("tel:3105550100"));
        let names: Vec<&str> = dealership.specialties().iter().map(|b| b.name()).collect();
        assert_eq!(names, vec!["Ferrari", "McLaren"]);
    }
}
