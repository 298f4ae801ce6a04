//! Condition, availability and brand badges.

use showroom_catalog::{Car, ConditionKey};

use super::escape_html;

/// Badge class for a condition: green for new, blue for certified,
/// neutral grey for everything else.
pub fn condition_badge_class(key: Option<&ConditionKey>) -> &'static str {
    match key {
        Some(ConditionKey::New) => "badge badge--new",
        Some(ConditionKey::Certified) => "badge badge--certified",
        _ => "badge badge--neutral",
    }
}

pub fn condition_badge(car: &Car) -> String {
    let key = car.metadata.condition.as_ref().map(|c| &c.key);
    format!(
        r#"<span class="{}">{}</span>"#,
        condition_badge_class(key),
        escape_html(car.condition_label())
    )
}

/// `Available` or `Sold`.
pub fn availability_badge(available: bool) -> String {
    if available {
        r#"<span class="badge badge--available">Available</span>"#.to_string()
    } else {
        r#"<span class="badge badge--sold">Sold</span>"#.to_string()
    }
}

pub fn brand_badge(name: &str) -> String {
    format!(r#"<span class="badge badge--brand">{}</span>"#, escape_html(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_classes_differ() {
        let new = condition_badge_class(Some(&ConditionKey::New));
        let used = condition_badge_class(Some(&ConditionKey::Used));
        let certified = condition_badge_class(Some(&ConditionKey::Certified));
        assert_ne!(new, used);
        assert_ne!(certified, used);
        assert_eq!(used, "badge badge--neutral");
    }

    #[test]
    fn test_unrecognized_condition_is_neutral() {
        let other = ConditionKey::Other("demo".to_string());
        assert_eq!(condition_badge_class(Some(&other)), "badge badge--neutral");
        assert_eq!(condition_badge_class(None), "badge badge--neutral");
    }

    #[test]
    fn test_availability_badge() {
        assert!(availability_badge(true).contains("Available"));
        assert!(availability_badge(false).contains("Sold"));
    }
}
