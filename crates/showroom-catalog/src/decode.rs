//! Lenient field decoders for content metadata.
//!
//! Editors leave optional fields as `""`, and numeric fields sometimes
//! arrive as strings. These helpers normalize both at the boundary.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::html::TrustedHtml;

/// Integer from a JSON number or numeric string.
pub(crate) fn integer_of(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        Value::String(s) => {
            let s = s.trim().replace(',', "");
            s.parse::<i64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite() && f.fract() == 0.0)
                    .map(|f| f as i64)
            })
        }
        _ => None,
    }
}

/// Float from a JSON number or numeric string.
pub(crate) fn number_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', "").parse::<f64>().ok(),
        _ => None,
    }
    .filter(|f| f.is_finite())
}

/// Non-blank text; numbers are rendered as text.
pub(crate) fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub(crate) fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_of(&Value::deserialize(deserializer)?))
}

pub(crate) fn opt_html<'de, D>(deserializer: D) -> Result<Option<TrustedHtml>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_string(deserializer)?.map(TrustedHtml::new))
}

/// Missing, blank or non-numeric values are absent; out-of-range values too.
pub(crate) fn opt_integer<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(integer_of(&value).and_then(|n| T::try_from(n).ok()))
}

pub(crate) fn required_integer<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let value = Value::deserialize(deserializer)?;
    integer_of(&value)
        .and_then(|n| T::try_from(n).ok())
        .ok_or_else(|| D::Error::custom(format!("expected an integer, got `{value}`")))
}

/// `true`, `"true"`, or a non-zero number.
pub(crate) fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "opt_string")]
        text: Option<String>,
        #[serde(default, deserialize_with = "opt_integer")]
        count: Option<u32>,
        #[serde(default, deserialize_with = "lenient_bool")]
        flag: bool,
    }

    fn probe(value: Value) -> Probe {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_blank_text_is_absent() {
        assert_eq!(probe(json!({"text": ""})).text, None);
        assert_eq!(probe(json!({"text": "  "})).text, None);
        assert_eq!(probe(json!({"text": null})).text, None);
        assert_eq!(probe(json!({})).text, None);
        assert_eq!(probe(json!({"text": "V12"})).text.as_deref(), Some("V12"));
    }

    #[test]
    fn test_integers_from_numbers_and_strings() {
        assert_eq!(probe(json!({"count": 710})).count, Some(710));
        assert_eq!(probe(json!({"count": "710"})).count, Some(710));
        assert_eq!(probe(json!({"count": "45,210"})).count, Some(45210));
        assert_eq!(probe(json!({"count": 710.0})).count, Some(710));
        assert_eq!(probe(json!({"count": ""})).count, None);
        assert_eq!(probe(json!({"count": "lots"})).count, None);
        assert_eq!(probe(json!({"count": -1})).count, None);
    }

    #[test]
    fn test_lenient_bool() {
        assert!(probe(json!({"flag": true})).flag);
        assert!(probe(json!({"flag": "true"})).flag);
        assert!(probe(json!({"flag": 1})).flag);
        assert!(!probe(json!({"flag": "no"})).flag);
        assert!(!probe(json!({})).flag);
    }

    #[test]
    fn test_number_of() {
        assert_eq!(number_of(&json!("99.5")), Some(99.5));
        assert_eq!(number_of(&json!(120000)), Some(120000.0));
        assert_eq!(number_of(&json!(true)), None);
    }
}
