//! Price and mileage formatting.
//!
//! Prices are held in cents so fractional list prices survive decoding
//! without float drift.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::decode::number_of;

/// A list price in US dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price {
    /// Amount in cents.
    pub cents: i64,
}

impl Price {
    /// Create a price from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Create a price from whole dollars.
    pub fn from_dollars(dollars: i64) -> Self {
        Self {
            cents: dollars.saturating_mul(100),
        }
    }

    /// Create a price from a decimal dollar amount.
    pub fn from_decimal(amount: f64) -> Self {
        Self {
            cents: (amount * 100.0).round() as i64,
        }
    }

    /// US-locale display string: `$120,000`, `$99.5`, `$0`.
    ///
    /// Fractions drop trailing zeros the way `en-US` number formatting does.
    pub fn display(&self) -> String {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        let (dollars, cents) = (abs / 100, abs % 100);
        if cents == 0 {
            format!("{sign}${}", group_thousands(dollars))
        } else {
            let fraction = format!("{cents:02}");
            format!(
                "{sign}${}.{}",
                group_thousands(dollars),
                fraction.trim_end_matches('0')
            )
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        number_of(&value)
            .map(Price::from_decimal)
            .ok_or_else(|| D::Error::custom(format!("price must be numeric, got `{value}`")))
    }
}

/// `45210` → `45,210`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// `45210` → `45,210 miles`.
pub fn mileage_label(miles: u64) -> String {
    format!("{} miles", group_thousands(miles))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_display_whole_dollars() {
        assert_eq!(Price::from_dollars(120_000).display(), "$120,000");
        assert_eq!(Price::from_dollars(999).display(), "$999");
        assert_eq!(Price::from_dollars(2_750_000).display(), "$2,750,000");
    }

    #[test]
    fn test_display_fractional_and_zero() {
        assert_eq!(Price::from_decimal(99.5).display(), "$99.5");
        assert_eq!(Price::from_decimal(99.05).display(), "$99.05");
        assert_eq!(Price::from_cents(123_456_78).display(), "$123,456.78");
        assert_eq!(Price::default().display(), "$0");
        let zero: Price = serde_json::from_value(json!(0)).unwrap();
        assert_eq!(zero.display(), "$0");
        assert_eq!(Price::from_dollars(-5).display(), "-$5");
    }

    #[test]
    fn test_deserialize() {
        let price: Price = serde_json::from_value(json!(120000)).unwrap();
        assert_eq!(price, Price::from_dollars(120_000));

        let price: Price = serde_json::from_value(json!("89,900")).unwrap();
        assert_eq!(price, Price::from_dollars(89_900));

        assert!(serde_json::from_value::<Price>(json!("call us")).is_err());
        assert!(serde_json::from_value::<Price>(json!(null)).is_err());
    }

    #[test]
    fn test_mileage_label() {
        assert_eq!(mileage_label(45210), "45,210 miles");
        assert_eq!(mileage_label(12), "12 miles");
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(1_000_000), "1,000,000");
    }
}
