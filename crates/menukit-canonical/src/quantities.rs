use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Unit a numeric source price is reported in.
///
/// Only numbers are affected: delivery-style payloads report integers in the
/// smallest denomination (paise, cents) and are divided by 100. Strings are
/// always read as major units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceUnit {
    /// Number is already in major units.
    #[default]
    Major,
    /// Number is in minor units (divide by 100).
    Minor,
}

const MINOR_PER_MAJOR: f64 = 100.0;

/// Folds a heterogeneous price value into a non-negative major-unit amount.
///
/// Absent values, unparsable strings, non-scalar values, and negative results
/// all normalize to `0.0`, the "unknown/free" sentinel.
///
/// ```rust
/// use menukit_canonical::{normalize_price, PriceUnit};
/// use serde_json::json;
///
/// assert_eq!(normalize_price(Some(&json!("₹1,234.50")), PriceUnit::Major), 1234.5);
/// assert_eq!(normalize_price(Some(&json!(450)), PriceUnit::Minor), 4.5);
/// assert_eq!(normalize_price(None, PriceUnit::Major), 0.0);
/// ```
pub fn normalize_price(raw: Option<&Value>, unit: PriceUnit) -> f64 {
    let amount = match raw {
        Some(Value::Number(number)) => number.as_f64().map(|n| match unit {
            PriceUnit::Major => n,
            PriceUnit::Minor => n / MINOR_PER_MAJOR,
        }),
        Some(Value::String(text)) => parse_decimal(text),
        _ => None,
    };
    match amount {
        Some(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

/// Parses a decorated decimal string (`"₹1,234.50"`, `"26. 2g"`).
///
/// Every character other than ASCII digits and `.` is discarded before
/// parsing. Returns `None` when nothing numeric remains or the remainder is
/// not a valid float (for example `"1.2.3"`).
pub fn parse_decimal(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minor_units_divide_only_numbers() {
        assert_eq!(normalize_price(Some(&json!(45000)), PriceUnit::Minor), 450.0);
        assert_eq!(normalize_price(Some(&json!("450")), PriceUnit::Minor), 450.0);
        assert_eq!(normalize_price(Some(&json!(450)), PriceUnit::Major), 450.0);
    }

    #[test]
    fn decorated_strings_are_cleaned() {
        assert_eq!(normalize_price(Some(&json!("₹1,234.50")), PriceUnit::Major), 1234.5);
        assert_eq!(normalize_price(Some(&json!("Rs. 99")), PriceUnit::Major), 0.99);
        assert_eq!(normalize_price(Some(&json!("$ 12")), PriceUnit::Major), 12.0);
    }

    #[test]
    fn unusable_values_normalize_to_zero() {
        for raw in [
            json!(null),
            json!("free"),
            json!("1.2.3"),
            json!(""),
            json!(true),
            json!([450]),
            json!({"amount": 450}),
            json!(-20),
            json!(-0.0),
        ] {
            let price = normalize_price(Some(&raw), PriceUnit::Major);
            assert_eq!(price, 0.0, "raw: {raw}");
            assert!(price.is_sign_positive());
        }
        assert_eq!(normalize_price(None, PriceUnit::Minor), 0.0);
    }

    #[test]
    fn parse_decimal_handles_spaced_fractions() {
        assert_eq!(parse_decimal("26. 2g"), Some(26.2));
        assert_eq!(parse_decimal(".5"), Some(0.5));
        assert_eq!(parse_decimal("kcal"), None);
        assert_eq!(parse_decimal("."), None);
    }
}
