//! Nutrient extraction.
//!
//! Source catalogs state nutrition either as a loosely keyed object
//! (`{"Energy": "516 kcal", "Total Fat": "26. 2g"}`) or only inside the item
//! description (`"energy -516 kcal, protein-20g"`). The structured form wins;
//! free text is scanned only when the object yields nothing.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::quantities::parse_decimal;

/// Canonical nutrient names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nutrient {
    /// Energy in kcal.
    Calories,
    /// Total carbohydrates.
    Carbs,
    /// Protein.
    Protein,
    /// Total fat (lipids).
    Fat,
    /// Dietary fiber.
    Fiber,
}

impl Nutrient {
    /// All nutrients in display order.
    pub const ALL: [Nutrient; 5] = [
        Nutrient::Calories,
        Nutrient::Carbs,
        Nutrient::Protein,
        Nutrient::Fat,
        Nutrient::Fiber,
    ];

    /// Lowercase name used in serialized output.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Nutrient::Calories => "calories",
            Nutrient::Carbs => "carbs",
            Nutrient::Protein => "protein",
            Nutrient::Fat => "fat",
            Nutrient::Fiber => "fiber",
        }
    }

    /// Maps a source key by substring containment after lower-casing and
    /// removing whitespace (`"Total Carbohydrate"` -> carbs).
    pub fn from_key(key: &str) -> Option<Self> {
        let key: String = key
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        if key.contains("energy") {
            Some(Nutrient::Calories)
        } else if key.contains("carb") {
            Some(Nutrient::Carbs)
        } else if key.contains("prot") {
            Some(Nutrient::Protein)
        } else if key.contains("lipid") || key.contains("fat") {
            Some(Nutrient::Fat)
        } else if key.contains("fiber") || key.contains("fibre") {
            Some(Nutrient::Fiber)
        } else {
            None
        }
    }
}

/// Nutrient name to numeric value.
///
/// A missing key means "not stated" and must never be read as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nutrition(BTreeMap<Nutrient, f64>);

impl Nutrition {
    /// Value for `nutrient`, if the source stated one.
    pub fn get(&self, nutrient: Nutrient) -> Option<f64> {
        self.0.get(&nutrient).copied()
    }

    /// True when no nutrient could be determined.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of stated nutrients.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates stated nutrients in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    /// Records `value` unless the nutrient is already set.
    fn set_once(&mut self, nutrient: Nutrient, value: f64) {
        self.0.entry(nutrient).or_insert(value);
    }
}

impl FromIterator<(Nutrient, f64)> for Nutrition {
    fn from_iter<T: IntoIterator<Item = (Nutrient, f64)>>(iter: T) -> Self {
        let mut nutrition = Nutrition::default();
        for (nutrient, value) in iter {
            nutrition.set_once(nutrient, value);
        }
        nutrition
    }
}

/// Derives a nutrient mapping from a structured object, else free text.
///
/// ```rust
/// use menukit_canonical::{extract_nutrition, Nutrient};
/// use serde_json::json;
///
/// let from_object = extract_nutrition(Some(&json!({"Energy": "516 kcal"})), Some("protein 9g"));
/// assert_eq!(from_object.get(Nutrient::Calories), Some(516.0));
/// assert_eq!(from_object.get(Nutrient::Protein), None);
///
/// let from_text = extract_nutrition(None, Some("protein-20g fat-5g"));
/// assert_eq!(from_text.get(Nutrient::Protein), Some(20.0));
/// assert_eq!(from_text.get(Nutrient::Fat), Some(5.0));
/// assert_eq!(from_text.len(), 2);
/// ```
pub fn extract_nutrition(structured: Option<&Value>, free_text: Option<&str>) -> Nutrition {
    let from_object = structured.map(from_structured).unwrap_or_default();
    if !from_object.is_empty() {
        return from_object;
    }
    free_text.map(from_text).unwrap_or_default()
}

fn from_structured(value: &Value) -> Nutrition {
    let Value::Object(map) = value else {
        return Nutrition::default();
    };
    map.iter()
        .filter_map(|(key, raw)| Some((Nutrient::from_key(key)?, nutrient_value(raw)?)))
        .collect()
}

fn nutrient_value(raw: &Value) -> Option<f64> {
    let value = match raw {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => parse_decimal(text)?,
        _ => return None,
    };
    (value.is_finite() && value >= 0.0).then_some(value)
}

// Digits with optional thousands commas and a fraction that may carry a stray
// space after the dot ("53. 9g").
const NUMBER: &str = r"(\d[\d,]*(?:\.\s?\d+)?)";

static TEXT_PATTERNS: LazyLock<Vec<(Nutrient, Vec<Regex>)>> = LazyLock::new(|| {
    let compile = |patterns: &[&str]| -> Vec<Regex> {
        patterns
            .iter()
            .map(|p| Regex::new(&format!("(?i){}", p.replace("NUM", NUMBER))).expect("invalid regex"))
            .collect()
    };
    vec![
        (
            Nutrient::Calories,
            compile(&[r"energy[:\s-]*NUM", r"NUM\s*kcal"]),
        ),
        (
            Nutrient::Carbs,
            compile(&[r"(?:carbs|carbohydrates?)[:\s-]*NUM"]),
        ),
        (Nutrient::Protein, compile(&[r"prot(?:ein|ien)[:\s-]*NUM"])),
        (
            Nutrient::Fat,
            compile(&[r"(?:lipid\s*fat|lipid|fat)[:\s-]*NUM"]),
        ),
        (Nutrient::Fiber, compile(&[r"fib(?:er|re)[:\s-]*NUM"])),
    ]
});

fn from_text(text: &str) -> Nutrition {
    TEXT_PATTERNS
        .iter()
        .filter_map(|(nutrient, patterns)| {
            let value = patterns.iter().find_map(|re| {
                let captured = re.captures(text)?.get(1)?.as_str();
                let compact: String = captured
                    .chars()
                    .filter(|c| !c.is_whitespace() && *c != ',')
                    .collect();
                compact.parse::<f64>().ok()
            })?;
            Some((*nutrient, value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn structured_keys_map_by_containment() {
        let nutrition = extract_nutrition(
            Some(&json!({
                "Energy": "516 kcal",
                "Total Carbohydrate": "53. 9g",
                "Protein": 20,
                "Lipid Fat": "26.2 g",
                "Dietary Fibre": "4g",
                "Sodium": "300mg"
            })),
            None,
        );
        assert_eq!(nutrition.get(Nutrient::Calories), Some(516.0));
        assert_eq!(nutrition.get(Nutrient::Carbs), Some(53.9));
        assert_eq!(nutrition.get(Nutrient::Protein), Some(20.0));
        assert_eq!(nutrition.get(Nutrient::Fat), Some(26.2));
        assert_eq!(nutrition.get(Nutrient::Fiber), Some(4.0));
        assert_eq!(nutrition.len(), 5);
    }

    #[test]
    fn first_alias_wins() {
        let nutrition = extract_nutrition(
            Some(&json!({"Total Fat": "10g", "Saturated Fat": "3g"})),
            None,
        );
        assert_eq!(nutrition.get(Nutrient::Fat), Some(10.0));
    }

    #[test]
    fn unparsable_structured_values_are_dropped() {
        let nutrition = extract_nutrition(
            Some(&json!({"Energy": "n/a", "Protein": "1.2.3", "Fat": null, "Carbs": "12g"})),
            None,
        );
        assert_eq!(nutrition.get(Nutrient::Calories), None);
        assert_eq!(nutrition.get(Nutrient::Protein), None);
        assert_eq!(nutrition.get(Nutrient::Fat), None);
        assert_eq!(nutrition.get(Nutrient::Carbs), Some(12.0));
    }

    #[test]
    fn unparsable_alias_leaves_room_for_later_alias() {
        let nutrition =
            extract_nutrition(Some(&json!({"Fat": "-", "Lipids": "7g"})), None);
        assert_eq!(nutrition.get(Nutrient::Fat), Some(7.0));
    }

    #[test]
    fn structured_result_suppresses_text_scan() {
        let nutrition = extract_nutrition(Some(&json!({"Energy": "516 kcal"})), Some("protein-20g"));
        assert_eq!(nutrition.get(Nutrient::Protein), None);
    }

    #[test]
    fn empty_structured_falls_back_to_text() {
        let nutrition = extract_nutrition(Some(&json!({})), Some("Protein: 12g"));
        assert_eq!(nutrition.get(Nutrient::Protein), Some(12.0));

        let nutrition = extract_nutrition(Some(&json!({"Sodium": "1g"})), Some("fibre 3g"));
        assert_eq!(nutrition.get(Nutrient::Fiber), Some(3.0));
    }

    #[test]
    fn free_text_variants() {
        let nutrition = extract_nutrition(
            None,
            Some("A hearty bowl. energy -516 kcal, carbs-53. 9g, protien-20g, lipid fat-26. 2g, Fiber: 6g"),
        );
        assert_eq!(nutrition.get(Nutrient::Calories), Some(516.0));
        assert_eq!(nutrition.get(Nutrient::Carbs), Some(53.9));
        assert_eq!(nutrition.get(Nutrient::Protein), Some(20.0));
        assert_eq!(nutrition.get(Nutrient::Fat), Some(26.2));
        assert_eq!(nutrition.get(Nutrient::Fiber), Some(6.0));
    }

    #[test]
    fn kcal_suffix_is_recognized() {
        let nutrition = extract_nutrition(None, Some("Only 1,250 kcal per serving"));
        assert_eq!(nutrition.get(Nutrient::Calories), Some(1250.0));
    }

    #[test]
    fn text_without_figures_yields_nothing() {
        assert!(extract_nutrition(None, Some("Crisp lettuce, feta, olives")).is_empty());
        assert!(extract_nutrition(None, None).is_empty());
    }

    #[test]
    fn serializes_with_lowercase_keys() {
        let nutrition = extract_nutrition(None, Some("protein-20g fat-5g"));
        assert_eq!(
            serde_json::to_value(&nutrition).unwrap(),
            json!({"protein": 20.0, "fat": 5.0})
        );
    }
}
