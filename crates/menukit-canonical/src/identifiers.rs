use crate::validation::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Turns an arbitrary display string into a URL-safe key.
///
/// The input is lower-cased, every character that is not an ASCII letter,
/// digit, whitespace, or hyphen is dropped, surrounding whitespace is trimmed
/// and internal whitespace runs collapse to a single `-`. The result may be
/// empty; callers pick their own fallback (`cat-<n>`, `item-<n>`).
///
/// ```rust
/// use menukit_canonical::slugify;
///
/// assert_eq!(slugify("  Greek  Salad (Large) "), "greek-salad-large");
/// assert_eq!(slugify(&slugify("Fresh & Crisp")), slugify("Fresh & Crisp"));
/// ```
pub fn slugify(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || *c == '-')
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join("-")
}

macro_rules! newtype {
    ($name:ident, $doc:expr, $pattern:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps a value without validation; callers are responsible for conformity.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Parses a validated identifier from a string.
            pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
                static PATTERN: LazyLock<Regex> =
                    LazyLock::new(|| Regex::new($pattern).expect("invalid regex"));

                let s = value.into();
                if s.trim().is_empty() {
                    return Err(ValidationError::Empty {
                        field: stringify!($name),
                    });
                }
                if !PATTERN.is_match(&s) {
                    return Err(ValidationError::PatternMismatch {
                        field: stringify!($name),
                        value: s,
                    });
                }
                Ok(Self(s))
            }

            /// Borrows the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

newtype!(
    Slug,
    "Output of [`slugify`]: non-empty, `[a-z0-9-]` only.",
    r"^[a-z0-9-]+$"
);
newtype!(
    CategoryId,
    "Canonical category key, unique across a normalized catalog.",
    r"^\S(?:.*\S)?$"
);
newtype!(
    ItemId,
    "Canonical item key, unique within its owning category.",
    r"^\S(?:.*\S)?$"
);

impl Slug {
    /// Slugifies `text`, returning `None` when nothing URL-safe remains.
    pub fn of(text: &str) -> Option<Self> {
        let slug = slugify(text);
        if slug.is_empty() {
            None
        } else {
            Some(Self(slug))
        }
    }
}
