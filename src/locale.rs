//! Language-tag locale type.

use std::fmt;

use serde::{
    Deserialize,
    Deserializer,
    Serialize,
};

/// A locale identified by a canonical language tag (e.g. `en`, `en-US`).
///
/// Equality is exact-tag equality. The weaker "same base language" relation
/// used for fallback resolution compares only [`Locale::language`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Locale {
    tag: String,
}

// Deserialization goes through `from_tag` so tags read from configuration are
// canonicalized the same way as tags read from resource labels.
impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

impl Locale {
    /// Parse a language tag into a canonical `Locale`.
    ///
    /// Accepts `_` as a subtag separator (resource labels may use either
    /// `en_US` or `en-US`) and canonicalizes subtag case: language lowercase,
    /// two-letter region uppercase, four-letter script titlecase.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim().replace('_', "-");
        let canonical = tag
            .split('-')
            .enumerate()
            .map(|(index, subtag)| canonicalize_subtag(index, subtag))
            .collect::<Vec<_>>()
            .join("-");
        Self { tag: canonical }
    }

    /// The full canonical tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.tag
    }

    /// The base language subtag (`en` for `en-US`).
    #[must_use]
    pub fn language(&self) -> &str {
        self.tag.split('-').next().unwrap_or(&self.tag)
    }

    /// Whether both locales share a base language subtag.
    #[must_use]
    pub fn same_language(&self, other: &Self) -> bool {
        self.language() == other.language()
    }
}

fn canonicalize_subtag(index: usize, subtag: &str) -> String {
    if index == 0 {
        return subtag.to_lowercase();
    }
    match subtag.len() {
        // Region (US, GB, ...)
        2 => subtag.to_uppercase(),
        // Script (Hant, Cyrl, ...)
        4 => {
            let mut chars = subtag.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
            })
        }
        _ => subtag.to_lowercase(),
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}
