//! Emission factor table.
//!
//! An ordered list of `(keyword, kg CO2e per unit)` pairs. Matching is
//! substring containment and the first keyword in table order wins, so the
//! order of entries is part of the table's meaning: animal-based categories
//! come before plant-based ones, and `default` comes last.

use crate::error::FactorError;

/// Keyword of the mandatory fallback entry.
pub const DEFAULT_KEY: &str = "default";

/// Built-in factors, kg CO2e per unit.
const BUILTIN_FACTORS: &[(&str, f64)] = &[
    // Animal-based
    ("beef", 50.0),
    ("lamb", 39.2),
    ("cheese", 13.5),
    ("butter", 10.77),
    ("pork", 12.1),
    ("chicken", 6.9),
    ("fish", 5.0),
    ("eggs", 4.8),
    ("milk", 1.9),
    // Plant-based
    ("rice", 3.7),
    ("vegetable oil", 3.66),
    ("potatoes", 2.9),
    ("nuts", 2.3),
    ("beans", 2.0),
    ("tofu", 2.0),
    ("vegetables", 2.0),
    ("pasta", 1.54),
    ("fruit", 1.1),
    ("lentils", 0.9),
    ("wheat", 0.8),
    ("soy", 0.7),
    ("corn", 0.6),
    ("sugar", 0.5),
    ("oats", 0.4),
    ("palm oil", 8.0),
    (DEFAULT_KEY, 1.0),
];

/// Immutable keyword → factor table with ordered containment matching.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorTable {
    entries: Vec<(String, f64)>,
    default_factor: f64,
}

impl Default for FactorTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FactorTable {
    /// The built-in grocery factor table.
    #[must_use]
    pub fn builtin() -> Self {
        let entries: Vec<(String, f64)> = BUILTIN_FACTORS
            .iter()
            .map(|&(keyword, factor)| (keyword.to_string(), factor))
            .collect();
        let default_factor = entries
            .iter()
            .find(|(keyword, _)| keyword == DEFAULT_KEY)
            .map_or(1.0, |&(_, factor)| factor);
        Self {
            entries,
            default_factor,
        }
    }

    /// Build a custom table, preserving the given order.
    ///
    /// Keywords are trimmed and lowercased.
    ///
    /// # Errors
    ///
    /// Returns [`FactorError`] if a keyword is empty or repeated, a factor is
    /// negative or not finite, or there is no `default` entry.
    pub fn from_entries<I, K>(entries: I) -> Result<Self, FactorError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut table: Vec<(String, f64)> = Vec::new();
        for (keyword, factor) in entries {
            let keyword = keyword.as_ref().trim().to_lowercase();
            if keyword.is_empty() {
                return Err(FactorError::EmptyKeyword);
            }
            if !factor.is_finite() || factor < 0.0 {
                return Err(FactorError::InvalidFactor { keyword, factor });
            }
            if table.iter().any(|(existing, _)| *existing == keyword) {
                return Err(FactorError::DuplicateKeyword(keyword));
            }
            table.push((keyword, factor));
        }

        let default_factor = table
            .iter()
            .find(|(keyword, _)| keyword == DEFAULT_KEY)
            .map(|&(_, factor)| factor)
            .ok_or(FactorError::MissingDefault(DEFAULT_KEY))?;

        Ok(Self {
            entries: table,
            default_factor,
        })
    }

    /// Keywords in table order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(keyword, _)| keyword.as_str())
    }

    /// `(keyword, factor)` pairs in table order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries
            .iter()
            .map(|(keyword, factor)| (keyword.as_str(), *factor))
    }

    /// Exact keyword lookup.
    #[must_use]
    pub fn factor_for(&self, keyword: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(k, _)| k == keyword)
            .map(|&(_, factor)| factor)
    }

    /// Factor used when nothing matches.
    #[must_use]
    pub const fn default_factor(&self) -> f64 {
        self.default_factor
    }

    /// First keyword (in table order) that occurs anywhere in `text`.
    ///
    /// `text` is expected to be lowercase already.
    #[must_use]
    pub fn first_match(&self, text: &str) -> Option<(&str, f64)> {
        self.entries
            .iter()
            .find(|(keyword, _)| text.contains(keyword.as_str()))
            .map(|(keyword, factor)| (keyword.as_str(), *factor))
    }

    /// Number of entries, including `default`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
