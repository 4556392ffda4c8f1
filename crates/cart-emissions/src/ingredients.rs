//! Ingredient list tokenizer.

/// Split a comma-separated ingredient list into normalized tokens.
///
/// Each token is trimmed, lowercased, and stripped of `_` (Open Food Facts
/// wraps allergens as `_milk_`). Empty input yields no tokens; empty
/// segments between commas are kept as empty tokens, which match nothing.
#[must_use]
pub fn parse_ingredients(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(',')
        .map(|token| token.trim().to_lowercase().replace('_', ""))
        .collect()
}
