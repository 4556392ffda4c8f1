//! Cart input items.
//!
//! Cart payloads come from page scrapers and hand-written JSON, so every
//! per-item field is decoded leniently: missing or mistyped fields fall back
//! to defaults instead of failing the whole cart. Only the outer shape (the
//! cart must be a list of objects) is validated.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::CoreError;

/// Quantity used when the payload omits it or it cannot be coerced.
pub const DEFAULT_QUANTITY: i64 = 1;

/// A single grocery item as submitted by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawCartItem")]
pub struct CartItem {
    /// Display name as submitted (empty when absent).
    pub name: String,
    /// Raw quantity. Not yet clamped; the aggregator coerces values below 1.
    pub quantity: i64,
    /// Product barcode (UPC/EAN) used for external lookups.
    pub upc: Option<String>,
    /// Free-text, comma-separated ingredient list.
    pub ingredients: Option<String>,
}

impl Default for CartItem {
    fn default() -> Self {
        Self {
            name: String::new(),
            quantity: DEFAULT_QUANTITY,
            upc: None,
            ingredients: None,
        }
    }
}

impl CartItem {
    /// Create an item with just a name and quantity.
    #[must_use]
    pub fn named(name: impl Into<String>, quantity: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
            ..Self::default()
        }
    }

    /// Attach a product barcode.
    #[must_use]
    pub fn with_upc(mut self, upc: impl Into<String>) -> Self {
        self.upc = Some(upc.into());
        self
    }

    /// Attach a free-text ingredient list.
    #[must_use]
    pub fn with_ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.ingredients = Some(ingredients.into());
        self
    }
}

/// Wire shape of a cart item before coercion.
#[derive(Deserialize)]
struct RawCartItem {
    #[serde(default)]
    name: Option<Value>,
    #[serde(default)]
    quantity: Option<Value>,
    #[serde(default)]
    upc: Option<Value>,
    #[serde(default)]
    ingredients: Option<Value>,
}

impl From<RawCartItem> for CartItem {
    fn from(raw: RawCartItem) -> Self {
        Self {
            name: raw.name.as_ref().and_then(text_value).unwrap_or_default(),
            quantity: raw
                .quantity
                .as_ref()
                .and_then(coerce_quantity)
                .unwrap_or(DEFAULT_QUANTITY),
            upc: raw.upc.as_ref().and_then(text_value).filter(|s| !s.is_empty()),
            ingredients: raw
                .ingredients
                .as_ref()
                .and_then(text_value)
                .filter(|s| !s.is_empty()),
        }
    }
}

/// Strings pass through; numbers are rendered (barcodes are often sent as
/// JSON numbers). Anything else is treated as absent.
fn text_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Integer coercion: integers as-is, floats truncated toward zero, numeric
/// strings parsed, booleans as 0/1.
#[allow(clippy::cast_possible_truncation)]
fn coerce_quantity(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite())
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}

/// Extract the cart item list from a request payload.
///
/// Accepts either `{"cart": [...]}` or a bare array. A missing or `null`
/// `cart` key is an empty cart.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] if the cart is not a list or one of its
/// entries is not an object.
pub fn parse_cart(payload: Value) -> Result<Vec<CartItem>, CoreError> {
    let cart = match payload {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("cart") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items,
            Some(_) => return Err(CoreError::Validation("cart must be a list".into())),
        },
        Value::Null => Vec::new(),
        _ => return Err(CoreError::Validation("cart must be a list".into())),
    };

    cart.into_iter()
        .enumerate()
        .map(|(index, entry)| {
            if !entry.is_object() {
                return Err(CoreError::Validation(format!(
                    "cart item {index} must be an object"
                )));
            }
            Ok(serde_json::from_value(entry)?)
        })
        .collect()
}

/// Parse a JSON document and extract its cart item list.
///
/// # Errors
///
/// Returns [`CoreError::Json`] if `input` is not valid JSON, or any error
/// from [`parse_cart`].
pub fn parse_cart_str(input: &str) -> Result<Vec<CartItem>, CoreError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }
    parse_cart(serde_json::from_str(input)?)
}
