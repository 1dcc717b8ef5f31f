//! Record attributes.
//!
//! A cube record is an open mapping: apart from the four meta keys
//! (`Nom`, `Element`, `Rang`, `Numero`) no attribute is declared ahead of
//! time. Values arrive as JSON scalars and keep their original shape so the
//! string form used for display and search stays faithful to the source.
//!
//! ## AttributeValue Types
//!
//! - `Text`: Strings (the common case, numbers are often quoted)
//! - `Int` / `Float`: Unquoted JSON numbers
//! - `Bool`: JSON booleans
//! - `Null`: JSON null
//! - `Nested`: Arrays and objects, kept verbatim
//!
//! The string form follows JavaScript `String()` conversion: floats switch to
//! exponent notation outside `[1e-6, 1e21)`, arrays join their items with
//! commas and objects read `[object Object]`.

use std::borrow::{Borrow, Cow};
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Key for accessing record attributes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeKey(pub String);

impl AttributeKey {
    /// Create a new attribute key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for AttributeKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AttributeKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AttributeKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The four attributes with fixed meaning.
///
/// Every other key of a record is a stat attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetaKey {
    /// Display name.
    Nom,
    /// Category.
    Element,
    /// Rarity tier label.
    Rang,
    /// Ordinal identifier, numeric-as-string.
    Numero,
}

impl MetaKey {
    /// All meta keys.
    pub const ALL: [MetaKey; 4] = [MetaKey::Nom, MetaKey::Element, MetaKey::Rang, MetaKey::Numero];

    /// The attribute name as it appears in the source data.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            MetaKey::Nom => "Nom",
            MetaKey::Element => "Element",
            MetaKey::Rang => "Rang",
            MetaKey::Numero => "Numero",
        }
    }

    /// Check whether an attribute name is one of the meta keys.
    #[must_use]
    pub fn is_meta(key: &str) -> bool {
        Self::ALL.iter().any(|meta| meta.as_str() == key)
    }
}

impl fmt::Display for MetaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value for a record attribute.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// JSON null.
    Null,
    /// JSON boolean.
    Bool(bool),
    /// Integral JSON number.
    Int(i64),
    /// Any other JSON number.
    Float(f64),
    /// JSON string.
    Text(String),
    /// JSON array or object.
    Nested(serde_json::Value),
}

impl AttributeValue {
    /// The string form used for display and search.
    ///
    /// `null` is empty. Numbers use their shortest round-trip digits.
    #[must_use]
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            AttributeValue::Null => Cow::Borrowed(""),
            AttributeValue::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            AttributeValue::Int(v) => Cow::Owned(v.to_string()),
            AttributeValue::Float(v) => Cow::Owned(float_text(*v)),
            AttributeValue::Text(s) => Cow::Borrowed(s),
            AttributeValue::Nested(v) => Cow::Owned(nested_text(v)),
        }
    }

    /// Whether the value counts as present.
    ///
    /// Null, `false`, zero numbers and the empty string are absent.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            AttributeValue::Null => false,
            AttributeValue::Bool(b) => *b,
            AttributeValue::Int(v) => *v != 0,
            AttributeValue::Float(v) => *v != 0.0 && !v.is_nan(),
            AttributeValue::Text(s) => !s.is_empty(),
            AttributeValue::Nested(_) => true,
        }
    }

    /// Whether the value deserves a stat line: present and not `"0"`.
    #[must_use]
    pub fn is_displayable(&self) -> bool {
        self.is_truthy() && self.to_text() != "0"
    }
}

/// Decimal form of a float, with exponent notation for very large and very
/// small magnitudes.
fn float_text(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }

    // `{:e}` yields the shortest round-trip digits as `d.ddde<exp>`.
    let scientific = format!("{:e}", v.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return v.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return v.to_string();
    };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let k = digits.len() as i32;
    // Position of the decimal point relative to the first digit.
    let n = exponent + 1;

    let mut text = String::new();
    if v < 0.0 {
        text.push('-');
    }
    if k <= n && n <= 21 {
        text.push_str(&digits);
        text.extend(std::iter::repeat('0').take((n - k) as usize));
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        text.push_str(int);
        text.push('.');
        text.push_str(frac);
    } else if -6 < n && n <= 0 {
        text.push_str("0.");
        text.extend(std::iter::repeat('0').take((-n) as usize));
        text.push_str(&digits);
    } else {
        let (first, rest) = digits.split_at(1);
        text.push_str(first);
        if !rest.is_empty() {
            text.push('.');
            text.push_str(rest);
        }
        text.push('e');
        text.push(if n > 0 { '+' } else { '-' });
        text.push_str(&(n - 1).abs().to_string());
    }
    text
}

/// String form of an array or object.
fn nested_text(value: &serde_json::Value) -> String {
    use serde_json::Value;

    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_i64() {
            Some(v) => v.to_string(),
            None => float_text(n.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(s) => s.clone(),
        // Null items inside an array join as empty strings.
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => nested_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

impl From<serde_json::Value> for AttributeValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => AttributeValue::Null,
            Value::Bool(b) => AttributeValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(v) => AttributeValue::Int(v),
                None => AttributeValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => AttributeValue::Text(s),
            nested @ (Value::Array(_) | Value::Object(_)) => AttributeValue::Nested(nested),
        }
    }
}

impl<'de> Deserialize<'de> for AttributeValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(Self::from)
    }
}

// Convenient From implementations
impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        AttributeValue::Text(v.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        AttributeValue::Text(v)
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        AttributeValue::Int(v)
    }
}

impl From<i32> for AttributeValue {
    fn from(v: i32) -> Self {
        AttributeValue::Int(i64::from(v))
    }
}

impl From<f64> for AttributeValue {
    fn from(v: f64) -> Self {
        AttributeValue::Float(v)
    }
}

impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        AttributeValue::Bool(v)
    }
}
