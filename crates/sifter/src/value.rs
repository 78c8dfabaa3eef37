//! Scalar element and numeric types.
//!
//! An [`Element`] is one entry of an indexed snapshot. Its kind is fixed
//! when the element is created, so every predicate dispatches on the tag
//! with a plain `match`.

use std::cmp::Ordering;
use std::fmt;

use serde::Deserialize;

/// A scalar value held in an index snapshot.
///
/// Deserializes untagged from JSON: strings become [`Element::Text`],
/// integers that fit `i64` become [`Element::Integer`], every other number
/// becomes [`Element::Float`]. Booleans, nulls, arrays and objects are
/// rejected.
///
/// # Example
///
/// ```
/// use sifter::Element;
///
/// let elements: Vec<Element> = serde_json::from_str(r#"["apple", 3, 2.5]"#).unwrap();
/// assert_eq!(elements[0], Element::from("apple"));
/// assert_eq!(elements[1], Element::Integer(3));
/// assert_eq!(elements[2], Element::Float(2.5));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Element {
    /// Signed integer value.
    Integer(i64),
    /// Floating point value.
    Float(f64),
    /// Text value. Only text elements are trie-indexed.
    Text(String),
}

impl Element {
    /// Returns `true` if this is a `Text` element.
    pub fn is_text(&self) -> bool {
        matches!(self, Element::Text(_))
    }

    /// Returns `true` if this is an `Integer` or `Float` element.
    pub fn is_number(&self) -> bool {
        matches!(self, Element::Integer(_) | Element::Float(_))
    }

    /// Extracts the text, if present.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Element::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the numeric value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Element::Integer(n) => Some(Number::I64(*n)),
            Element::Float(n) => Some(Number::F64(*n)),
            Element::Text(_) => None,
        }
    }

    /// Returns the name of this element's kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Integer(_) => "integer",
            Element::Float(_) => "float",
            Element::Text(_) => "text",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Integer(n) => write!(f, "{}", n),
            Element::Float(n) => write!(f, "{}", n),
            Element::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<&str> for Element {
    fn from(s: &str) -> Self {
        Element::Text(s.to_string())
    }
}

impl From<String> for Element {
    fn from(s: String) -> Self {
        Element::Text(s)
    }
}

impl From<i32> for Element {
    fn from(n: i32) -> Self {
        Element::Integer(n as i64)
    }
}

impl From<i64> for Element {
    fn from(n: i64) -> Self {
        Element::Integer(n)
    }
}

impl From<u32> for Element {
    fn from(n: u32) -> Self {
        Element::Integer(n as i64)
    }
}

impl From<f32> for Element {
    fn from(n: f32) -> Self {
        Element::Float(n as f64)
    }
}

impl From<f64> for Element {
    fn from(n: f64) -> Self {
        Element::Float(n)
    }
}

/// Numeric value used by comparison predicates.
///
/// Integers keep full `i64` precision when compared with each other;
/// comparisons across variants go through `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Parses a numeric operand.
    ///
    /// Surrounding whitespace is ignored. Integer syntax is tried first so
    /// large integers compare exactly; anything else `f64` accepts
    /// (exponents, `inf`, `NaN`) parses as a float.
    pub fn parse(s: &str) -> Option<Number> {
        let s = s.trim();
        if let Ok(n) = s.parse::<i64>() {
            return Some(Number::I64(n));
        }
        s.parse::<f64>().ok().map(Number::F64)
    }

    /// Converts the number to f64 for comparison.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Compares two numbers, handling mixed types.
    ///
    /// Returns `None` when either side is NaN.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(n) => write!(f, "{}", n),
            Number::F64(n) => write!(f, "{}", n),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::I64(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::I64(n as i64)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::F64(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_kind_checks() {
        assert!(Element::from("a").is_text());
        assert!(!Element::from("a").is_number());
        assert!(Element::Integer(1).is_number());
        assert!(Element::Float(1.5).is_number());
        assert_eq!(Element::Float(1.5).kind(), "float");
    }

    #[test]
    fn element_extractors() {
        assert_eq!(Element::from("hello").as_text(), Some("hello"));
        assert_eq!(Element::Integer(7).as_number(), Some(Number::I64(7)));
        assert_eq!(Element::Float(0.5).as_number(), Some(Number::F64(0.5)));

        // Wrong kind returns None, never a coercion
        assert_eq!(Element::from("7").as_number(), None);
        assert_eq!(Element::Integer(7).as_text(), None);
    }

    #[test]
    fn element_deserializes_untagged() {
        let parsed: Vec<Element> = serde_json::from_str(r#"["x", 1, -2, 3.5, 1e3]"#).unwrap();
        assert_eq!(
            parsed,
            vec![
                Element::from("x"),
                Element::Integer(1),
                Element::Integer(-2),
                Element::Float(3.5),
                Element::Float(1000.0),
            ]
        );
    }

    #[test]
    fn element_rejects_non_scalars() {
        assert!(serde_json::from_str::<Element>("true").is_err());
        assert!(serde_json::from_str::<Element>("null").is_err());
        assert!(serde_json::from_str::<Element>("[1]").is_err());
        assert!(serde_json::from_str::<Element>(r#"{"a": 1}"#).is_err());
    }

    #[test]
    fn number_parse() {
        assert_eq!(Number::parse("5"), Some(Number::I64(5)));
        assert_eq!(Number::parse(" -12 "), Some(Number::I64(-12)));
        assert_eq!(Number::parse("2.5"), Some(Number::F64(2.5)));
        assert_eq!(Number::parse("1e2"), Some(Number::F64(100.0)));
        assert_eq!(Number::parse("abc"), None);
        assert_eq!(Number::parse(""), None);
        assert_eq!(Number::parse("5x"), None);
    }

    #[test]
    fn number_comparisons() {
        assert_eq!(
            Number::I64(5).compare(Number::I64(10)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Number::I64(5).compare(Number::F64(5.0)),
            Some(Ordering::Equal)
        );
        assert_eq!(
            Number::F64(10.5).compare(Number::I64(10)),
            Some(Ordering::Greater)
        );
        // Exact for integers beyond f64 precision
        assert_eq!(
            Number::I64(i64::MAX).compare(Number::I64(i64::MAX - 1)),
            Some(Ordering::Greater)
        );
    }

    #[test]
    fn number_nan_comparison() {
        assert_eq!(Number::F64(f64::NAN).compare(Number::I64(1)), None);
        assert_eq!(Number::I64(1).compare(Number::F64(f64::NAN)), None);
    }
}
