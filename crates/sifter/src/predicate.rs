//! Atomic match conditions.
//!
//! A [`Predicate`] is one token of a query after classification. Text
//! predicates apply to text elements only, numeric predicates to integer
//! and float elements only; nothing is ever coerced across kinds.

use std::fmt;

use crate::value::Number;

/// A single classified query token.
///
/// Operators by operand type:
/// - **Text**: `Exact` (`$text$`), `Prefix` (`$text`), `Suffix` (`text$`),
///   `Contains` (`*text`)
/// - **Number**: `GreaterThan` (`>n`), `LessThan` (`<n`), `EqualNumber` (`=n`)
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Text element equals the operand.
    Exact(String),
    /// Text element starts with the operand.
    Prefix(String),
    /// Text element ends with the operand.
    Suffix(String),
    /// Text element contains the operand.
    Contains(String),
    /// Numeric element is greater than the operand.
    GreaterThan(Number),
    /// Numeric element is less than the operand.
    LessThan(Number),
    /// Numeric element equals the operand.
    EqualNumber(Number),
}

impl Predicate {
    /// Classifies a single AND-segment.
    ///
    /// The token is trimmed first. The `$text$` form is tested before the
    /// single-`$` forms because it also satisfies both of them. Returns
    /// `None` for a token matching no form, or for a numeric form whose
    /// operand does not parse; callers drop such tokens.
    ///
    /// # Example
    ///
    /// ```
    /// use sifter::{Number, Predicate};
    ///
    /// assert_eq!(Predicate::classify("$app$"), Some(Predicate::Exact("app".into())));
    /// assert_eq!(Predicate::classify(" $app "), Some(Predicate::Prefix("app".into())));
    /// assert_eq!(Predicate::classify(">5"), Some(Predicate::GreaterThan(Number::I64(5))));
    /// assert_eq!(Predicate::classify(">five"), None);
    /// assert_eq!(Predicate::classify("%%%"), None);
    /// ```
    pub fn classify(token: &str) -> Option<Predicate> {
        let token = token.trim();

        if let Some(rest) = token.strip_prefix('$') {
            // A lone "$" is both the opening and closing marker.
            if token.len() == 1 {
                return Some(Predicate::Exact(String::new()));
            }
            return Some(match rest.strip_suffix('$') {
                Some(exact) => Predicate::Exact(exact.to_string()),
                None => Predicate::Prefix(rest.to_string()),
            });
        }
        if let Some(suffix) = token.strip_suffix('$') {
            return Some(Predicate::Suffix(suffix.to_string()));
        }
        if let Some(sub) = token.strip_prefix('*') {
            return Some(Predicate::Contains(sub.to_string()));
        }
        if let Some(operand) = token.strip_prefix('>') {
            return Number::parse(operand).map(Predicate::GreaterThan);
        }
        if let Some(operand) = token.strip_prefix('<') {
            return Number::parse(operand).map(Predicate::LessThan);
        }
        if let Some(operand) = token.strip_prefix('=') {
            return Number::parse(operand).map(Predicate::EqualNumber);
        }
        None
    }

    /// Returns `true` if this predicate is answered by a trie walk.
    pub fn is_trie_backed(&self) -> bool {
        matches!(self, Predicate::Prefix(_) | Predicate::Suffix(_))
    }

    /// Returns the display name of this predicate's operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            Predicate::Exact(_) => "exact",
            Predicate::Prefix(_) => "prefix",
            Predicate::Suffix(_) => "suffix",
            Predicate::Contains(_) => "contains",
            Predicate::GreaterThan(_) => "gt",
            Predicate::LessThan(_) => "lt",
            Predicate::EqualNumber(_) => "eq",
        }
    }
}

/// Formats the predicate back into query syntax.
impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Exact(s) => write!(f, "${}$", s),
            Predicate::Prefix(s) => write!(f, "${}", s),
            Predicate::Suffix(s) => write!(f, "{}$", s),
            Predicate::Contains(s) => write!(f, "*{}", s),
            Predicate::GreaterThan(n) => write!(f, ">{}", n),
            Predicate::LessThan(n) => write!(f, "<{}", n),
            Predicate::EqualNumber(n) => write!(f, "={}", n),
        }
    }
}
