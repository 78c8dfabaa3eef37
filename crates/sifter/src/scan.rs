//! Linear predicate evaluation.
//!
//! Predicates that no trie can answer (exact, contains and the numeric
//! comparisons) scan the snapshot directly. Each function returns the set
//! of matching positions.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::value::{Element, Number};

/// Positions of text elements containing `sub` as a literal, case-sensitive
/// substring. An empty `sub` matches every text element.
pub fn contains(elements: &[Element], sub: &str) -> BTreeSet<usize> {
    text_positions(elements, |s| s.contains(sub))
}

/// Positions of every text element equal to `text`.
///
/// All duplicates are returned, not only the first occurrence, so exact
/// matching composes with `&` and `|` like every other predicate.
pub fn exact(elements: &[Element], text: &str) -> BTreeSet<usize> {
    text_positions(elements, |s| s == text)
}

/// Positions of numeric elements equal to `value`.
pub fn equal_number(elements: &[Element], value: Number) -> BTreeSet<usize> {
    numeric_positions(elements, value, Ordering::Equal)
}

/// Positions of numeric elements greater than `value`.
pub fn greater_than(elements: &[Element], value: Number) -> BTreeSet<usize> {
    numeric_positions(elements, value, Ordering::Greater)
}

/// Positions of numeric elements less than `value`.
pub fn less_than(elements: &[Element], value: Number) -> BTreeSet<usize> {
    numeric_positions(elements, value, Ordering::Less)
}

fn text_positions(elements: &[Element], matches: impl Fn(&str) -> bool) -> BTreeSet<usize> {
    elements
        .iter()
        .enumerate()
        .filter_map(|(position, element)| match element {
            Element::Text(s) if matches(s) => Some(position),
            _ => None,
        })
        .collect()
}

// NaN on either side compares as None and matches nothing.
fn numeric_positions(elements: &[Element], value: Number, wanted: Ordering) -> BTreeSet<usize> {
    elements
        .iter()
        .enumerate()
        .filter_map(|(position, element)| {
            let n = element.as_number()?;
            (n.compare(value)? == wanted).then_some(position)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[usize]) -> BTreeSet<usize> {
        items.iter().copied().collect()
    }

    fn mixed() -> Vec<Element> {
        vec![
            Element::from("apple"),
            Element::Integer(7),
            Element::from("7"),
            Element::Float(7.0),
            Element::from("apple"),
            Element::Float(2.5),
        ]
    }

    #[test]
    fn contains_is_literal_and_case_sensitive() {
        let elements = vec![
            Element::from("Hello"),
            Element::from("hello"),
            Element::from("a.c"),
            Element::from("abc"),
        ];
        assert_eq!(contains(&elements, "ello"), set(&[0, 1]));
        assert_eq!(contains(&elements, "He"), set(&[0]));
        assert_eq!(contains(&elements, "."), set(&[2]));
    }

    #[test]
    fn empty_substring_matches_all_text() {
        assert_eq!(contains(&mixed(), ""), set(&[0, 2, 4]));
    }

    #[test]
    fn exact_returns_every_duplicate() {
        assert_eq!(exact(&mixed(), "apple"), set(&[0, 4]));
        assert!(exact(&mixed(), "appl").is_empty());
    }

    #[test]
    fn text_is_never_coerced_to_number() {
        // "7" is text; only the integer and float sevens match.
        assert_eq!(equal_number(&mixed(), Number::I64(7)), set(&[1, 3]));
        assert!(!greater_than(&mixed(), Number::I64(0)).contains(&2));
    }

    #[test]
    fn numbers_never_match_text_predicates() {
        assert!(exact(&mixed(), "7").contains(&2));
        assert!(!exact(&mixed(), "7").contains(&1));
        assert!(!contains(&mixed(), "7").contains(&1));
    }

    #[test]
    fn comparisons_across_integer_and_float() {
        assert_eq!(greater_than(&mixed(), Number::F64(3.0)), set(&[1, 3]));
        assert_eq!(less_than(&mixed(), Number::I64(3)), set(&[5]));
        assert_eq!(equal_number(&mixed(), Number::F64(2.5)), set(&[5]));
    }

    #[test]
    fn nan_matches_nothing() {
        let elements = vec![Element::Float(f64::NAN), Element::Integer(1)];
        let nan = Number::F64(f64::NAN);
        assert!(equal_number(&elements, nan).is_empty());
        assert!(greater_than(&elements, nan).is_empty());
        assert!(less_than(&elements, nan).is_empty());

        assert_eq!(greater_than(&elements, Number::I64(0)), set(&[1]));
    }
}
