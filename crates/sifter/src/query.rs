//! Query parsing.
//!
//! A raw query string is split on `|` into OR-groups, and each OR-group on
//! `&` into AND-segments. Every segment is classified with
//! [`Predicate::classify`]; segments that classify as nothing are dropped.
//!
//! ```text
//! query      := or_group ('|' or_group)*
//! or_group   := predicate ('&' predicate)*
//! ```
//!
//! Parsing is best-effort and never fails. A group whose segments were all
//! dropped stays in the query as an empty group, and an empty group
//! matches nothing when evaluated.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::predicate::Predicate;

/// Characters whose presence marks a lookup key as a query.
pub const QUERY_CHARS: [char; 6] = ['*', '$', '>', '<', '|', '&'];

/// Predicates combined by intersection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AndGroup {
    predicates: Vec<Predicate>,
}

impl AndGroup {
    /// Creates a group from already classified predicates.
    pub fn new(predicates: Vec<Predicate>) -> Self {
        AndGroup { predicates }
    }

    /// Returns the predicates in query order.
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Returns `true` if no predicate in this group survived parsing.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

/// A parsed query: AND-groups combined by union.
///
/// # Example
///
/// ```
/// use sifter::{Predicate, Query};
///
/// let query = Query::parse("$app & *e | ana$ | %%%");
/// assert_eq!(query.groups().len(), 3);
/// assert_eq!(query.groups()[0].predicates().len(), 2);
/// assert_eq!(query.groups()[1].predicates(), &[Predicate::Suffix("ana".into())]);
/// assert!(query.groups()[2].is_empty());
/// assert_eq!(query.dropped(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    groups: Vec<AndGroup>,
    dropped: usize,
}

impl Query {
    /// Parses a raw query string.
    pub fn parse(raw: &str) -> Self {
        let mut dropped = 0;
        let groups = raw
            .split('|')
            .map(|or_group| {
                let predicates = or_group
                    .split('&')
                    .filter_map(|segment| {
                        let predicate = Predicate::classify(segment);
                        if predicate.is_none() {
                            dropped += 1;
                        }
                        predicate
                    })
                    .collect();
                AndGroup::new(predicates)
            })
            .collect();

        Query { groups, dropped }
    }

    /// Returns the OR-groups in query order.
    pub fn groups(&self) -> &[AndGroup] {
        &self.groups
    }

    /// Returns the number of segments dropped during parsing.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Returns `true` if no predicate survived parsing, in any group.
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(AndGroup::is_empty)
    }
}

impl FromStr for Query {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Query::parse(s))
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            for (j, predicate) in group.predicates.iter().enumerate() {
                if j > 0 {
                    f.write_str(" & ")?;
                }
                write!(f, "{}", predicate)?;
            }
        }
        Ok(())
    }
}

/// Returns `true` if `key` contains any query operator character.
///
/// Collections that accept both direct keys and queries through the same
/// lookup use this to route: `*`, `$`, `>`, `<`, `|` and `&` mark a query.
/// `=` alone does not, so a plain key such as `"a=b"` stays a key.
pub fn looks_like_query(key: &str) -> bool {
    key.contains(&QUERY_CHARS[..])
}

/// Routing decision for a lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// The key should be evaluated as a query.
    Query(&'a str),
    /// The key should be used for direct access.
    Key(&'a str),
}

impl<'a> Lookup<'a> {
    /// Routes `key` by [`looks_like_query`].
    pub fn classify(key: &'a str) -> Self {
        if looks_like_query(key) {
            Lookup::Query(key)
        } else {
            Lookup::Key(key)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Number;

    #[test]
    fn single_predicate_query() {
        let query = Query::parse("$app");
        assert_eq!(query.groups().len(), 1);
        assert_eq!(
            query.groups()[0].predicates(),
            &[Predicate::Prefix("app".into())]
        );
        assert_eq!(query.dropped(), 0);
    }

    #[test]
    fn and_within_or_groups() {
        let query = Query::parse(">1 & <9 | =20");
        assert_eq!(query.groups().len(), 2);
        assert_eq!(
            query.groups()[0].predicates(),
            &[
                Predicate::GreaterThan(Number::I64(1)),
                Predicate::LessThan(Number::I64(9)),
            ]
        );
        assert_eq!(
            query.groups()[1].predicates(),
            &[Predicate::EqualNumber(Number::I64(20))]
        );
    }

    #[test]
    fn invalid_segments_are_dropped_per_group() {
        let query = Query::parse("$app & %%% | >x");
        assert_eq!(query.groups()[0].predicates().len(), 1);
        assert!(query.groups()[1].is_empty());
        assert_eq!(query.dropped(), 2);
        assert!(!query.is_empty());
    }

    #[test]
    fn all_invalid_query_is_empty() {
        let query = Query::parse("%%% | & | ");
        assert_eq!(query.groups().len(), 3);
        assert!(query.is_empty());
    }

    #[test]
    fn empty_string_yields_one_empty_group() {
        let query = Query::parse("");
        assert_eq!(query.groups().len(), 1);
        assert!(query.is_empty());
        assert_eq!(query.dropped(), 1);
    }

    #[test]
    fn from_str_matches_parse() {
        let parsed: Query = "*an | $gr".parse().unwrap();
        assert_eq!(parsed, Query::parse("*an | $gr"));
    }

    #[test]
    fn display_normalizes_spacing() {
        let query = Query::parse("$app&*e|ana$|junk");
        assert_eq!(query.to_string(), "$app & *e | ana$ | ");
    }

    #[test]
    fn lookup_routing() {
        assert!(looks_like_query("$app"));
        assert!(looks_like_query("a|b"));
        assert!(looks_like_query(">3"));
        assert!(!looks_like_query("plain_key"));
        assert!(!looks_like_query("=3"));

        assert_eq!(Lookup::classify("*x"), Lookup::Query("*x"));
        assert_eq!(Lookup::classify("name"), Lookup::Key("name"));
    }
}
