//! Per-level match scoring.
//!
//! # Responsibilities
//! - Score one catalog level (directory or leaf) against the request fragment
//! - Bind wildcard parameters (`:name`) to request values
//! - Fold a level's score into the accumulated path score
//!
//! # Weights
//! | criterion | exact | wildcard / optional |
//! |-----------|-------|---------------------|
//! | basename  | 20    | 10                  |
//! | method    | 10    | 5 (none declared)   |
//! | query key | 2     | 1                   |
//!
//! # Design Decisions
//! - Directory levels compare basenames only; a non-match scores 0
//! - Leaf levels zero the whole candidate on any mismatch
//! - The catalog side decides which query keys matter

use std::collections::BTreeMap;

use serde::Serialize;

use crate::locator::decoder::Pattern;

pub const EXACT_BASENAME: u32 = 20;
pub const WILDCARD_BASENAME: u32 = 10;
pub const EXACT_METHOD: u32 = 10;
pub const ANY_METHOD: u32 = 5;
pub const EXACT_QUERY: u32 = 2;
pub const WILDCARD_QUERY: u32 = 1;

const WILDCARD_PREFIX: char = ':';

/// Matcher input: a bare directory name or a structured leaf pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Pattern(Pattern),
}

impl Segment {
    pub fn basename(&self) -> &str {
        match self {
            Segment::Literal(s) => s,
            Segment::Pattern(p) => &p.basename,
        }
    }

    fn query(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Segment::Literal(_) => None,
            Segment::Pattern(p) => Some(&p.query),
        }
    }

    fn method(&self) -> Option<&str> {
        match self {
            Segment::Literal(_) => None,
            Segment::Pattern(p) => p.method.as_deref(),
        }
    }
}

impl From<&str> for Segment {
    fn from(s: &str) -> Self {
        Segment::Literal(s.to_string())
    }
}

impl From<Pattern> for Segment {
    fn from(p: Pattern) -> Self {
        Segment::Pattern(p)
    }
}

/// Accumulated score and wildcard bindings.
///
/// A weight of 0 means "no match" and carries no bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchState {
    pub weight: u32,
    pub params: BTreeMap<String, String>,
}

impl MatchState {
    pub fn is_match(&self) -> bool {
        self.weight > 0
    }

    /// Fold a deeper level into this one.
    ///
    /// Weights add; on a parameter name collision the deeper binding wins.
    pub fn combine(&self, level: MatchState) -> MatchState {
        let mut params = self.params.clone();
        params.extend(level.params);
        MatchState {
            weight: self.weight + level.weight,
            params,
        }
    }

    fn bind(&mut self, name: &str, value: &str) {
        self.params.insert(name.to_string(), value.to_string());
    }
}

/// Score `actual` (catalog side) against `expected` (request side).
pub fn match_level(actual: &Segment, expected: &Segment, is_leaf: bool) -> MatchState {
    let mut state = MatchState::default();
    let basename_matched = match_basename(actual.basename(), expected.basename(), &mut state);

    if !is_leaf {
        return state;
    }

    let mut mismatch = !basename_matched;

    if let Some(declared) = actual.query() {
        let empty = BTreeMap::new();
        let requested = expected.query().unwrap_or(&empty);
        for (key, value) in declared {
            match requested.get(key) {
                Some(got) if got == value => state.weight += EXACT_QUERY,
                Some(got) => match value.strip_prefix(WILDCARD_PREFIX) {
                    Some(name) => {
                        state.weight += WILDCARD_QUERY;
                        state.bind(name, got);
                    }
                    None => mismatch = true,
                },
                None => mismatch = true,
            }
        }
    }

    match actual.method() {
        None => state.weight += ANY_METHOD,
        Some(method) if Some(method) == expected.method() => state.weight += EXACT_METHOD,
        Some(_) => mismatch = true,
    }

    if mismatch {
        return MatchState::default();
    }
    state
}

fn match_basename(actual: &str, expected: &str, state: &mut MatchState) -> bool {
    if actual == expected {
        state.weight += EXACT_BASENAME;
        true
    } else if let Some(name) = actual.strip_prefix(WILDCARD_PREFIX) {
        state.weight += WILDCARD_BASENAME;
        state.bind(name, expected);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(basename: &str, query: &[(&str, &str)], method: Option<&str>) -> Segment {
        Segment::Pattern(Pattern {
            basename: basename.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            method: method.map(str::to_string),
        })
    }

    #[test]
    fn test_directory_exact_match() {
        let m = match_level(&"dirname".into(), &"dirname".into(), false);
        assert_eq!(m.weight, EXACT_BASENAME);
        assert!(m.params.is_empty());
    }

    #[test]
    fn test_directory_wildcard_match() {
        let m = match_level(&":blan".into(), &"dirname".into(), false);
        assert_eq!(m.weight, WILDCARD_BASENAME);
        assert_eq!(m.params["blan"], "dirname");
    }

    #[test]
    fn test_exact_beats_wildcard() {
        let exact = match_level(&"dirname".into(), &"dirname".into(), false);
        let wild = match_level(&":blan".into(), &"dirname".into(), false);
        assert!(exact.weight > wild.weight);

        let exact = match_level(&pattern("f", &[], None), &pattern("f", &[], None), true);
        let wild = match_level(&pattern(":f", &[], None), &pattern("f", &[], None), true);
        assert!(exact.weight > wild.weight);
    }

    #[test]
    fn test_directory_mismatch_scores_zero() {
        let m = match_level(&"other".into(), &"dirname".into(), false);
        assert_eq!(m, MatchState::default());
    }

    #[test]
    fn test_leaf_basename_wildcard() {
        let m = match_level(&pattern(":blan", &[], None), &pattern("filename", &[], None), true);
        assert_eq!(m.weight, WILDCARD_BASENAME + ANY_METHOD);
        assert_eq!(m.params["blan"], "filename");
    }

    #[test]
    fn test_leaf_basename_mismatch_zeroes() {
        let m = match_level(&pattern("a", &[], None), &pattern("b", &[], Some("GET")), true);
        assert_eq!(m, MatchState::default());
    }

    #[test]
    fn test_all_declared_query_keys_required() {
        let actual = pattern("filename", &[("key1", "value1"), ("key2", "value2")], None);

        let missing = pattern("filename", &[("key1", "value1")], None);
        assert_eq!(match_level(&actual, &missing, true).weight, 0);

        let differs = pattern(
            "filename",
            &[("key1", "value1"), ("key2", "value1"), ("key3", "value3")],
            None,
        );
        assert_eq!(match_level(&actual, &differs, true).weight, 0);

        let superset = pattern(
            "filename",
            &[("key1", "value1"), ("key2", "value2"), ("key3", "value3")],
            None,
        );
        let m = match_level(&actual, &superset, true);
        assert_eq!(m.weight, EXACT_BASENAME + 2 * EXACT_QUERY + ANY_METHOD);
    }

    #[test]
    fn test_query_wildcard_binds_request_value() {
        let actual = pattern("filename", &[("key1", "value1"), ("key2", ":blan")], None);
        let expected = pattern(
            "filename",
            &[("key1", "value1"), ("key2", "value1"), ("key3", "value3")],
            None,
        );
        let m = match_level(&actual, &expected, true);
        assert_eq!(m.weight, EXACT_BASENAME + EXACT_QUERY + WILDCARD_QUERY + ANY_METHOD);
        assert_eq!(m.params["blan"], "value1");
    }

    #[test]
    fn test_more_query_matches_win() {
        let expected = pattern(
            "filename",
            &[("key1", "value1"), ("key2", "value2"), ("key3", "value3")],
            None,
        );
        let one = pattern("filename", &[("key1", "value1")], None);
        let wild = pattern("filename", &[("key1", "value1"), ("key2", ":blan")], None);
        let both = pattern("filename", &[("key1", "value1"), ("key2", "value2")], None);

        let w1 = match_level(&one, &expected, true).weight;
        let w2 = match_level(&wild, &expected, true).weight;
        let w3 = match_level(&both, &expected, true).weight;
        assert!(w3 > w2);
        assert!(w2 > w1);
    }

    #[test]
    fn test_basename_outweighs_query() {
        let expected = pattern(
            "filename",
            &[("key1", "value1"), ("key2", "value2"), ("key3", "value3")],
            None,
        );
        let wild_name = pattern(":blan", &[("key1", "value1"), ("key2", "value2")], None);
        let exact_name = pattern("filename", &[("key1", "value1"), ("key2", ":blan")], None);
        assert!(
            match_level(&exact_name, &expected, true).weight
                > match_level(&wild_name, &expected, true).weight
        );
    }

    #[test]
    fn test_method_weights() {
        let expected = pattern("m", &[], Some("POST"));
        let none = match_level(&pattern("m", &[], None), &expected, true);
        let same = match_level(&pattern("m", &[], Some("POST")), &expected, true);
        let other = match_level(&pattern("m", &[], Some("GET")), &expected, true);

        assert_eq!(none.weight, EXACT_BASENAME + ANY_METHOD);
        assert_eq!(same.weight, EXACT_BASENAME + EXACT_METHOD);
        assert_eq!(other, MatchState::default());
    }

    #[test]
    fn test_mismatch_discards_bindings() {
        let actual = pattern(":id", &[("q", ":q")], Some("PUT"));
        let expected = pattern("7", &[("q", "x")], Some("GET"));
        let m = match_level(&actual, &expected, true);
        assert_eq!(m.weight, 0);
        assert!(m.params.is_empty());
    }

    #[test]
    fn test_combine_sums_and_deeper_wins() {
        let parent = MatchState {
            weight: 20,
            params: [("id".to_string(), "outer".to_string())].into(),
        };
        let level = MatchState {
            weight: 15,
            params: [
                ("id".to_string(), "inner".to_string()),
                ("x".to_string(), "1".to_string()),
            ]
            .into(),
        };
        let combined = parent.combine(level);
        assert_eq!(combined.weight, 35);
        assert_eq!(combined.params["id"], "inner");
        assert_eq!(combined.params["x"], "1");
        assert_eq!(parent.params["id"], "outer");
    }
}
