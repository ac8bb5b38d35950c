//! Leaf name decoding.
//!
//! # Grammar
//! ```text
//! basename["?"querystring]["."METHOD]"."ext
//! ```
//!
//! # Design Decisions
//! - The extension is stripped unconditionally and never inspected
//! - A method token must contain no lower-case letters; otherwise it stays
//!   part of the basename (this is how dotted basenames survive)
//! - Query values are kept verbatim, including a leading `:`

use std::collections::BTreeMap;

use serde::Serialize;

use crate::locator::error::{LocatorError, Result};

/// A structured match pattern, decoded from a leaf name or built from a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Pattern {
    /// Path-segment component. A leading `:` marks a capturing wildcard.
    pub basename: String,
    /// Query pattern. Empty when the name carries no `?` section.
    pub query: BTreeMap<String, String>,
    /// Method constraint, if declared.
    pub method: Option<String>,
}

impl Pattern {
    /// Pattern with only a basename.
    pub fn basename(basename: impl Into<String>) -> Self {
        Self {
            basename: basename.into(),
            ..Self::default()
        }
    }
}

/// Decode an encoded leaf name into a [`Pattern`].
pub fn decode(name: &str) -> Result<Pattern> {
    let (stem, _ext) = name
        .rsplit_once('.')
        .ok_or_else(|| LocatorError::MalformedLeafName(name.to_string()))?;

    let (rest, method) = match stem.rsplit_once('.') {
        Some((head, token)) if is_method_token(token) => (head, Some(token.to_string())),
        _ => (stem, None),
    };

    let (basename, query) = match rest.rsplit_once('?') {
        Some((basename, qs)) => (basename, parse_query(qs)),
        None => (rest, BTreeMap::new()),
    };

    Ok(Pattern {
        basename: basename.to_string(),
        query,
        method,
    })
}

/// Parse a flat `k=v&k2=v2` string. Duplicate keys: last one wins.
pub fn parse_query(qs: &str) -> BTreeMap<String, String> {
    url::form_urlencoded::parse(qs.as_bytes())
        .into_owned()
        .collect()
}

fn is_method_token(token: &str) -> bool {
    token.to_uppercase() == token
}
