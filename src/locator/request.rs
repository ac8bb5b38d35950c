//! Normalized lookup request.

use std::collections::BTreeMap;

use percent_encoding::percent_decode_str;
use serde::Serialize;

use crate::locator::decoder::{parse_query, Pattern};

/// A request reduced to what the catalog matches on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Request {
    /// Decoded, non-empty path segments.
    pub path_segments: Vec<String>,
    /// Query parameters. Duplicate keys keep the last value.
    pub query: BTreeMap<String, String>,
    /// Method, compared case-sensitively.
    pub method: String,
}

impl Request {
    pub fn new<I, S>(path_segments: I, query: BTreeMap<String, String>, method: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path_segments: path_segments.into_iter().map(Into::into).collect(),
            query,
            method: method.into(),
        }
    }

    /// Build from a method and a `path[?query]` string.
    pub fn parse(method: impl Into<String>, path_and_query: &str) -> Self {
        let (path, query) = match path_and_query.split_once('?') {
            Some((path, qs)) => (path, parse_query(qs)),
            None => (path_and_query, BTreeMap::new()),
        };
        Self {
            path_segments: split_path(path),
            query,
            method: method.into(),
        }
    }

    /// Build from an HTTP request head.
    pub fn from_http<B>(req: &axum::http::Request<B>) -> Self {
        let uri = req.uri();
        Self {
            path_segments: split_path(uri.path()),
            query: uri.query().map(parse_query).unwrap_or_default(),
            method: req.method().as_str().to_string(),
        }
    }

    /// The leaf-level pattern for the final segment.
    pub(crate) fn leaf_pattern(&self, basename: &str) -> Pattern {
        Pattern {
            basename: basename.to_string(),
            query: self.query.clone(),
            method: Some(self.method.clone()),
        }
    }
}

fn split_path(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(|s| percent_decode_str(s).decode_utf8_lossy().into_owned())
        .collect()
}
