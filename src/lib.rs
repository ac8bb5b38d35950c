//! Mock data locator library.
//!
//! Resolves a request (path, query, method) to the best-matching leaf of a
//! catalog whose file and directory names encode what they match.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod locator;
pub mod observability;
pub mod store;

pub use config::schema::MockConfig;
pub use http::MockServer;
pub use lifecycle::Shutdown;
pub use locator::{CandidateMatch, Locator, LocatorError, Request};
