//! Generic JSON-over-HTTP client.
//!
//! [`fetch_json`] performs one request with optional query parameters, bearer
//! auth and a client-side timeout, then decodes the body according to the
//! response `content-type`. Failures come back as [`FetchError`].

mod error;
mod fetch;
mod query;

pub use error::{FetchError, TIMEOUT_STATUS};
pub use fetch::{fetch_json, FetchConfig, FetchResponse, ParsedBody, TimeoutPolicy};
pub use query::{to_query_string, QueryParams, QueryValue};

pub use reqwest::{Client, Method, StatusCode};
