//! Query-string extraction from request URLs.
//!
//! Cube's REST API carries the query payload as a URL-encoded `query`
//! parameter (`/cubejs-api/v1/load?query=%7B...%7D`). These helpers decode
//! the parameters and, when asked, parse that payload.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::{QueryError, QueryResult};

/// Base used to resolve relative URLs such as `/cubejs-api/v1/load?...`.
const BASE_URL: &str = "https://example.com";

/// A decoded parameter: a single value, or every value of a repeated name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Single(String),
    Multiple(Vec<String>),
}

impl ParamValue {
    fn push(&mut self, value: String) {
        match self {
            ParamValue::Single(first) => {
                let first = std::mem::take(first);
                *self = ParamValue::Multiple(vec![first, value]);
            }
            ParamValue::Multiple(values) => values.push(value),
        }
    }

    /// The first value in order of appearance.
    pub fn first(&self) -> &str {
        match self {
            ParamValue::Single(value) => value,
            ParamValue::Multiple(values) => values.first().map_or("", String::as_str),
        }
    }
}

/// Decoded query parameters of `url`.
///
/// Parameters with an empty value are dropped. A URL that cannot be parsed
/// yields an empty map.
pub fn extract_url_params(url: &str) -> BTreeMap<String, ParamValue> {
    let mut params = BTreeMap::new();

    let parsed = match Url::parse(BASE_URL).and_then(|base| base.join(url)) {
        Ok(parsed) => parsed,
        Err(e) => {
            debug!(url, error = %e, "unparseable URL");
            return params;
        }
    };

    for (key, value) in parsed.query_pairs() {
        if value.is_empty() {
            continue;
        }
        let value = value.into_owned();
        match params.get_mut(&*key) {
            Some(existing) => existing.push(value),
            None => {
                params.insert(key.into_owned(), ParamValue::Single(value));
            }
        }
    }

    params
}

/// The JSON payload in the `query` parameter of a request URL.
///
/// Returns `None` when the URL has no `query` parameter. A repeated `query`
/// uses its first value.
pub fn query_payload_from_url(url: &str) -> QueryResult<Option<Value>> {
    extract_url_params(url)
        .get("query")
        .map(|query| serde_json::from_str::<Value>(query.first()).map_err(QueryError::from))
        .transpose()
}
