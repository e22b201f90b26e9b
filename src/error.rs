//! Error types for payload traversal.

use thiserror::Error;

/// Result type for extraction operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors that can occur while extracting references from a query payload.
///
/// Malformed fields *inside* entries are never errors: they fall through to
/// the default behavior of the extractor that reads them.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The top-level payload is neither a mapping nor text.
    #[error("payload must be an object or string, found {found}")]
    InvalidPayload { found: &'static str },

    /// An axis key holds something other than a sequence.
    #[error("`{axis}` must be an array, found {found}")]
    InvalidAxis { axis: &'static str, found: &'static str },

    /// A member identifier has no `cube.` prefix to derive a cube from.
    #[error("member `{0}` is not qualified with a cube name")]
    UnqualifiedMember(String),

    /// Embedded JSON (e.g. a URL `query` parameter) failed to parse.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Human-readable name of a JSON value's type, used in error messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
