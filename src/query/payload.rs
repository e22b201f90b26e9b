//! Payload normalization and axis access.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{json_type_name, QueryError, QueryResult};

/// One of the five query axes that can reference members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Axis {
    #[serde(rename = "dimensions")]
    Dimensions,
    #[serde(rename = "measures")]
    Measures,
    #[serde(rename = "filters")]
    Filters,
    #[serde(rename = "segments")]
    Segments,
    #[serde(rename = "timeDimensions")]
    TimeDimensions,
}

impl Axis {
    /// Every axis, in payload order.
    pub const ALL: [Axis; 5] = [
        Axis::Dimensions,
        Axis::Measures,
        Axis::Filters,
        Axis::Segments,
        Axis::TimeDimensions,
    ];

    /// The axes that constrain rows rather than select columns.
    pub const FILTERING: [Axis; 2] = [Axis::Filters, Axis::Segments];

    /// Key of this axis in the JSON payload.
    pub fn key(self) -> &'static str {
        match self {
            Axis::Dimensions => "dimensions",
            Axis::Measures => "measures",
            Axis::Filters => "filters",
            Axis::Segments => "segments",
            Axis::TimeDimensions => "timeDimensions",
        }
    }

    /// Look up an axis by its payload key.
    pub fn from_key(key: &str) -> Option<Axis> {
        Axis::ALL.into_iter().find(|axis| axis.key() == key)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A normalized, read-only query payload.
///
/// Text payloads (Cube's metadata requests) normalize to an empty payload
/// that carries no members.
#[derive(Debug, Clone, Copy)]
pub struct Payload<'a> {
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> Payload<'a> {
    /// Normalize a raw payload value.
    ///
    /// Mappings are borrowed as-is, text becomes the empty payload, and any
    /// other JSON value is rejected.
    pub fn from_value(value: &'a Value) -> QueryResult<Self> {
        match value {
            Value::Object(fields) => Ok(Self {
                fields: Some(fields),
            }),
            Value::String(_) => Ok(Self::empty()),
            other => Err(QueryError::InvalidPayload {
                found: json_type_name(other),
            }),
        }
    }

    /// A payload with no axes.
    pub fn empty() -> Self {
        Self { fields: None }
    }

    /// Entries of an axis. Absent and `null` axes are empty.
    pub fn entries(&self, axis: Axis) -> QueryResult<&'a [Value]> {
        match self.fields.and_then(|fields| fields.get(axis.key())) {
            None | Some(Value::Null) => Ok(&[]),
            Some(Value::Array(entries)) => Ok(entries.as_slice()),
            Some(other) => Err(QueryError::InvalidAxis {
                axis: axis.key(),
                found: json_type_name(other),
            }),
        }
    }
}
