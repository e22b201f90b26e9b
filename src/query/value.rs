//! Scalar values collected from filters and segments.

use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

/// A value a member is filtered by.
///
/// Values are ordered by variant first (`Null < Bool < Integer < Float <
/// Text < Structured`) and natively within a variant, so a mixed set of
/// coerced integers and text always sorts the same way.
#[derive(Debug, Clone)]
pub enum FilterValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    /// Compact JSON of an array or object element.
    Structured(String),
}

impl FilterValue {
    /// Convert a JSON filter value.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => FilterValue::Null,
            Value::Bool(b) => FilterValue::Bool(*b),
            Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => FilterValue::Integer(i),
                (None, Some(f)) if n.is_f64() => FilterValue::Float(f),
                // u64 above i64::MAX: keep the exact digits.
                _ => FilterValue::Structured(n.to_string()),
            },
            Value::String(s) => FilterValue::Text(s.clone()),
            structured => FilterValue::Structured(structured.to_string()),
        }
    }

    /// Coerce a raw token scanned out of SQL text.
    ///
    /// One layer of surrounding backticks is removed, then the leading
    /// base-10 integer is read (`1,` and `9::int` are both integers). A
    /// token without leading digits keeps its raw text, backticks included.
    pub fn from_sql_token(raw: &str) -> Self {
        match leading_integer(strip_backticks(raw)) {
            Some(i) => FilterValue::Integer(i),
            None => FilterValue::Text(raw.to_string()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            FilterValue::Null => 0,
            FilterValue::Bool(_) => 1,
            FilterValue::Integer(_) => 2,
            FilterValue::Float(_) => 3,
            FilterValue::Text(_) => 4,
            FilterValue::Structured(_) => 5,
        }
    }
}

/// Optional sign followed by the leading ASCII digit run.
fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let sign_len = usize::from(text.starts_with(['+', '-']));
    let digits = text[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    text[..sign_len + digits].parse().ok()
}

fn strip_backticks(raw: &str) -> &str {
    if raw.len() >= 2 && raw.starts_with('`') && raw.ends_with('`') {
        &raw[1..raw.len() - 1]
    } else {
        raw
    }
}

impl Ord for FilterValue {
    fn cmp(&self, other: &Self) -> Ordering {
        use FilterValue::*;

        match (self, other) {
            (Null, Null) => Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Text(a), Text(b)) | (Structured(a), Structured(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for FilterValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FilterValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FilterValue {}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Integer(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<FilterValue> for Value {
    fn from(value: FilterValue) -> Self {
        match value {
            FilterValue::Null => Value::Null,
            FilterValue::Bool(b) => Value::Bool(b),
            FilterValue::Integer(i) => Value::from(i),
            FilterValue::Float(f) => Value::from(f),
            FilterValue::Text(s) => Value::String(s),
            FilterValue::Structured(json) => {
                serde_json::from_str(&json).unwrap_or(Value::String(json))
            }
        }
    }
}

impl Serialize for FilterValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FilterValue::Null => serializer.serialize_unit(),
            FilterValue::Bool(b) => serializer.serialize_bool(*b),
            FilterValue::Integer(i) => serializer.serialize_i64(*i),
            FilterValue::Float(f) => serializer.serialize_f64(*f),
            FilterValue::Text(s) => serializer.serialize_str(s),
            FilterValue::Structured(_) => Value::from(self.clone()).serialize(serializer),
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Null => f.write_str("null"),
            FilterValue::Bool(b) => write!(f, "{}", b),
            FilterValue::Integer(i) => write!(f, "{}", i),
            FilterValue::Float(x) => write!(f, "{}", x),
            FilterValue::Text(s) | FilterValue::Structured(s) => f.write_str(s),
        }
    }
}

/// A filtered member and the values it is compared against.
///
/// `values` is `None` when no literal value is known, never an empty list.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct MemberValues {
    pub member: String,
    pub values: Option<Vec<FilterValue>>,
}

impl MemberValues {
    pub fn new(member: impl Into<String>, values: Option<Vec<FilterValue>>) -> Self {
        Self {
            member: member.into(),
            values,
        }
    }
}
