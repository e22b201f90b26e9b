//! Classification of axis entries.

use serde_json::{Map, Value};

use super::payload::Axis;

/// A single axis entry, classified once by shape.
///
/// Pushdown detection takes precedence on every axis: an entry carrying both
/// `cubeName` and `expressionName` is a [`PushdownMember`] no matter what
/// else it holds.
#[derive(Debug, Clone, Copy)]
pub enum Entry<'a> {
    /// A `"cube.member"` reference.
    Plain(&'a str),

    /// A `timeDimensions` entry; date range and granularity are ignored.
    TimeDimension { dimension: &'a str },

    /// A member synthesized from an inline expression.
    Pushdown(PushdownMember<'a>),

    /// A leaf or boolean combinator under `filters`. Non-mapping `filters`
    /// entries are [`Entry::Other`].
    FilterNode(&'a Map<String, Value>),

    /// Any other mapping (e.g. a named segment object).
    Mapping(&'a Map<String, Value>),

    /// Anything else; carries no member.
    Other(&'a Value),
}

impl<'a> Entry<'a> {
    /// Classify an entry found on `axis`.
    pub fn classify(axis: Axis, value: &'a Value) -> Self {
        match value {
            Value::String(_) if axis == Axis::Filters => Entry::Other(value),
            Value::String(member) => Entry::Plain(member),
            Value::Object(fields) => {
                if let Some(pushdown) = PushdownMember::from_fields(fields) {
                    return Entry::Pushdown(pushdown);
                }
                match axis {
                    Axis::Filters => Entry::FilterNode(fields),
                    Axis::TimeDimensions => match fields.get("dimension") {
                        Some(Value::String(dimension)) => Entry::TimeDimension { dimension },
                        _ => Entry::Mapping(fields),
                    },
                    _ => Entry::Mapping(fields),
                }
            }
            other => Entry::Other(other),
        }
    }
}

/// A pushdown member: `{cubeName, expressionName, expression?, definition?}`.
///
/// `expression` is a lambda encoding (`["cube", "return `SQL`"]`) and
/// `definition` a JSON string describing the same expression. Both embed
/// the underlying member references as `${cube.member}`.
#[derive(Debug, Clone, Copy)]
pub struct PushdownMember<'a> {
    cube_name: &'a Value,
    expression_name: &'a Value,
    expression: Option<&'a [Value]>,
    definition: Option<&'a str>,
}

impl<'a> PushdownMember<'a> {
    /// Read a pushdown member out of a mapping, if it is one.
    pub fn from_fields(fields: &'a Map<String, Value>) -> Option<Self> {
        let cube_name = fields.get("cubeName")?;
        let expression_name = fields.get("expressionName")?;

        let expression = match fields.get("expression") {
            Some(Value::Array(parts)) => Some(parts.as_slice()),
            _ => None,
        };
        let definition = fields.get("definition").and_then(Value::as_str);

        Some(Self {
            cube_name,
            expression_name,
            expression,
            definition,
        })
    }

    /// The synthetic `cubeName.expressionName` identifier.
    pub fn canonical_name(&self) -> String {
        format!(
            "{}.{}",
            render_name(self.cube_name),
            render_name(self.expression_name)
        )
    }

    /// Text fragments of the `expression` field. Non-text elements are skipped.
    pub fn expression_texts(&self) -> impl Iterator<Item = &'a str> {
        self.expression
            .unwrap_or_default()
            .iter()
            .filter_map(Value::as_str)
    }

    /// The `definition` field, when it is text.
    pub fn definition(&self) -> Option<&'a str> {
        self.definition
    }

    /// All texts that may embed SQL: expression fragments, then the definition.
    pub fn sql_texts(&self) -> Vec<&'a str> {
        self.expression_texts().chain(self.definition).collect()
    }
}

fn render_name(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
