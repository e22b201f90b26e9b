//! Member/value extraction from filters and segments.
//!
//! Filters contribute their literal `values`. Segments have no values of
//! their own, except pushdown segments whose SQL embeds equality predicates
//! such as `${cube.key} = 1`; those literals are recovered and coerced.

use serde_json::Value;
use tracing::{debug, trace};

use super::filter::{walk_filter_with_values, ValueMap};
use crate::error::QueryResult;
use crate::expr::{scan_member_values, scan_members};
use crate::query::{Axis, Entry, FilterValue, MemberValues, Payload, PushdownMember};

/// `(member, values)` for every member of `filters` and `segments`.
///
/// Output is sorted by member. Each value list is de-duplicated and sorted;
/// members without any known value carry `None`.
pub fn extract_filters_members_with_values(payload: &Value) -> QueryResult<Vec<MemberValues>> {
    let payload = Payload::from_value(payload)?;
    let mut out = ValueMap::new();

    for node in payload.entries(Axis::Filters)? {
        walk_filter_with_values(node, &mut out);
    }

    for segment in payload.entries(Axis::Segments)? {
        match Entry::classify(Axis::Segments, segment) {
            Entry::Pushdown(pushdown) => collect_pushdown_segment(&pushdown, &mut out),
            Entry::Mapping(fields) => {
                let name = fields
                    .get("name")
                    .and_then(Value::as_str)
                    .filter(|name| !name.is_empty())
                    .or_else(|| fields.get("expressionName").and_then(Value::as_str))
                    .filter(|name| !name.is_empty());
                match name {
                    Some(name) => register(&mut out, name),
                    None => debug!(entry = %segment, "ignoring unnamed segment"),
                }
            }
            Entry::Plain(name) => register(&mut out, name),
            _ => debug!(entry = %segment, "ignoring segment without a member reference"),
        }
    }

    Ok(out
        .into_iter()
        .map(|(member, values)| {
            let values = (!values.is_empty()).then(|| values.into_iter().collect());
            MemberValues::new(member, values)
        })
        .collect())
}

/// Equality literals take precedence: members are only reference-scanned
/// when no `${member} = value` pair exists anywhere in the segment.
fn collect_pushdown_segment(pushdown: &PushdownMember<'_>, out: &mut ValueMap) {
    let texts = pushdown.sql_texts();

    if texts.is_empty() {
        register(out, &pushdown.canonical_name());
        return;
    }

    let pairs: Vec<(String, String)> = texts
        .iter()
        .flat_map(|text| scan_member_values(text))
        .collect();

    if pairs.is_empty() {
        for member in texts.iter().flat_map(|text| scan_members(text)) {
            register(out, &member);
        }
        return;
    }

    for (member, raw) in pairs {
        let value = FilterValue::from_sql_token(&raw);
        trace!(member = %member, raw = %raw, value = %value, "segment equality literal");
        out.entry(member).or_default().insert(value);
    }
}

fn register(out: &mut ValueMap, member: &str) {
    if !out.contains_key(member) {
        out.insert(member.to_string(), Default::default());
    }
}
