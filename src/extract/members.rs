//! Member extraction across query axes.

use std::collections::BTreeSet;

use serde_json::Value;
use tracing::{debug, trace};

use super::filter::walk_filter;
use crate::error::QueryResult;
use crate::expr::scan_members;
use crate::query::{Axis, Entry, Payload, PushdownMember};

/// Members referenced on the given axes of a payload.
///
/// Pushdown members resolve to the members their expression references,
/// falling back to `cubeName.expressionName` when nothing is found.
/// `filters` entries are walked as boolean trees.
pub fn extract_members(payload: &Value, axes: &[Axis]) -> QueryResult<BTreeSet<String>> {
    let payload = Payload::from_value(payload)?;
    let mut members = BTreeSet::new();

    for &axis in axes {
        for value in payload.entries(axis)? {
            match Entry::classify(axis, value) {
                Entry::Pushdown(pushdown) => members.extend(resolve_pushdown(&pushdown)),
                Entry::FilterNode(_) => members.extend(walk_filter(value)),
                Entry::TimeDimension { dimension } => {
                    members.insert(dimension.to_string());
                }
                Entry::Plain(member) => {
                    members.insert(member.to_string());
                }
                Entry::Mapping(_) | Entry::Other(_) => {
                    debug!(axis = %axis, entry = %value, "ignoring entry without a member reference");
                }
            }
        }
    }

    Ok(members)
}

/// Members referenced on every axis.
pub fn extract_all_members(payload: &Value) -> QueryResult<BTreeSet<String>> {
    extract_members(payload, &Axis::ALL)
}

/// Members referenced by `filters` and `segments`.
pub fn extract_filters_members(payload: &Value) -> QueryResult<BTreeSet<String>> {
    extract_members(payload, &Axis::FILTERING)
}

/// The members a pushdown entry stands for.
///
/// Expression fragments are scanned first; the definition is only consulted
/// when they reference nothing.
pub(crate) fn resolve_pushdown(pushdown: &PushdownMember<'_>) -> BTreeSet<String> {
    let mut found: BTreeSet<String> = pushdown
        .expression_texts()
        .flat_map(scan_members)
        .collect();

    if found.is_empty() {
        if let Some(definition) = pushdown.definition() {
            found.extend(scan_members(definition));
        }
    }

    if found.is_empty() {
        let name = pushdown.canonical_name();
        debug!(member = %name, "pushdown expression has no member references, using its name");
        found.insert(name);
    } else {
        trace!(members = ?found, "resolved pushdown member");
    }

    found
}
