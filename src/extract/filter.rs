//! Recursive descent over boolean filter trees.
//!
//! A filter node is a leaf `{member, operator, values?}`, a combinator
//! `{and: [...]}` / `{or: [...]}`, or any mix of the three; every present
//! form is processed. Trees come from a serialized payload, so they are
//! finite and acyclic and are walked with plain recursion.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::{Map, Value};

use crate::query::FilterValue;

/// Member → values collected while walking filters and segments.
pub type ValueMap = BTreeMap<String, BTreeSet<FilterValue>>;

const COMBINATORS: [&str; 2] = ["and", "or"];

/// Members referenced anywhere in a filter tree.
pub fn walk_filter(node: &Value) -> BTreeSet<String> {
    let mut members = BTreeSet::new();
    collect_members(node, &mut members);
    members
}

fn collect_members(node: &Value, members: &mut BTreeSet<String>) {
    let Value::Object(fields) = node else {
        return;
    };

    if let Some(Value::String(member)) = fields.get("member") {
        members.insert(member.clone());
    }
    for child in children(fields) {
        collect_members(child, members);
    }
}

/// Walk a filter tree, merging each leaf's `values` into `out`.
///
/// A leaf with absent or `null` values still registers its member with an
/// empty set. A scalar `values` counts as a single value.
pub fn walk_filter_with_values(node: &Value, out: &mut ValueMap) {
    let Value::Object(fields) = node else {
        return;
    };

    if let Some(Value::String(member)) = fields.get("member") {
        let values = out.entry(member.clone()).or_default();
        match fields.get("values") {
            None | Some(Value::Null) => {}
            Some(Value::Array(items)) => values.extend(items.iter().map(FilterValue::from_json)),
            Some(scalar) => {
                values.insert(FilterValue::from_json(scalar));
            }
        }
    }
    for child in children(fields) {
        walk_filter_with_values(child, out);
    }
}

/// Children of every `and`/`or` combinator on a node, in that order.
fn children(fields: &Map<String, Value>) -> impl Iterator<Item = &Value> {
    COMBINATORS
        .into_iter()
        .filter_map(move |key| fields.get(key).and_then(Value::as_array))
        .flatten()
}
