//! Cross-extractor properties that must hold for any payload.

#[cfg(test)]
mod tests {
    use cube_utils::extract::cube_of;
    use cube_utils::{
        extract_all_members, extract_cubes, extract_filters_members,
        extract_filters_members_with_values, extract_members, Axis,
    };
    use serde_json::{json, Value};
    use std::collections::BTreeSet;

    fn payloads() -> Vec<Value> {
        vec![
            json!({}),
            json!("meta"),
            json!({ "dimensions": ["a.city"] }),
            json!({ "filters": ["a.city"] }),
            json!({
                "measures": ["orders.count", { "cubeName": "orders", "expressionName": "avg_total" }],
                "dimensions": ["users.city"],
                "segments": ["orders.completed"],
                "filters": [{
                    "or": [
                        { "and": [{ "member": "users.age", "operator": "gt", "values": ["30"] }] },
                        { "member": "orders.status", "operator": "equals", "values": ["new"] }
                    ]
                }],
                "timeDimensions": [{ "dimension": "orders.created_at", "granularity": "day" }]
            }),
            json!({
                "segments": [{
                    "cubeName": "s",
                    "expressionName": "seg",
                    "expression": ["s", "return `${s.key} = 1 OR ${s.other} = 'x'`"]
                }],
                "measures": [{
                    "cubeName": "t",
                    "expressionName": "e",
                    "expression": ["t", "return `MIN(${t.x})`"]
                }]
            }),
        ]
    }

    #[test]
    fn test_extractors_are_idempotent() {
        for payload in payloads() {
            assert_eq!(
                extract_all_members(&payload).unwrap(),
                extract_all_members(&payload).unwrap()
            );
            assert_eq!(
                extract_filters_members_with_values(&payload).unwrap(),
                extract_filters_members_with_values(&payload).unwrap()
            );
        }
    }

    #[test]
    fn test_cubes_are_member_prefixes() {
        for payload in payloads() {
            let expected: BTreeSet<String> = extract_all_members(&payload)
                .unwrap()
                .iter()
                .map(|m| cube_of(m).unwrap().to_string())
                .collect();
            assert_eq!(extract_cubes(&payload).unwrap(), expected, "{}", payload);
        }
    }

    #[test]
    fn test_filters_members_is_filtering_axes() {
        for payload in payloads() {
            assert_eq!(
                extract_filters_members(&payload).unwrap(),
                extract_members(&payload, &[Axis::Filters, Axis::Segments]).unwrap()
            );
        }
    }

    #[test]
    fn test_or_of_and_is_union_of_leaves() {
        let leaves = ["a.one", "b.two", "c.three", "d.four"];
        let mut tree = json!({ "member": leaves[0] });
        for (depth, leaf) in leaves.iter().enumerate().skip(1) {
            let leaf = json!({ "member": leaf, "operator": "set" });
            tree = if depth % 2 == 0 {
                json!({ "or": [{ "and": [tree] }, leaf] })
            } else {
                json!({ "and": [leaf, { "or": [tree] }] })
            };
        }
        let payload = json!({ "filters": [tree] });

        let expected: BTreeSet<String> = leaves.iter().map(|s| s.to_string()).collect();
        assert_eq!(extract_filters_members(&payload).unwrap(), expected);
    }

    #[test]
    fn test_value_less_members_are_null_not_empty() {
        for payload in payloads() {
            for row in extract_filters_members_with_values(&payload).unwrap() {
                if let Some(values) = &row.values {
                    assert!(!values.is_empty(), "{} has an empty value list", row.member);
                }
            }
        }
    }

    #[test]
    fn test_members_with_values_cover_filter_members() {
        for payload in payloads() {
            let with_values: BTreeSet<String> = extract_filters_members_with_values(&payload)
                .unwrap()
                .into_iter()
                .map(|row| row.member)
                .collect();
            assert_eq!(
                with_values,
                extract_filters_members(&payload).unwrap(),
                "{}",
                payload
            );
        }
    }
}
