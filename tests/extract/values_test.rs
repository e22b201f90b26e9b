//! Integration tests for member/value extraction from filters and segments.

#[cfg(test)]
mod tests {
    use cube_utils::{extract_filters_members_with_values, FilterValue, MemberValues};
    use insta::assert_snapshot;
    use serde_json::json;

    fn row(member: &str, values: Option<Vec<FilterValue>>) -> MemberValues {
        MemberValues::new(member, values)
    }

    fn text(values: &[&str]) -> Option<Vec<FilterValue>> {
        Some(values.iter().map(|v| FilterValue::from(*v)).collect())
    }

    #[test]
    fn test_all_fields() {
        let payload = json!({
            "dimensions": ["test_a.city", "test_a.country", "test_a.state"],
            "measures": ["test_b.count"],
            "filters": [
                { "values": ["US"], "member": "test_a.country", "operator": "equals" }
            ],
            "segments": ["test_d.us_segment"],
            "timeDimensions": [{
                "dimension": "test_c.time",
                "dateRange": ["2021-01-01", "2021-12-31"],
                "granularity": "month"
            }]
        });

        assert_eq!(
            extract_filters_members_with_values(&payload).unwrap(),
            vec![
                row("test_a.country", text(&["US"])),
                row("test_d.us_segment", None),
            ]
        );
    }

    #[test]
    fn test_boolean_filters() {
        let payload = json!({
            "segments": [],
            "filters": [
                {
                    "or": [
                        {
                            "and": [
                                { "values": ["Corpus Christi"], "member": "test_a.city", "operator": "equals" },
                                { "member": "test_b.age_bucket", "operator": "equals", "values": ["Senior adult"] }
                            ]
                        },
                        { "member": "test_c.city", "operator": "equals", "values": ["Sacramento"] }
                    ]
                },
                { "or": [{ "member": "test_d.city", "operator": "set" }] }
            ]
        });

        assert_eq!(
            extract_filters_members_with_values(&payload).unwrap(),
            vec![
                row("test_a.city", text(&["Corpus Christi"])),
                row("test_b.age_bucket", text(&["Senior adult"])),
                row("test_c.city", text(&["Sacramento"])),
                row("test_d.city", None),
            ]
        );
    }

    #[test]
    fn test_pushdown_segment() {
        let payload = json!({
            "filters": [],
            "measures": [{
                "name": "count_case_when_",
                "expression": [
                    "internet_sales",
                    "return `COUNT(CASE WHEN (${internet_sales.salesterritorykey} = 1) THEN 1 END)`"
                ],
                "cubeName": "internet_sales",
                "expressionName": "count_case_when_"
            }],
            "segments": [{
                "expression": [
                    "internet_sales",
                    "return `CASE WHEN ((${internet_sales.salesterritorykey} = 1) OR (${internet_sales.salesterritorykey} = 9)) THEN TRUE END`"
                ],
                "groupingSet": null,
                "definition": "{\"cubeName\":\"internet_sales\",\"alias\":\"case_when_s_sale\",\"expr\":{\"type\":\"SqlFunction\",\"cubeParams\":[\"internet_sales\"],\"sql\":\"CASE WHEN ((${internet_sales.salesterritorykey} = 1) OR (${internet_sales.salesterritorykey} = 9)) THEN TRUE END\"},\"groupingSet\":null}",
                "cubeName": "internet_sales",
                "name": "case_when_s_sale",
                "expressionName": "case_when_s_sale"
            }]
        });

        assert_eq!(
            extract_filters_members_with_values(&payload).unwrap(),
            vec![row(
                "internet_sales.salesterritorykey",
                Some(vec![FilterValue::Integer(1), FilterValue::Integer(9)])
            )]
        );
    }

    #[test]
    fn test_empty_and_unknown_keys() {
        assert!(extract_filters_members_with_values(&json!({}))
            .unwrap()
            .is_empty());
        assert!(
            extract_filters_members_with_values(&json!({ "invalid": ["test_a.city"] }))
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_mixed_values_render_as_json() {
        let payload = json!({
            "filters": [
                { "member": "orders.status", "operator": "equals", "values": ["shipped", "new"] },
                { "member": "orders.amount", "operator": "gt", "values": [100, "50"] },
                { "member": "orders.id", "operator": "set" }
            ],
            "segments": [
                { "cubeName": "orders", "expressionName": "eu", "definition": "${orders.region_id} = `3`" }
            ]
        });
        let rows = extract_filters_members_with_values(&payload).unwrap();

        assert_snapshot!(
            serde_json::to_string(&rows).unwrap(),
            @r#"[{"member":"orders.amount","values":[100,"50"]},{"member":"orders.id","values":null},{"member":"orders.region_id","values":[3]},{"member":"orders.status","values":["new","shipped"]}]"#
        );
    }
}
