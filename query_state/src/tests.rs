//! Query state tests

use crate::{Component, Identifier, QueryBuilder, QueryState, QueryStateError, SortOrder};
use serde_json::json;

// ========================================
// Component ordering
// ========================================

#[test]
fn test_component_order_is_fixed() {
    let names: Vec<&str> = Component::ORDERED.iter().map(|c| c.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "wheres",
            "limit",
            "offset",
            "page",
            "orders",
            "ids",
            "columns",
            "include",
            "searchText",
            "aggregationParameters",
            "rawQuery",
        ]
    );
    assert_eq!(Component::ORDERED.last(), Some(&Component::RawQuery));
}

#[test]
fn test_component_from_name() {
    assert_eq!(Component::from_name("searchText"), Some(Component::SearchText));
    assert_eq!(Component::from_name("rawQuery"), Some(Component::RawQuery));
    assert_eq!(Component::from_name("search_text"), None);
    assert_eq!(Component::Ids.to_string(), "ids");
}

// ========================================
// Presence
// ========================================

#[test]
fn test_empty_values_count_as_present() {
    let state = QueryState {
        columns: Some(vec![]),
        search_text: Some(String::new()),
        ..QueryState::default()
    };

    assert!(state.has(Component::Columns));
    assert!(state.has(Component::SearchText));
    assert!(!state.has(Component::Limit));
    assert_eq!(
        state.present_components(),
        vec![Component::Columns, Component::SearchText]
    );
}

// ========================================
// Builder
// ========================================

#[test]
fn test_builder_accumulates_state() {
    let state = QueryBuilder::new()
        .select(["id", "title"])
        .add_select("artist")
        .include(["artist"])
        .include(["gallery"])
        .ids([1i64, 2])
        .where_clause(json!({"status": "active"}))
        .order_by("title", SortOrder::Asc)
        .order_by("date", SortOrder::Desc)
        .for_page(3, 25)
        .offset(50)
        .search("monet")
        .aggregate("types", json!({"terms": {"field": "type"}}))
        .raw("fields", json!("id"))
        .build();

    assert_eq!(
        state.columns,
        Some(vec!["id".to_string(), "title".to_string(), "artist".to_string()])
    );
    assert_eq!(
        state.include,
        Some(vec!["artist".to_string(), "gallery".to_string()])
    );
    assert_eq!(state.ids, Some(vec![Identifier::from(1i64), Identifier::from(2i64)]));
    assert_eq!(state.wheres, Some(json!([{"status": "active"}])));
    assert_eq!(state.orders, Some(json!([{"title": "asc"}, {"date": "desc"}])));
    assert_eq!(state.page, Some(3));
    assert_eq!(state.limit, Some(25));
    assert_eq!(state.offset, Some(50));
    assert_eq!(state.search_text.as_deref(), Some("monet"));
    assert_eq!(
        state.aggregation_parameters.as_ref().and_then(|a| a.get("types")),
        Some(&json!({"terms": {"field": "type"}}))
    );
    assert_eq!(
        state.raw_query.as_ref().and_then(|r| r.get("fields")),
        Some(&json!("id"))
    );
}

#[test]
fn test_builder_order_by_after_opaque_orders() {
    let state = QueryBuilder::new()
        .orders(json!("title"))
        .order_by("date", SortOrder::Desc)
        .build();

    assert_eq!(state.orders, Some(json!([{"date": "desc"}])));
}

#[test]
fn test_builder_where_clause_after_opaque_wheres() {
    let state = QueryBuilder::new()
        .wheres(json!("status = 1"))
        .where_clause(json!({"year": 1900}))
        .build();
    assert_eq!(state.wheres, Some(json!([{"year": 1900}])));

    let state = QueryBuilder::new().wheres(json!("status = 1")).build();
    assert_eq!(state.wheres, Some(json!("status = 1")));
}

#[test]
fn test_mixed_identifiers() {
    let state = QueryBuilder::new()
        .ids(vec![Identifier::from(7i64), Identifier::from("abc")])
        .build();

    let rendered: Vec<String> = state
        .ids
        .unwrap_or_default()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(rendered, vec!["7", "abc"]);
}

// ========================================
// Untyped input
// ========================================

#[test]
fn test_from_value_reads_components() {
    let state = QueryState::from_value(json!({
        "limit": 10,
        "columns": ["a", "b"],
        "ids": [1, "two"],
        "searchText": "water lilies",
        "orders": {"date": "desc"},
        "rawQuery": {"limit": 99},
        "wheres": [["x", "=", 1]],
        "unknown": true,
        "page": null
    }))
    .unwrap();

    assert_eq!(state.limit, Some(10));
    assert_eq!(state.columns, Some(vec!["a".to_string(), "b".to_string()]));
    assert_eq!(
        state.ids,
        Some(vec![Identifier::from(1i64), Identifier::Str("two".to_string())])
    );
    assert_eq!(state.search_text.as_deref(), Some("water lilies"));
    assert_eq!(state.orders, Some(json!({"date": "desc"})));
    assert_eq!(state.wheres, Some(json!([["x", "=", 1]])));
    assert!(state.page.is_none());
}

#[test]
fn test_from_value_keeps_any_wheres_shape() {
    for wheres in [
        json!("status = 1"),
        json!([{"column": "status", "operator": "=", "value": 1, "boolean": "and"}]),
        json!({"status": 1}),
        json!(false),
    ] {
        let state = QueryState::from_value(json!({"wheres": wheres.clone()})).unwrap();
        assert_eq!(state.wheres, Some(wheres));
    }
}

#[test]
fn test_from_value_accepts_wide_numeric_ids() {
    let state = QueryState::from_value(json!({"ids": [u64::MAX, 1.5, -3]})).unwrap();

    let rendered: Vec<String> = state
        .ids
        .unwrap_or_default()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(rendered, vec!["18446744073709551615", "1.5", "-3"]);
}

#[test]
fn test_identifier_from_unsigned() {
    assert_eq!(Identifier::from(u64::MAX).to_string(), "18446744073709551615");
    assert_eq!(Identifier::from(4u32), Identifier::from(4i64));
}

#[test]
fn test_from_value_names_malformed_component() {
    let err = QueryState::from_value(json!({"columns": "a,b"})).unwrap_err();
    match err {
        QueryStateError::ComponentType { component, .. } => {
            assert_eq!(component, Component::Columns)
        }
        other => panic!("unexpected error: {other}"),
    }

    let err = QueryState::from_value(json!({"limit": -1})).unwrap_err();
    assert!(matches!(
        err,
        QueryStateError::ComponentType {
            component: Component::Limit,
            ..
        }
    ));

    let err = QueryState::from_value(json!({"rawQuery": [1, 2]})).unwrap_err();
    assert!(err.to_string().contains("rawQuery"));
}

#[test]
fn test_from_value_rejects_non_object() {
    let err = QueryState::from_value(json!(["limit", 10])).unwrap_err();
    assert!(matches!(err, QueryStateError::NotAnObject("array")));
}

#[test]
fn test_state_serializes_camel_case() {
    let state = QueryBuilder::new().search("x").build();
    let value = serde_json::to_value(&state).unwrap();
    assert_eq!(value["searchText"], json!("x"));
}
