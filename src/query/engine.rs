//! Query orchestration.
//!
//! Coordinates a query over an already-loaded document:
//! 1. Navigate to the target node by array path
//! 2. Require the node to be an array
//! 3. Keep object elements matching every filter, in order
//! 4. Truncate to the limit

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ToolError;
use crate::logging::structured::LogContext;

use super::navigator::navigate;
use super::predicate::{matches_all, Filter};

/// What to select from a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub array_path: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub filters: Vec<Filter>,
    /// Non-positive or absent means no truncation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Matching elements plus their count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub result: Vec<Value>,
    pub count: usize,
}

impl QueryResult {
    fn new(result: Vec<Value>) -> Self {
        let count = result.len();
        Self { result, count }
    }
}

/// Parse raw file content into a document tree.
pub fn parse_document(content: &str) -> Result<Value, ToolError> {
    serde_json::from_str(content).map_err(|e| ToolError::InvalidJson(e.to_string()))
}

/// Run `request` against `document`.
///
/// Fails only when the array path cannot be resolved or does not lead to an
/// array. Non-object elements are skipped silently.
pub fn query(
    document: &Value,
    request: &QueryRequest,
    ctx: &LogContext,
) -> Result<QueryResult, ToolError> {
    let target = navigate(document, &request.array_path)?;
    let elements = target.as_array().ok_or(ToolError::NotAnArray)?;

    let mut matched: Vec<Value> = elements
        .iter()
        .filter(|element| match element {
            Value::Object(item) => matches_all(item, &request.filters),
            _ => false,
        })
        .cloned()
        .collect();
    let matched_count = matched.len();

    if let Some(limit) = positive_limit(request.limit) {
        matched.truncate(limit);
    }

    log::debug!(
        "{} QUERY_COMPLETE scanned={} matched={} returned={}",
        ctx,
        elements.len(),
        matched_count,
        matched.len()
    );

    Ok(QueryResult::new(matched))
}

fn positive_limit(limit: Option<i64>) -> Option<usize> {
    limit
        .filter(|&n| n > 0)
        .map(|n| usize::try_from(n).unwrap_or(usize::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::predicate::FilterOp;
    use serde_json::json;

    fn ctx() -> LogContext {
        LogContext::new("test-request")
    }

    fn sample() -> Value {
        json!([{"id": "a", "t": "vc"}, {"id": "b", "t": "x"}])
    }

    #[test]
    fn test_eq_filter() {
        let request = QueryRequest {
            filters: vec![Filter::new("t", FilterOp::Eq, Some(json!("vc")))],
            ..Default::default()
        };
        let result = query(&sample(), &request, &ctx()).unwrap();
        assert_eq!(result.count, 1);
        assert_eq!(result.result, vec![json!({"id": "a", "t": "vc"})]);
    }

    #[test]
    fn test_neq_filter() {
        let request = QueryRequest {
            filters: vec![Filter::new("t", FilterOp::Neq, Some(json!("vc")))],
            ..Default::default()
        };
        let result = query(&sample(), &request, &ctx()).unwrap();
        assert_eq!(result.count, 1);
        assert_eq!(result.result, vec![json!({"id": "b", "t": "x"})]);
    }

    #[test]
    fn test_nested_array_path() {
        let doc = json!({"data": {"items": [{"id": 1}, {"id": 2}]}});
        let request = QueryRequest {
            array_path: vec!["data".to_string(), "items".to_string()],
            ..Default::default()
        };
        let result = query(&doc, &request, &ctx()).unwrap();
        assert_eq!(result.count, 2);

        let request = QueryRequest {
            array_path: vec!["data".to_string(), "missing".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            query(&doc, &request, &ctx()),
            Err(ToolError::ArrayPathNotFound)
        ));
    }

    #[test]
    fn test_not_an_array() {
        let doc = json!({"data": {"items": {"id": 1}}});
        let request = QueryRequest {
            array_path: vec!["data".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            query(&doc, &request, &ctx()),
            Err(ToolError::NotAnArray)
        ));
        assert!(matches!(
            query(&doc, &QueryRequest::default(), &ctx()),
            Err(ToolError::NotAnArray)
        ));
    }

    #[test]
    fn test_non_objects_skipped() {
        let doc = json!([1, "two", null, {"id": "a"}, [{"id": "nested"}], {"id": "b"}]);
        let result = query(&doc, &QueryRequest::default(), &ctx()).unwrap();
        assert_eq!(result.count, 2);
        assert_eq!(result.result, vec![json!({"id": "a"}), json!({"id": "b"})]);

        // Non-objects never match, even filters that accept absent fields.
        let request = QueryRequest {
            filters: vec![Filter::new("id", FilterOp::IsNull, None)],
            ..Default::default()
        };
        assert_eq!(query(&doc, &request, &ctx()).unwrap().count, 0);
    }

    #[test]
    fn test_limit() {
        let doc = json!([{"n": 1}, {"n": 2}, {"n": 3}]);
        let limited = |limit| QueryRequest {
            limit,
            ..Default::default()
        };

        let result = query(&doc, &limited(Some(2)), &ctx()).unwrap();
        assert_eq!(result.result, vec![json!({"n": 1}), json!({"n": 2})]);
        assert_eq!(result.count, 2);

        assert_eq!(query(&doc, &limited(Some(10)), &ctx()).unwrap().count, 3);
        assert_eq!(query(&doc, &limited(Some(0)), &ctx()).unwrap().count, 3);
        assert_eq!(query(&doc, &limited(Some(-1)), &ctx()).unwrap().count, 3);
        assert_eq!(query(&doc, &limited(None), &ctx()).unwrap().count, 3);
    }

    #[test]
    fn test_limit_applies_after_filtering() {
        let doc = json!([{"t": "x"}, {"t": "vc", "n": 1}, {"t": "x"}, {"t": "vc", "n": 2}]);
        let request = QueryRequest {
            filters: vec![Filter::new("t", FilterOp::Eq, Some(json!("vc")))],
            limit: Some(1),
            ..Default::default()
        };
        let result = query(&doc, &request, &ctx()).unwrap();
        assert_eq!(result.result, vec![json!({"t": "vc", "n": 1})]);
    }

    #[test]
    fn test_request_wire_shape() {
        let request: QueryRequest = serde_json::from_value(json!({
            "arrayPath": ["data"],
            "filters": [{"field": "t", "op": "eq", "value": "vc"}],
            "limit": 5
        }))
        .unwrap();
        assert_eq!(request.array_path, vec!["data".to_string()]);
        assert_eq!(request.filters[0].op, FilterOp::Eq);
        assert_eq!(request.limit, Some(5));

        let empty: QueryRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty, QueryRequest::default());
    }

    #[test]
    fn test_request_null_lists_are_empty() {
        let request: QueryRequest = serde_json::from_value(json!({
            "arrayPath": null,
            "filters": null,
            "limit": null
        }))
        .unwrap();
        assert_eq!(request, QueryRequest::default());
    }

    #[test]
    fn test_parse_document() {
        assert_eq!(parse_document("[1, 2]").unwrap(), json!([1, 2]));
        assert!(matches!(
            parse_document("{not json"),
            Err(ToolError::InvalidJson(_))
        ));
    }
}
