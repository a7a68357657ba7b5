//! Filter predicates.
//!
//! A filter names a top-level field, an operator and an optional operand.
//! Evaluation is total: an absent field or a type mismatch resolves to a
//! boolean, never to an error.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Comparison operator of a filter.
///
/// Operators arrive as strings on the wire. Strings outside the known set
/// are kept as [`FilterOp::Unknown`] and never match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilterOp {
    Eq,
    Neq,
    Contains,
    IsNull,
    IsNotNull,
    Unknown(String),
}

impl FilterOp {
    pub fn as_str(&self) -> &str {
        match self {
            FilterOp::Eq => "eq",
            FilterOp::Neq => "neq",
            FilterOp::Contains => "contains",
            FilterOp::IsNull => "is_null",
            FilterOp::IsNotNull => "is_not_null",
            FilterOp::Unknown(op) => op,
        }
    }
}

impl From<String> for FilterOp {
    fn from(op: String) -> Self {
        match op.as_str() {
            "eq" => FilterOp::Eq,
            "neq" => FilterOp::Neq,
            "contains" => FilterOp::Contains,
            "is_null" => FilterOp::IsNull,
            "is_not_null" => FilterOp::IsNotNull,
            _ => FilterOp::Unknown(op),
        }
    }
}

impl From<FilterOp> for String {
    fn from(op: FilterOp) -> Self {
        op.as_str().to_string()
    }
}

/// A single filter condition. Filters in a query are AND-combined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    /// Top-level key of the element; dots are part of the key name.
    pub field: String,
    pub op: FilterOp,
    /// Operand for `eq`, `neq` and `contains`. Absent compares as `null`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

static NULL: Value = Value::Null;

impl Filter {
    pub fn new(field: &str, op: FilterOp, value: Option<Value>) -> Self {
        Self {
            field: field.to_string(),
            op,
            value,
        }
    }

    fn operand(&self) -> &Value {
        self.value.as_ref().unwrap_or(&NULL)
    }
}

/// Evaluate one filter against one object element.
pub fn evaluate(item: &Map<String, Value>, filter: &Filter) -> bool {
    let field = item.get(&filter.field);

    match &filter.op {
        FilterOp::Eq => field.map_or(false, |v| values_equal(v, filter.operand())),
        // An absent field is unequal to everything.
        FilterOp::Neq => field.map_or(true, |v| !values_equal(v, filter.operand())),
        FilterOp::Contains => match field {
            Some(Value::Array(elements)) => elements
                .iter()
                .any(|element| values_equal(element, filter.operand())),
            _ => false,
        },
        FilterOp::IsNull => is_null(field),
        FilterOp::IsNotNull => !is_null(field),
        FilterOp::Unknown(_) => false,
    }
}

/// Evaluate every filter against `item`; an empty list always matches.
pub fn matches_all(item: &Map<String, Value>, filters: &[Filter]) -> bool {
    filters.iter().all(|filter| evaluate(item, filter))
}

/// Absence and explicit `null` are the same thing here.
fn is_null(field: Option<&Value>) -> bool {
    matches!(field, None | Some(Value::Null))
}

/// Equality used by `eq`, `neq` and `contains`.
///
/// Numbers compare by numeric value regardless of integer or float
/// representation, so `3` equals `3.0`. Every other pairing uses strict
/// structural equality, which is false across types.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        _ => a == b,
    }
}
