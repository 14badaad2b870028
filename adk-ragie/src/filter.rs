//! Metadata filter expressions.
//!
//! A [`Filter`] restricts retrieval to documents whose metadata matches a
//! predicate. It serializes to Ragie's JSON filter syntax:
//!
//! ```json
//! { "$and": [ { "department": { "$eq": "sales" } }, { "year": { "$gte": 2023 } } ] }
//! ```
//!
//! Filters are not validated locally. The service rejects malformed ones and
//! the rejection surfaces as [`RagieError::RemoteError`](crate::RagieError::RemoteError).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A comparison operator on a single metadata field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
    Nin,
}

impl Operator {
    /// The wire name of the operator, e.g. `$gte`.
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Eq => "$eq",
            Operator::Ne => "$ne",
            Operator::Gt => "$gt",
            Operator::Gte => "$gte",
            Operator::Lt => "$lt",
            Operator::Lte => "$lte",
            Operator::In => "$in",
            Operator::Nin => "$nin",
        }
    }
}

/// A boolean predicate over document metadata.
///
/// Deserializing always yields [`Filter::Raw`]; the structured variants are
/// for building filters in code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "Value", from = "Value")]
pub enum Filter {
    /// `{ field: { op: value } }`
    Condition { field: String, op: Operator, value: Value },
    /// `{ "$and": [...] }`
    All(Vec<Filter>),
    /// `{ "$or": [...] }`
    Any(Vec<Filter>),
    /// A pre-built JSON predicate, sent as is.
    Raw(Value),
}

impl Filter {
    fn condition(field: impl Into<String>, op: Operator, value: impl Into<Value>) -> Self {
        Filter::Condition { field: field.into(), op, value: value.into() }
    }

    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::condition(field, Operator::Eq, value)
    }

    pub fn ne(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::condition(field, Operator::Ne, value)
    }

    pub fn gt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::condition(field, Operator::Gt, value)
    }

    pub fn gte(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::condition(field, Operator::Gte, value)
    }

    pub fn lt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::condition(field, Operator::Lt, value)
    }

    pub fn lte(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::condition(field, Operator::Lte, value)
    }

    /// Match when the field equals any of `values`.
    pub fn is_in<V: Into<Value>>(
        field: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        Self::condition(field, Operator::In, values)
    }

    /// Match when the field equals none of `values`.
    pub fn not_in<V: Into<Value>>(
        field: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        Self::condition(field, Operator::Nin, values)
    }

    /// Conjunction of `filters` (`$and`).
    pub fn all(filters: impl IntoIterator<Item = Filter>) -> Self {
        Filter::All(filters.into_iter().collect())
    }

    /// Disjunction of `filters` (`$or`).
    pub fn any(filters: impl IntoIterator<Item = Filter>) -> Self {
        Filter::Any(filters.into_iter().collect())
    }

    /// An explicit empty filter (`{}`), which matches every document.
    ///
    /// Unlike leaving the filter unset, this is sent to the service.
    pub fn match_all() -> Self {
        Filter::Raw(Value::Object(Map::new()))
    }

    /// Render the filter in Ragie's JSON syntax.
    pub fn to_value(&self) -> Value {
        match self {
            Filter::Condition { field, op, value } => {
                let mut comparison = Map::new();
                comparison.insert(op.as_str().to_string(), value.clone());
                let mut predicate = Map::new();
                predicate.insert(field.clone(), Value::Object(comparison));
                Value::Object(predicate)
            }
            Filter::All(filters) => combine("$and", filters),
            Filter::Any(filters) => combine("$or", filters),
            Filter::Raw(value) => value.clone(),
        }
    }
}

fn combine(key: &str, filters: &[Filter]) -> Value {
    let mut predicate = Map::new();
    predicate.insert(key.to_string(), Value::Array(filters.iter().map(Filter::to_value).collect()));
    Value::Object(predicate)
}

impl From<Value> for Filter {
    fn from(value: Value) -> Self {
        Filter::Raw(value)
    }
}

impl From<Filter> for Value {
    fn from(filter: Filter) -> Self {
        filter.to_value()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn condition_serializes_to_field_operator_object() {
        let filter = Filter::eq("department", "sales");
        assert_eq!(serde_json::to_value(&filter).unwrap(), json!({"department": {"$eq": "sales"}}));
    }

    #[test]
    fn every_operator_has_its_wire_name() {
        let cases = [
            (Filter::ne("a", 1), "$ne"),
            (Filter::gt("a", 1), "$gt"),
            (Filter::gte("a", 1), "$gte"),
            (Filter::lt("a", 1), "$lt"),
            (Filter::lte("a", 1), "$lte"),
            (Filter::is_in("a", [1, 2]), "$in"),
            (Filter::not_in("a", [1, 2]), "$nin"),
        ];
        for (filter, op) in cases {
            let value = filter.to_value();
            assert!(value["a"].get(op).is_some(), "{op} missing from {value}");
        }
    }

    #[test]
    fn nested_combinators() {
        let filter = Filter::any([
            Filter::all([Filter::eq("team", "a"), Filter::gte("year", 2023)]),
            Filter::is_in("tag", ["x", "y"]),
        ]);
        assert_eq!(
            filter.to_value(),
            json!({"$or": [
                {"$and": [{"team": {"$eq": "a"}}, {"year": {"$gte": 2023}}]},
                {"tag": {"$in": ["x", "y"]}}
            ]})
        );
    }

    #[test]
    fn match_all_is_an_empty_object() {
        assert_eq!(Filter::match_all().to_value(), json!({}));
    }

    #[test]
    fn deserializes_as_raw() {
        let filter: Filter = serde_json::from_value(json!({"year": {"$lt": 2020}})).unwrap();
        assert_eq!(filter, Filter::Raw(json!({"year": {"$lt": 2020}})));
    }
}
