//! Structured-query protocol messages.
//!
//! Field and enum spellings follow the protocol's JSON mapping: camelCase
//! fields, SCREAMING_SNAKE_CASE enum values. Optional fields are omitted when
//! absent, which is how the engine tells "not configured" from "empty".

use serde::{Deserialize, Serialize};

use crate::QueryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterOperator {
    Equal,
    NotEqual,
    LessThan,
    LessThanEqual,
    GreaterThan,
    GreaterThanEqual,
    IsNull,
    IsNotNull,
    Glob,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    pub column_name: String,
    pub op: FilterOperator,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub string_rhs: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub double_rhs: Vec<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub int64_rhs: Vec<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AggregateOp {
    Count,
    Sum,
    Min,
    Max,
    Mean,
    Median,
    DurationWeightedMean,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregate {
    pub column_name: String,
    pub op: AggregateOp,
    pub result_column_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupBy {
    pub column_names: Vec<String>,
    #[serde(default)]
    pub aggregates: Vec<Aggregate>,
}

/// Source table of a query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub table_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub column_names: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredQuery {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<Table>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_by: Option<GroupBy>,
}

impl StructuredQuery {
    pub fn to_json(&self) -> Result<String, QueryError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self, QueryError> {
        Ok(serde_json::from_str(text)?)
    }
}
