use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::{model::{ColumnInfo, InvalidReason, Validate}, QueryError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AggregationOp {
    Count,
    Sum,
    Min,
    Max,
    Mean,
    Median,
    DurationWeightedMean,
}

static AGGREGATION_OPS: Lazy<IndexMap<&'static str, AggregationOp>> = Lazy::new(|| {
    let mut m = IndexMap::new();
    m.insert("count", AggregationOp::Count);
    m.insert("sum", AggregationOp::Sum);
    m.insert("min", AggregationOp::Min);
    m.insert("max", AggregationOp::Max);
    m.insert("mean", AggregationOp::Mean);
    m.insert("median", AggregationOp::Median);
    m.insert("duration_weighted_mean", AggregationOp::DurationWeightedMean);
    m
});

impl AggregationOp {
    pub fn all() -> Vec<AggregationOp> {
        AGGREGATION_OPS.values().copied().collect()
    }

    /// Protocol spelling, e.g. `DURATION_WEIGHTED_MEAN`.
    pub fn name(&self) -> &'static str {
        match self {
            AggregationOp::Count => "COUNT",
            AggregationOp::Sum => "SUM",
            AggregationOp::Min => "MIN",
            AggregationOp::Max => "MAX",
            AggregationOp::Mean => "MEAN",
            AggregationOp::Median => "MEDIAN",
            AggregationOp::DurationWeightedMean => "DURATION_WEIGHTED_MEAN",
        }
    }
}

impl fmt::Display for AggregationOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AggregationOp {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AGGREGATION_OPS
            .get(s.trim().to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| QueryError::UnknownAggregationOp(s.to_string()))
    }
}

impl TryFrom<String> for AggregationOp {
    type Error = QueryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AggregationOp> for String {
    fn from(op: AggregationOp) -> Self {
        op.name().to_string()
    }
}

/// One aggregation requested in the group-by editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupByAgg {
    #[serde(default)]
    pub column: Option<ColumnInfo>,
    #[serde(default)]
    pub aggregation_op: Option<AggregationOp>,
    /// Name of the result column; a placeholder is derived when unset.
    #[serde(default)]
    pub new_column_name: Option<String>,
}

impl GroupByAgg {
    pub fn new(column: ColumnInfo, aggregation_op: AggregationOp) -> Self {
        Self {
            column: Some(column),
            aggregation_op: Some(aggregation_op),
            new_column_name: None,
        }
    }

    pub fn with_new_column_name(mut self, name: &str) -> Self {
        self.new_column_name = Some(name.to_string());
        self
    }
}

/// An aggregation known to have both a column and an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidAggregation<'a> {
    pub column: &'a ColumnInfo,
    pub op: AggregationOp,
    pub new_column_name: Option<&'a str>,
}

impl ValidAggregation<'_> {
    /// `new_column_name` when set, otherwise `<column>_<op>`, e.g. `dur_sum`.
    pub fn result_column_name(&self) -> String {
        match self.new_column_name {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("{}_{}", self.column.column.name, self.op.name().to_ascii_lowercase()),
        }
    }
}

impl Validate for GroupByAgg {
    type Valid<'a> = ValidAggregation<'a>;

    fn check(&self) -> Result<ValidAggregation<'_>, InvalidReason> {
        let Some(column) = &self.column else {
            return Err(InvalidReason::MissingColumn);
        };
        let Some(op) = self.aggregation_op else {
            return Err(InvalidReason::MissingOperator);
        };

        Ok(ValidAggregation {
            column,
            op,
            new_column_name: self.new_column_name.as_deref(),
        })
    }
}

/// Page-owned state of the group-by editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupByAttrs {
    /// Candidate grouping columns; the checked ones are grouped on.
    #[serde(default)]
    pub group_by_columns: Vec<ColumnInfo>,
    #[serde(default)]
    pub aggregations: Vec<GroupByAgg>,
}
