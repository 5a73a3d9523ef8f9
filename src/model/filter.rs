use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use ordered_float::NotNan;
use serde::{Deserialize, Serialize};

use crate::{model::{ColumnInfo, InvalidReason, Validate}, QueryError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FilterOp {
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

/// Every accepted spelling, keyed in lowercase. Symbols come first so that
/// `FilterOp::all` lists operators in picker order.
static FILTER_OPS: Lazy<IndexMap<&'static str, FilterOp>> = Lazy::new(|| {
    let mut m = IndexMap::new();
    m.insert("=", FilterOp::Equal);
    m.insert("!=", FilterOp::NotEqual);
    m.insert("<", FilterOp::LessThan);
    m.insert("<=", FilterOp::LessThanEqual);
    m.insert(">", FilterOp::GreaterThan);
    m.insert(">=", FilterOp::GreaterThanEqual);
    m.insert("is null", FilterOp::IsNull);
    m.insert("is not null", FilterOp::IsNotNull);
    m.insert("glob", FilterOp::Glob);
    m.insert("<>", FilterOp::NotEqual);
    m.insert("equal", FilterOp::Equal);
    m.insert("not_equal", FilterOp::NotEqual);
    m.insert("less_than", FilterOp::LessThan);
    m.insert("less_than_equal", FilterOp::LessThanEqual);
    m.insert("greater_than", FilterOp::GreaterThan);
    m.insert("greater_than_equal", FilterOp::GreaterThanEqual);
    m.insert("is_null", FilterOp::IsNull);
    m.insert("is_not_null", FilterOp::IsNotNull);
    m
});

impl FilterOp {
    /// Operators in the order the filter picker offers them.
    pub fn all() -> Vec<FilterOp> {
        let mut ops: Vec<FilterOp> = vec![];
        for op in FILTER_OPS.values() {
            if !ops.contains(op) {
                ops.push(*op);
            }
        }
        ops
    }

    /// Label shown in the filter row.
    pub fn label(&self) -> &'static str {
        match self {
            FilterOp::Equal => "=",
            FilterOp::NotEqual => "!=",
            FilterOp::LessThan => "<",
            FilterOp::LessThanEqual => "<=",
            FilterOp::GreaterThan => ">",
            FilterOp::GreaterThanEqual => ">=",
            FilterOp::IsNull => "is null",
            FilterOp::IsNotNull => "is not null",
            FilterOp::Glob => "glob",
        }
    }
}

impl fmt::Display for FilterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FilterOp {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FILTER_OPS
            .get(s.trim().to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| QueryError::UnknownFilterOp(s.to_string()))
    }
}

impl TryFrom<String> for FilterOp {
    type Error = QueryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FilterOp> for String {
    fn from(op: FilterOp) -> Self {
        op.label().to_string()
    }
}

/// One row of the filter editor.
///
/// Exactly one right-hand-side bucket is expected to be filled, depending on
/// the operator and the column type, but nothing enforces it here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Filter {
    #[serde(default)]
    pub column_name: String,
    #[serde(default)]
    pub filter_op: Option<FilterOp>,
    #[serde(default)]
    pub strings_rhs: Vec<String>,
    #[serde(default)]
    pub int_rhs: Vec<i64>,
    #[serde(default)]
    pub double_rhs: Vec<NotNan<f64>>,
}

impl Filter {
    pub fn new(column_name: &str, filter_op: FilterOp) -> Self {
        Self {
            column_name: column_name.to_string(),
            filter_op: Some(filter_op),
            ..Default::default()
        }
    }

    pub fn with_strings<S: Into<String>>(mut self, values: impl IntoIterator<Item = S>) -> Self {
        self.strings_rhs = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_ints(mut self, values: impl IntoIterator<Item = i64>) -> Self {
        self.int_rhs = values.into_iter().collect();
        self
    }

    /// NaN values are skipped, the engine cannot compare against them.
    pub fn with_doubles(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.double_rhs = values.into_iter().filter_map(|v| NotNan::new(v).ok()).collect();
        self
    }

    fn has_rhs(&self) -> bool {
        !(self.strings_rhs.is_empty() && self.int_rhs.is_empty() && self.double_rhs.is_empty())
    }
}

/// A filter row known to be complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidFilter<'a> {
    pub column_name: &'a str,
    pub op: FilterOp,
    pub strings_rhs: &'a [String],
    pub int_rhs: &'a [i64],
    pub double_rhs: &'a [NotNan<f64>],
}

impl Validate for Filter {
    type Valid<'a> = ValidFilter<'a>;

    fn check(&self) -> Result<ValidFilter<'_>, InvalidReason> {
        if self.column_name.is_empty() {
            return Err(InvalidReason::MissingColumn);
        }
        let Some(op) = self.filter_op else {
            return Err(InvalidReason::MissingOperator);
        };
        // Operator-agnostic: IS NULL rows need a value too.
        if !self.has_rhs() {
            return Err(InvalidReason::EmptyRhs);
        }

        Ok(ValidFilter {
            column_name: &self.column_name,
            op,
            strings_rhs: &self.strings_rhs,
            int_rhs: &self.int_rhs,
            double_rhs: &self.double_rhs,
        })
    }
}

/// Page-owned state of the filter editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterAttrs {
    /// Columns the user can filter on.
    #[serde(default)]
    pub source_cols: Vec<ColumnInfo>,
    #[serde(default)]
    pub filters: Vec<Filter>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Validity;
    use serde_json::json;

    #[test]
    fn test_parse_symbols_and_names() {
        assert_eq!("=".parse::<FilterOp>().unwrap(), FilterOp::Equal);
        assert_eq!("<>".parse::<FilterOp>().unwrap(), FilterOp::NotEqual);
        assert_eq!("GREATER_THAN_EQUAL".parse::<FilterOp>().unwrap(), FilterOp::GreaterThanEqual);
        assert_eq!(" Is Not Null ".parse::<FilterOp>().unwrap(), FilterOp::IsNotNull);
        assert_eq!("GLOB".parse::<FilterOp>().unwrap(), FilterOp::Glob);
    }

    #[test]
    fn test_parse_unknown() {
        match "like".parse::<FilterOp>() {
            Err(QueryError::UnknownFilterOp(name)) => assert_eq!(name, "like"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_all_is_deduplicated_and_ordered() {
        let all = FilterOp::all();
        assert_eq!(all.len(), 9);
        assert_eq!(all[0], FilterOp::Equal);
        assert_eq!(all[8], FilterOp::Glob);
    }

    #[test]
    fn test_label_round_trips() {
        for op in FilterOp::all() {
            assert_eq!(op.label().parse::<FilterOp>().unwrap(), op);
        }
    }

    #[test]
    fn test_missing_column() {
        let filter = Filter::new("", FilterOp::Equal).with_ints([1]);
        assert_eq!(filter.validity(), Validity::Invalid(InvalidReason::MissingColumn));
    }

    #[test]
    fn test_missing_operator() {
        let filter = Filter { column_name: "ts".into(), int_rhs: vec![1], ..Default::default() };
        assert_eq!(filter.validity(), Validity::Invalid(InvalidReason::MissingOperator));
    }

    #[test]
    fn test_empty_rhs() {
        let filter = Filter::new("ts", FilterOp::GreaterThan);
        assert_eq!(filter.validity(), Validity::Invalid(InvalidReason::EmptyRhs));

        let is_null = Filter::new("ts", FilterOp::IsNull);
        assert_eq!(is_null.validity(), Validity::Invalid(InvalidReason::EmptyRhs));
    }

    #[test]
    fn test_any_bucket_is_enough() {
        assert!(Filter::new("name", FilterOp::Glob).with_strings(["*foo*"]).validity().is_valid());
        assert!(Filter::new("ts", FilterOp::Equal).with_ints([3]).validity().is_valid());
        assert!(Filter::new("v", FilterOp::LessThan).with_doubles([0.5]).validity().is_valid());
    }

    #[test]
    fn test_nan_is_dropped() {
        let filter = Filter::new("v", FilterOp::LessThan).with_doubles([f64::NAN]);
        assert!(filter.double_rhs.is_empty());
        assert!(!filter.validity().is_valid());
    }

    #[test]
    fn test_check_is_idempotent() {
        let filter = Filter::new("ts", FilterOp::Equal);
        assert_eq!(filter.validity(), filter.validity());

        let filter = filter.with_ints([10]);
        assert_eq!(filter.validity(), Validity::Valid);
        assert_eq!(filter.validity(), Validity::Valid);
    }

    #[test]
    fn test_valid_view_borrows_row() {
        let filter = Filter::new("name", FilterOp::Equal).with_strings(["a", "b"]);
        let valid = filter.check().unwrap();
        assert_eq!(valid.column_name, "name");
        assert_eq!(valid.op, FilterOp::Equal);
        assert_eq!(valid.strings_rhs, &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_deserialize_filter() {
        let filter: Filter = serde_json::from_value(json!({
            "column_name": "dur",
            "filter_op": ">=",
            "int_rhs": [1000]
        })).unwrap();
        assert_eq!(filter.filter_op, Some(FilterOp::GreaterThanEqual));
        assert!(filter.strings_rhs.is_empty());

        let bad = serde_json::from_value::<Filter>(json!({ "filter_op": "~" }));
        assert!(bad.is_err());
    }
}
