use crate::{model::{FilterOp, ValidFilter}, proto};

impl From<FilterOp> for proto::FilterOperator {
    fn from(op: FilterOp) -> Self {
        match op {
            FilterOp::Equal => proto::FilterOperator::Equal,
            FilterOp::NotEqual => proto::FilterOperator::NotEqual,
            FilterOp::LessThan => proto::FilterOperator::LessThan,
            FilterOp::LessThanEqual => proto::FilterOperator::LessThanEqual,
            FilterOp::GreaterThan => proto::FilterOperator::GreaterThan,
            FilterOp::GreaterThanEqual => proto::FilterOperator::GreaterThanEqual,
            FilterOp::IsNull => proto::FilterOperator::IsNull,
            FilterOp::IsNotNull => proto::FilterOperator::IsNotNull,
            FilterOp::Glob => proto::FilterOperator::Glob,
        }
    }
}

impl From<ValidFilter<'_>> for proto::Filter {
    fn from(filter: ValidFilter<'_>) -> Self {
        proto::Filter {
            column_name: filter.column_name.to_string(),
            op: filter.op.into(),
            string_rhs: filter.strings_rhs.to_vec(),
            double_rhs: filter.double_rhs.iter().map(|v| v.into_inner()).collect(),
            int64_rhs: filter.int_rhs.to_vec(),
        }
    }
}
