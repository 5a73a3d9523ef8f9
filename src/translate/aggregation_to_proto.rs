use crate::{model::{AggregationOp, ValidAggregation}, proto};

impl From<AggregationOp> for proto::AggregateOp {
    fn from(op: AggregationOp) -> Self {
        match op {
            AggregationOp::Count => proto::AggregateOp::Count,
            AggregationOp::Sum => proto::AggregateOp::Sum,
            AggregationOp::Min => proto::AggregateOp::Min,
            AggregationOp::Max => proto::AggregateOp::Max,
            AggregationOp::Mean => proto::AggregateOp::Mean,
            AggregationOp::Median => proto::AggregateOp::Median,
            AggregationOp::DurationWeightedMean => proto::AggregateOp::DurationWeightedMean,
        }
    }
}

impl From<ValidAggregation<'_>> for proto::Aggregate {
    fn from(agg: ValidAggregation<'_>) -> Self {
        proto::Aggregate {
            column_name: agg.column.column.name.clone(),
            op: agg.op.into(),
            result_column_name: agg.result_column_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{model::{AggregationOp, ColumnInfo, ColumnType, GroupByAgg, SimpleColumn, Validate}, proto};

    #[test]
    fn test_aggregation_to_proto_uses_column_name() {
        // The displayed label differs from the underlying column.
        let mut column = ColumnInfo::new(SimpleColumn::new("dur", ColumnType::Int));
        column.name = "Duration".into();
        let agg = GroupByAgg::new(column, AggregationOp::Max);

        let proto: proto::Aggregate = agg.check().unwrap().into();
        assert_eq!(proto.column_name, "dur");
        assert_eq!(proto.op, proto::AggregateOp::Max);
        assert_eq!(proto.result_column_name, "dur_max");
    }

    #[test]
    fn test_aggregation_to_proto_keeps_new_name() {
        let agg = GroupByAgg::new(ColumnInfo::named("id"), AggregationOp::Count)
            .with_new_column_name("slice_count");
        let proto: proto::Aggregate = agg.check().unwrap().into();
        assert_eq!(proto.result_column_name, "slice_count");
    }
}
