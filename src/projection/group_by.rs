use tracing::debug;

use crate::{model::{ColumnInfo, GroupByAgg, Validate, Validity}, projection::Projection, proto};

/// Project the group-by editor into a protocol `GroupBy`.
///
/// Nothing is emitted unless at least one column is checked; in that case
/// the aggregations are not even validated. Once a column is checked the
/// message is always returned, possibly with no aggregates.
pub fn create_group_by_proto(
    group_by_columns: &[ColumnInfo],
    aggregations: &[GroupByAgg],
) -> Projection<proto::GroupBy> {
    if !group_by_columns.iter().any(|c| c.checked) {
        debug!(aggregations = aggregations.len(), "no grouping column checked");
        return Projection::absent(vec![]);
    }

    let column_names = group_by_columns
        .iter()
        .filter(|c| c.checked)
        .map(|c| c.column.name.clone())
        .collect();

    let mut validity = Vec::with_capacity(aggregations.len());
    let mut aggregates = vec![];
    for (index, agg) in aggregations.iter().enumerate() {
        match agg.check() {
            Ok(valid) => {
                validity.push(Validity::Valid);
                aggregates.push(proto::Aggregate::from(valid));
            }
            Err(reason) => {
                debug!(index, %reason, "dropping aggregation");
                validity.push(Validity::Invalid(reason));
            }
        }
    }

    Projection::present(proto::GroupBy { column_names, aggregates }, validity)
}
