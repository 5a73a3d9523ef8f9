use tracing::debug;

use crate::{model::{Filter, Validate, Validity}, projection::Projection, proto};

/// Project the filter rows into protocol filters.
///
/// Incomplete rows are dropped. An empty result is reported as absent, never
/// as an empty list.
pub fn create_filters_proto(filters: &[Filter]) -> Projection<Vec<proto::Filter>> {
    let mut validity = Vec::with_capacity(filters.len());
    let mut protos = vec![];

    for (index, filter) in filters.iter().enumerate() {
        match filter.check() {
            Ok(valid) => {
                validity.push(Validity::Valid);
                protos.push(proto::Filter::from(valid));
            }
            Err(reason) => {
                debug!(index, column = %filter.column_name, %reason, "dropping filter");
                validity.push(Validity::Invalid(reason));
            }
        }
    }

    if protos.is_empty() {
        Projection::absent(validity)
    } else {
        Projection::present(protos, validity)
    }
}
