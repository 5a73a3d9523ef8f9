pub mod error;
pub use error::*;

pub mod model;
pub use model::{ColumnInfo, Filter, FilterOp, GroupByAgg, AggregationOp, OperatorAttrs, Validity};

pub mod proto;

pub mod translate;

pub mod projection;
pub use projection::{create_filters_proto, create_group_by_proto, Projection};

pub mod view;
pub use view::{Operator, ViewNode};

pub mod query;
pub use query::{Config, QueryBuilder};
