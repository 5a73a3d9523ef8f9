use tracing::debug;

use crate::{
    model::{ColumnInfo, OperatorAttrs, Validity},
    projection::{create_filters_proto, create_group_by_proto},
    proto::{StructuredQuery, Table},
    query::Config,
    QueryError,
};

/// Validity of every editable row, as computed while building a query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowValidity {
    pub filters: Vec<Validity>,
    /// Empty when no grouping column is checked.
    pub aggregations: Vec<Validity>,
}

/// Assembles the full structured query for the "build query" flow.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    config: Config,
    source_columns: Vec<ColumnInfo>,
}

impl QueryBuilder {
    pub fn new(config: Config) -> Self {
        Self { config, source_columns: vec![] }
    }

    /// Columns selected from the source table; the checked ones are listed
    /// in the table message.
    pub fn with_source_columns(mut self, columns: Vec<ColumnInfo>) -> Self {
        self.source_columns = columns;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn build(&self, attrs: &OperatorAttrs) -> Result<StructuredQuery, QueryError> {
        self.build_with_validity(attrs).map(|(query, _)| query)
    }

    pub fn build_with_validity(&self, attrs: &OperatorAttrs) -> Result<(StructuredQuery, RowValidity), QueryError> {
        let table_name = self.config.table_name.as_ref().ok_or(QueryError::MissingTable)?;
        let table = Table {
            table_name: table_name.clone(),
            column_names: self.source_columns.iter()
                .filter(|c| c.checked)
                .map(|c| c.column.name.clone())
                .collect(),
        };

        let filters = create_filters_proto(&attrs.filter.filters);
        let group_by = create_group_by_proto(&attrs.groupby.group_by_columns, &attrs.groupby.aggregations);

        debug!(
            id = %self.config.query_id,
            table = %table.table_name,
            filters = filters.value.as_ref().map_or(0, Vec::len),
            dropped_filters = filters.dropped(),
            grouped = !group_by.is_absent(),
            dropped_aggregations = group_by.dropped(),
            "built structured query"
        );

        let validity = RowValidity {
            filters: filters.validity,
            aggregations: group_by.validity,
        };
        let query = StructuredQuery {
            id: self.config.query_id.clone(),
            table: Some(table),
            filters: filters.value,
            group_by: group_by.value,
        };

        Ok((query, validity))
    }
}
