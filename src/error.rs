use std::fmt::Display;

#[derive(Debug)]
pub enum QueryError {
    Json(serde_json::Error),
    UnknownFilterOp(String),
    UnknownAggregationOp(String),
    /// The structured query has no source table to read from.
    MissingTable,
}

impl Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::Json(err) => write!(f, "QueryError: invalid JSON: {}", err),
            QueryError::UnknownFilterOp(op) => write!(f, "QueryError: unknown filter operator '{}'", op),
            QueryError::UnknownAggregationOp(op) => write!(f, "QueryError: unknown aggregation operator '{}'", op),
            QueryError::MissingTable => write!(f, "QueryError: no source table configured"),
        }
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QueryError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(err: serde_json::Error) -> Self {
        QueryError::Json(err)
    }
}
