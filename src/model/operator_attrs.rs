use serde::{Deserialize, Serialize};

use crate::{model::{FilterAttrs, GroupByAttrs}, QueryError};

/// Everything the operations panel edits: filters and group-by.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorAttrs {
    #[serde(default)]
    pub filter: FilterAttrs,
    #[serde(default)]
    pub groupby: GroupByAttrs,
}

impl OperatorAttrs {
    /// Load page state saved as JSON. Operator names go through the same
    /// parsing as typed input, so unknown operators are rejected.
    pub fn from_json(text: &str) -> Result<Self, QueryError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String, QueryError> {
        Ok(serde_json::to_string(self)?)
    }
}
