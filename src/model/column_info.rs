use serde::{Deserialize, Serialize};

/// Coarse type of a source column as reported by the trace processor.
///
/// Only used to describe the column; validation and projection never look
/// at it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Text column
    String,
    /// 64-bit integer column (timestamps and durations included)
    Int,
    /// Floating-point column
    Double,
    /// Boolean column
    Bool,
    /// Type not known yet
    #[default]
    Unknown,
}

/// A column of the source table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SimpleColumn {
    pub name: String,
    #[serde(default, rename = "type")]
    pub ty: ColumnType,
}

impl SimpleColumn {
    pub fn new(name: &str, ty: ColumnType) -> Self {
        Self { name: name.to_string(), ty }
    }
}

/// Column metadata as shown in the column pickers.
///
/// `checked` tells whether the column participates in grouping. The name
/// emitted into protocol messages is `column.name`; `name` is the label the
/// page displays and may differ (e.g. after an alias).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    #[serde(default)]
    pub checked: bool,
    pub column: SimpleColumn,
}

impl ColumnInfo {
    pub fn new(column: SimpleColumn) -> Self {
        Self { name: column.name.clone(), checked: false, column }
    }

    /// Convenience: an unchecked column with an unknown type.
    pub fn named(name: &str) -> Self {
        Self::new(SimpleColumn::new(name, ColumnType::Unknown))
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Build the unchecked column list for a whole source table.
    pub fn from_columns(columns: &[SimpleColumn]) -> Vec<ColumnInfo> {
        columns.iter().cloned().map(ColumnInfo::new).collect()
    }
}
