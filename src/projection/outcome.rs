use crate::model::Validity;

/// Result of projecting editable rows into a protocol fragment.
///
/// `value` is `None` when the fragment should be left out of the query.
/// `validity` holds one entry per input row, in input order, for the rows
/// that were evaluated; the page uses it to flag incomplete rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection<T> {
    pub value: Option<T>,
    pub validity: Vec<Validity>,
}

impl<T> Projection<T> {
    pub fn absent(validity: Vec<Validity>) -> Self {
        Self { value: None, validity }
    }

    pub fn present(value: T, validity: Vec<Validity>) -> Self {
        Self { value: Some(value), validity }
    }

    pub fn is_absent(&self) -> bool {
        self.value.is_none()
    }

    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// Number of rows left out because they were incomplete.
    pub fn dropped(&self) -> usize {
        self.validity.iter().filter(|v| !v.is_valid()).count()
    }
}
