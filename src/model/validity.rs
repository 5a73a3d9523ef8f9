use std::fmt;

/// Why a row was left out of a projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidReason {
    /// No target column.
    MissingColumn,
    /// No operator selected.
    MissingOperator,
    /// Every right-hand-side bucket is empty.
    EmptyRhs,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::MissingColumn => write!(f, "missing column"),
            InvalidReason::MissingOperator => write!(f, "missing operator"),
            InvalidReason::EmptyRhs => write!(f, "no value to compare against"),
        }
    }
}

/// Outcome of validating one editable row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Validity {
    Valid,
    Invalid(InvalidReason),
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }

    pub fn reason(&self) -> Option<InvalidReason> {
        match self {
            Validity::Valid => None,
            Validity::Invalid(reason) => Some(*reason),
        }
    }
}

impl<T> From<&Result<T, InvalidReason>> for Validity {
    fn from(result: &Result<T, InvalidReason>) -> Self {
        match result {
            Ok(_) => Validity::Valid,
            Err(reason) => Validity::Invalid(*reason),
        }
    }
}

/// An editable row that can be checked before being sent to the engine.
///
/// `check` borrows the row and, when it is complete, returns a typed view
/// with every required field present. It never looks at anything but the row
/// itself, so calling it again on an unchanged row gives the same answer.
pub trait Validate {
    type Valid<'a>
    where
        Self: 'a;

    fn check(&self) -> Result<Self::Valid<'_>, InvalidReason>;

    fn validity(&self) -> Validity {
        (&self.check()).into()
    }
}
