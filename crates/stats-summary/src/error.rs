use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SummaryError {
    /// The sample set has no values, nothing can be computed from it.
    EmptyInput,
}

impl Display for SummaryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SummaryError::EmptyInput => write!(f, "empty sample set"),
        }
    }
}

impl Error for SummaryError {}
