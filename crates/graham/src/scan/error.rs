use std::fmt;

/// Input conditions rejected before the scan starts.
#[derive(Clone, Debug, PartialEq)]
pub enum HullError {
    /// Fewer than three distinct points were supplied.
    InsufficientPoints { found: usize },
    /// At least three distinct points, all on a single line.
    AllCollinear { count: usize },
    /// A coordinate is NaN or infinite.
    NonFinite { index: usize },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::InsufficientPoints { found } => {
                write!(f, "need at least 3 distinct points for a hull, got {found}")
            }
            HullError::AllCollinear { count } => {
                write!(f, "all {count} points are collinear; hull is degenerate")
            }
            HullError::NonFinite { index } => {
                write!(f, "point {index} has a non-finite coordinate")
            }
        }
    }
}

impl std::error::Error for HullError {}
