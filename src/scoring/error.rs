use std::fmt;
use thiserror::Error;

/// Input field a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    CourseHours,
    /// Colloquium score by 1-based position
    Colloquium(usize),
    /// The colloquium list as a whole (count checks)
    Colloquiums,
    /// Seminar score by 1-based position
    Seminar(usize),
    /// The seminar list as a whole (emptiness checks)
    Seminars,
    IndependentWork,
    Absences,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::CourseHours => write!(f, "course hours"),
            Field::Colloquium(n) => write!(f, "colloquium {}", n),
            Field::Colloquiums => write!(f, "colloquium scores"),
            Field::Seminar(n) => write!(f, "seminar {}", n),
            Field::Seminars => write!(f, "seminar scores"),
            Field::IndependentWork => write!(f, "independent work"),
            Field::Absences => write!(f, "absences"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Reason {
    #[error("value out of range: {value} is not between {min} and {max}")]
    OutOfRange { value: f64, min: f64, max: f64 },

    #[error("wrong count of inputs: expected {expected}, got {actual}")]
    WrongCount { expected: usize, actual: usize },

    #[error("at least one score is required")]
    Empty,

    #[error("invalid choice {value}, expected one of {allowed:?}")]
    InvalidChoice { value: u32, allowed: Vec<u32> },

    #[error("cannot be negative: {0}")]
    Negative(i64),
}

/// The only failure the score engine produces.
///
/// Raised on the first invalid input; no partial result accompanies it.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: Field,
    pub reason: Reason,
}

impl ValidationError {
    pub fn new(field: Field, reason: Reason) -> Self {
        Self { field, reason }
    }
}
