use std::fmt;

/// Error types of the polynomial engine and of the samplers built on it
#[derive(Debug, Clone, PartialEq)]
pub enum PolyError {
    /// coefficient vector length differs from degree + 1
    StructuralMismatch { expected: usize, found: usize },
    /// domain is inverted, empty or has non-finite bounds
    InvalidDomain { x_min: f64, x_max: f64 },
    /// step (or sample rate) must be finite and positive
    InvalidStep(f64),
    /// adaptive precision must be a non-negative number
    InvalidPrecision(f64),
    /// NaN and infinities have no canonical string form
    NonFiniteCoefficient { index: usize, value: f64 },
    /// malformed canonical string
    Parse { input: String, reason: String },
    /// missing or ill-typed entry in a plot task document
    Config(String),
    /// failure while exporting points
    Io(String),
}

impl PolyError {
    pub(crate) fn parse_error(input: &str, reason: impl Into<String>) -> Self {
        PolyError::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for PolyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PolyError::StructuralMismatch { expected, found } => write!(
                f,
                "Structural mismatch: expected {} coefficients, found {}",
                expected, found
            ),
            PolyError::InvalidDomain { x_min, x_max } => {
                write!(f, "Invalid domain [{}, {}]: x_max must be greater than x_min", x_min, x_max)
            }
            PolyError::InvalidStep(step) => write!(f, "Invalid step {}: must be positive", step),
            PolyError::InvalidPrecision(precision) => {
                write!(f, "Invalid precision {}: must be non-negative", precision)
            }
            PolyError::NonFiniteCoefficient { index, value } => {
                write!(f, "Coefficient {} at position {} is not finite", value, index)
            }
            PolyError::Parse { input, reason } => {
                write!(f, "Failed to parse polynomial '{}': {}", input, reason)
            }
            PolyError::Config(msg) => write!(f, "Invalid plot task: {}", msg),
            PolyError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for PolyError {}

impl From<std::io::Error> for PolyError {
    fn from(err: std::io::Error) -> Self {
        PolyError::Io(err.to_string())
    }
}

impl From<csv::Error> for PolyError {
    fn from(err: csv::Error) -> Self {
        PolyError::Io(err.to_string())
    }
}
