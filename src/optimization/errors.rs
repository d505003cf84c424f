use crate::dual::errors::DualError;
use crate::models::errors::ModelError;

/// Crate-wide result alias for optimizer operations.
pub type OptResult<T> = Result<T, OptError>;

#[derive(Debug, Clone, PartialEq)]
pub enum OptError {
    // ---- Options ----
    /// Tolerance needs to be positive and finite.
    InvalidTolerance {
        tol: f64,
        reason: &'static str,
    },
    /// Maximum iterations needs to be positive.
    InvalidMaxIters {
        max_iters: usize,
        reason: &'static str,
    },

    // ---- Learning rates ----
    /// Learning rate needs to be positive and finite.
    InvalidRate {
        rate: f64,
        reason: &'static str,
    },
    /// Decay rate needs to be non-negative and finite.
    InvalidDecayRate {
        rate: f64,
        reason: &'static str,
    },
    /// Momentum rate needs to be non-negative and finite.
    InvalidMomentumRate {
        rate: f64,
        reason: &'static str,
    },
    /// Patience needs to be at least 1.
    InvalidPatience {
        patience: usize,
        reason: &'static str,
    },

    // ---- Descent state ----
    /// Initial point must have at least one coordinate.
    EmptyInitialPoint,

    /// Point coordinates need to be finite.
    NonFinitePoint {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    /// Step dimensions do not match point dimensions.
    StepDimMismatch {
        expected: usize,
        found: usize,
    },

    /// Step elements need to be finite.
    NonFiniteStep {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    // ---- Dual arithmetic ----
    /// Value/derivative shapes differ at dual construction.
    ShapeMismatch {
        value_shape: Vec<usize>,
        derivative_shape: Vec<usize>,
    },
    /// Division by an exactly-zero denominator in the objective.
    DivisionByZero,
    /// Logarithm of a non-positive element in the objective.
    LogDomain {
        value: f64,
    },
    /// Objective returned a shaped dual where a scalar was required.
    NonScalarObjective {
        shape: Vec<usize>,
    },
    /// Wrapper for other dual-arithmetic failures.
    DualFailure {
        text: String,
    },

    // ---- Model ----
    /// Dataset has no records.
    EmptyDataset,
    /// Feature records and labels have different lengths.
    DataLengthMismatch {
        records: usize,
        labels: usize,
    },
    /// Initial parameter vector has the wrong length.
    InitParamsLengthMismatch {
        expected: usize,
        found: usize,
    },

    // ---- Fallback ----
    UnknownError,
}

impl std::error::Error for OptError {}

impl std::fmt::Display for OptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Options ----
            OptError::InvalidTolerance { tol, reason } => {
                write!(f, "Invalid tolerance {tol}: {reason}")
            }
            OptError::InvalidMaxIters { max_iters, reason } => {
                write!(f, "Invalid maximum iterations {max_iters}: {reason}")
            }

            // ---- Learning rates ----
            OptError::InvalidRate { rate, reason } => {
                write!(f, "Invalid learning rate {rate}: {reason}")
            }
            OptError::InvalidDecayRate { rate, reason } => {
                write!(f, "Invalid decay rate {rate}: {reason}")
            }
            OptError::InvalidMomentumRate { rate, reason } => {
                write!(f, "Invalid momentum rate {rate}: {reason}")
            }
            OptError::InvalidPatience { patience, reason } => {
                write!(f, "Invalid patience {patience}: {reason}")
            }

            // ---- Descent state ----
            OptError::EmptyInitialPoint => {
                write!(f, "Initial point must have at least one coordinate")
            }
            OptError::NonFinitePoint { index, value, reason } => {
                write!(f, "Invalid point coordinate at index {index}: {value}: {reason}")
            }
            OptError::StepDimMismatch { expected, found } => {
                write!(f, "Step dimension mismatch: expected {expected}, found {found}")
            }
            OptError::NonFiniteStep { index, value, reason } => {
                write!(f, "Invalid step element at index {index}: {value}: {reason}")
            }

            // ---- Dual arithmetic ----
            OptError::ShapeMismatch { value_shape, derivative_shape } => {
                write!(
                    f,
                    "Value and derivative must have the same shape but got {value_shape:?} and {derivative_shape:?}"
                )
            }
            OptError::DivisionByZero => {
                write!(f, "Division by zero in the objective function")
            }
            OptError::LogDomain { value } => {
                write!(f, "Logarithm domain error in the objective function: {value}")
            }
            OptError::NonScalarObjective { shape } => {
                write!(f, "Objective must return a scalar dual but got shape {shape:?}")
            }
            OptError::DualFailure { text } => {
                write!(f, "Dual arithmetic error: {text}")
            }

            // ---- Model ----
            OptError::EmptyDataset => {
                write!(f, "Dataset has no records")
            }
            OptError::DataLengthMismatch { records, labels } => {
                write!(f, "Data length mismatch: {records} records vs {labels} labels")
            }
            OptError::InitParamsLengthMismatch { expected, found } => {
                write!(f, "Initial parameter length mismatch: expected {expected}, found {found}")
            }

            // ---- Fallback ----
            OptError::UnknownError => {
                write!(f, "Unknown error")
            }
        }
    }
}

impl From<DualError> for OptError {
    fn from(err: DualError) -> Self {
        match err {
            DualError::ShapeMismatch { value_shape, derivative_shape } => {
                OptError::ShapeMismatch { value_shape, derivative_shape }
            }
            DualError::DivisionByZero => OptError::DivisionByZero,
            DualError::LogDomain { value } => OptError::LogDomain { value },
            DualError::NonScalarOutput { shape } => OptError::NonScalarObjective { shape },
            other => OptError::DualFailure { text: other.to_string() },
        }
    }
}

impl From<ModelError> for OptError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::EmptyDataset => OptError::EmptyDataset,
            ModelError::DataLengthMismatch { records, labels } => {
                OptError::DataLengthMismatch { records, labels }
            }
            ModelError::InitParamsLengthMismatch { expected, found } => {
                OptError::InitParamsLengthMismatch { expected, found }
            }
        }
    }
}
