/// Crate-wide result alias for dual-number operations.
pub type DualResult<T> = Result<T, DualError>;

#[derive(Debug, Clone, PartialEq)]
pub enum DualError {
    // ---- Construction ----
    /// Value and derivative must share one shape; never broadcast.
    ShapeMismatch {
        value_shape: Vec<usize>,
        derivative_shape: Vec<usize>,
    },

    // ---- Arithmetic ----
    /// Element-wise binary operation between duals of different shapes.
    OperandShapeMismatch {
        left: Vec<usize>,
        right: Vec<usize>,
    },

    /// Denominator value contains an exactly-zero element.
    DivisionByZero,

    // ---- Elementary functions ----
    /// Logarithm of a non-positive element.
    LogDomain {
        value: f64,
    },

    /// Matrix and operand dimensions are incompatible.
    MatMulShapeMismatch {
        rows: usize,
        cols: usize,
        operand: Vec<usize>,
    },

    /// Operand rank outside what the operation supports.
    UnsupportedRank {
        ndim: usize,
        reason: &'static str,
    },

    // ---- Gradient extraction ----
    /// Partial-derivative seed index beyond the point's coordinate count.
    IndexOutOfBounds {
        index: usize,
        len: usize,
    },

    /// A point with zero coordinates cannot be differentiated.
    EmptyPoint,

    /// A scalar (0-d) dual was required but a shaped one was produced.
    NonScalarOutput {
        shape: Vec<usize>,
    },

    /// Directional derivatives require a rank-1 dual point.
    NotAVector {
        ndim: usize,
    },
}

impl std::error::Error for DualError {}

impl std::fmt::Display for DualError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Construction ----
            DualError::ShapeMismatch { value_shape, derivative_shape } => {
                write!(
                    f,
                    "Value and derivative must have the same shape but got {value_shape:?} and {derivative_shape:?}"
                )
            }

            // ---- Arithmetic ----
            DualError::OperandShapeMismatch { left, right } => {
                write!(f, "Operand shape mismatch: {left:?} vs {right:?}, shapes must be equal")
            }
            DualError::DivisionByZero => {
                write!(f, "Division by zero in dual arithmetic")
            }

            // ---- Elementary functions ----
            DualError::LogDomain { value } => {
                write!(f, "Logarithm domain error: {value}, all elements must be > 0")
            }
            DualError::MatMulShapeMismatch { rows, cols, operand } => {
                write!(
                    f,
                    "Matrix multiply shape mismatch: matrix is ({rows}, {cols}), operand is {operand:?}"
                )
            }
            DualError::UnsupportedRank { ndim, reason } => {
                write!(f, "Unsupported operand rank {ndim}: {reason}")
            }

            // ---- Gradient extraction ----
            DualError::IndexOutOfBounds { index, len } => {
                write!(f, "Coordinate index {index} out of bounds for a point of length {len}")
            }
            DualError::EmptyPoint => {
                write!(f, "Point must have at least one coordinate")
            }
            DualError::NonScalarOutput { shape } => {
                write!(f, "Expected a scalar (0-d) dual but got shape {shape:?}")
            }
            DualError::NotAVector { ndim } => {
                write!(f, "Expected a rank-1 dual point but got rank {ndim}")
            }
        }
    }
}
