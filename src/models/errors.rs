/// Result alias for model construction and data validation.
pub type ModelResult<T> = Result<T, ModelError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
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
}

impl std::error::Error for ModelError {}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::EmptyDataset => {
                write!(f, "Dataset has no records")
            }
            ModelError::DataLengthMismatch { records, labels } => {
                write!(f, "Data length mismatch: {records} records vs {labels} labels")
            }
            ModelError::InitParamsLengthMismatch { expected, found } => {
                write!(f, "Initial parameter length mismatch: expected {expected}, found {found}")
            }
        }
    }
}
