use ndarray_stats::errors::MinMaxError;
use thiserror::Error;

pub type SchemeResult<T> = Result<T, SchemeError>;

#[derive(Error, Debug)]
pub enum SchemeError {
    /// Stencils reach two cells on each side of the updated range.
    #[error("grid size {m} is too small, at least 5 points are required")]
    InvalidGridSize { m: usize },

    #[error("invalid parameter {name} = {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("field length mismatch: expected {expected}, found {found}")]
    FieldLengthMismatch { expected: usize, found: usize },

    #[error("unknown scheme: {0}")]
    UnknownScheme(String),

    #[error("non-finite value in solution after step {step}")]
    NonFiniteSolution { step: usize },

    #[error("field statistics failed: {0}")]
    Statistics(#[from] MinMaxError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse parameter file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write csv: {0}")]
    Csv(#[from] csv::Error),
}
