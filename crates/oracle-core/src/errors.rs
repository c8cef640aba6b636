//! Error types for the verification oracle.
//!
//! Every variant here is a corpus-level precondition violation and aborts
//! the run. A vector whose recomputed value disagrees with its claim is
//! never an error; the harness records it and keeps going.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("failed to read vector document: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse vector document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("malformed vector {label}: {reason}")]
    MalformedVector { label: String, reason: String },

    #[error("division by the zero polynomial")]
    ZeroPolynomialDivision,

    #[error("interpolation requires distinct x-samples")]
    RepeatedInterpolationPoint,
}
