//! Error types.
//!
//! - `DistanceError`: what the library returns (typed, matchable kinds).
//! - `AppError`: what the `cosmo` binary reports (message + process exit code).

use thiserror::Error;

/// Failures raised while evaluating background distances.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistanceError {
    /// The curvature indicator is not one of `-1`, `0`, `+1`.
    #[error("invalid curvature indicator k={k} (expected -1, 0 or 1)")]
    InvalidCurvature { k: i8 },

    /// A scale factor outside `(0, 1]` (or non-finite).
    #[error("invalid scale factor a={a} (expected 0 < a <= 1)")]
    InvalidScaleFactor { a: f64 },

    /// A cosmological parameter that cannot describe a physical background.
    #[error("invalid cosmological parameter {name}={value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// The radial integral could not be evaluated.
    #[error("radial integration failed at a={a}: {reason}")]
    Integration { a: f64, reason: String },

    /// Invalid run/evaluation settings.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl DistanceError {
    /// Process exit code used by the binary for this kind of failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            DistanceError::Integration { .. } => 4,
            _ => 2,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<DistanceError> for AppError {
    fn from(err: DistanceError) -> Self {
        AppError::new(err.exit_code(), err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
