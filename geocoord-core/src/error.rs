//! Structured errors for unit resolution
//!
//! Errors carry a machine-readable code next to the human message so that a
//! caller resolving a whole parameter set can report every failure the same
//! way. Floating-point domain problems (division by zero, overflow) are never
//! turned into errors; they surface as IEEE-754 infinities and NaNs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const UNKNOWN_OPERATION: &str = "UNKNOWN_OPERATION";
    pub const MISSING_PARAMETER: &str = "MISSING_PARAMETER";
    pub const DIMENSION_MISMATCH: &str = "DIMENSION_MISMATCH";
    pub const PARAM_DATA: &str = "PARAM_DATA";
    pub const INVALID_DATE: &str = "INVALID_DATE";
}

/// Error type for everything in geocoord that can fail
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UomError {
    /// The identifier has no entry in the registry that was searched.
    #[error("Unknown unit of measure: {id}")]
    UnknownUnit { id: String },

    #[error("Unknown coordinate operation: EPSG:{code}")]
    UnknownOperation { code: u32 },

    #[error("Missing parameter: {name}")]
    MissingParameter { name: String },

    /// A resolved value was asked for as the wrong kind of quantity.
    #[error("Parameter '{name}' has dimension {found}, expected {expected}")]
    DimensionMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Invalid parameter data in {path}: {message}")]
    ParamData { path: String, message: String },

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

/// Convenience alias used across the workspace
pub type Result<T> = std::result::Result<T, UomError>;

impl UomError {
    pub fn unknown_unit(id: impl Into<String>) -> Self {
        Self::UnknownUnit { id: id.into() }
    }

    pub fn missing_parameter(name: impl Into<String>) -> Self {
        Self::MissingParameter { name: name.into() }
    }

    pub fn dimension_mismatch(name: impl Into<String>, expected: &'static str, found: &'static str) -> Self {
        Self::DimensionMismatch { name: name.into(), expected, found }
    }

    pub fn param_data(path: impl Into<String>, message: impl ToString) -> Self {
        Self::ParamData { path: path.into(), message: message.to_string() }
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownUnit { .. } => codes::UNKNOWN_UNIT,
            Self::UnknownOperation { .. } => codes::UNKNOWN_OPERATION,
            Self::MissingParameter { .. } => codes::MISSING_PARAMETER,
            Self::DimensionMismatch { .. } => codes::DIMENSION_MISMATCH,
            Self::ParamData { .. } => codes::PARAM_DATA,
            Self::InvalidDate(_) => codes::INVALID_DATE,
        }
    }

    /// Suggestion for fixing the error, where one exists
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::UnknownUnit { .. } => {
                Some("Register the unit with register_custom_unit() before resolving it")
            }
            Self::UnknownOperation { .. } => Some("Check the parameter data directory (GEOCOORD_PARAMS_PATH)"),
            Self::DimensionMismatch { .. } => Some("Check the unit code recorded for this parameter"),
            Self::MissingParameter { .. } | Self::ParamData { .. } | Self::InvalidDate(_) => None,
        }
    }

    /// Flatten into a serializable report
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code().to_string(),
            message: self.to_string(),
            suggestion: self.suggestion().map(str::to_string),
        }
    }
}

/// Serializable view of an error, for logs and tooling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl From<UomError> for ErrorReport {
    fn from(err: UomError) -> Self {
        err.report()
    }
}
