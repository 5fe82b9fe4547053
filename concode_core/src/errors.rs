//! # Error Types
//!
//! Structured error types for concode_core. Every factory and the section
//! design entry point validate their inputs up front and return one of these
//! variants; no partially built material is ever handed back.
//!
//! ## Example
//!
//! ```rust
//! use concode_core::errors::{CodeError, CodeResult};
//!
//! fn check_fcu(fcu: f64) -> CodeResult<()> {
//!     if !(25.0..=80.0).contains(&fcu) {
//!         return Err(CodeError::out_of_range_strength("fcu", fcu, 25.0, 80.0));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_fcu(20.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for concode_core operations
pub type CodeResult<T> = Result<T, CodeError>;

/// Structured error type for material derivation and section design.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CodeError {
    /// Characteristic strength outside the code-valid range
    #[error("Strength '{field}' = {value} MPa is outside the permitted range [{min}, {max}] MPa")]
    OutOfRangeStrength {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Ductility class not one of A, B or C
    #[error("Invalid ductility class '{value}' - expected one of A, B or C")]
    InvalidDuctilityClass { value: String },

    /// Section geometry that this code model cannot handle
    #[error("Unsupported geometry: {reason}")]
    UnsupportedGeometry { reason: String },

    /// Stress requested beyond the defined strain domain of a material law
    #[error("Strain {strain} is outside the material law domain [{min}, {max}]")]
    StrainOutOfRange { strain: f64, min: f64, max: f64 },

    /// An input value is invalid for a reason other than strength bounds
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The section-analysis collaborator could not produce a result
    #[error("Section analysis failed: {reason}")]
    AnalysisFailed { reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CodeError {
    /// Create an OutOfRangeStrength error
    pub fn out_of_range_strength(field: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        CodeError::OutOfRangeStrength {
            field: field.into(),
            value,
            min,
            max,
        }
    }

    /// Create an InvalidDuctilityClass error
    pub fn invalid_ductility_class(value: impl Into<String>) -> Self {
        CodeError::InvalidDuctilityClass {
            value: value.into(),
        }
    }

    /// Create an UnsupportedGeometry error
    pub fn unsupported_geometry(reason: impl Into<String>) -> Self {
        CodeError::UnsupportedGeometry {
            reason: reason.into(),
        }
    }

    /// Create a StrainOutOfRange error
    pub fn strain_out_of_range(strain: f64, min: f64, max: f64) -> Self {
        CodeError::StrainOutOfRange { strain, min, max }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CodeError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an AnalysisFailed error
    pub fn analysis_failed(reason: impl Into<String>) -> Self {
        CodeError::AnalysisFailed {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CodeError::OutOfRangeStrength { .. } => "OUT_OF_RANGE_STRENGTH",
            CodeError::InvalidDuctilityClass { .. } => "INVALID_DUCTILITY_CLASS",
            CodeError::UnsupportedGeometry { .. } => "UNSUPPORTED_GEOMETRY",
            CodeError::StrainOutOfRange { .. } => "STRAIN_OUT_OF_RANGE",
            CodeError::InvalidInput { .. } => "INVALID_INPUT",
            CodeError::AnalysisFailed { .. } => "ANALYSIS_FAILED",
            CodeError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CodeError {
    fn from(err: serde_json::Error) -> Self {
        CodeError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CodeError::out_of_range_strength("fcu", 85.0, 25.0, 80.0);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"OutOfRangeStrength\""));
        let roundtrip: CodeError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CodeError::invalid_ductility_class("D").error_code(), "INVALID_DUCTILITY_CLASS");
        assert_eq!(CodeError::unsupported_geometry("meshed").error_code(), "UNSUPPORTED_GEOMETRY");
        assert_eq!(CodeError::strain_out_of_range(0.1, -0.05, 0.05).error_code(), "STRAIN_OUT_OF_RANGE");
    }

    #[test]
    fn test_error_message() {
        let error = CodeError::out_of_range_strength("fy", 550.0, 250.0, 500.0);
        assert_eq!(
            error.to_string(),
            "Strength 'fy' = 550 MPa is outside the permitted range [250, 500] MPa"
        );
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<f64>("not a number").unwrap_err();
        let code_err: CodeError = err.into();
        assert_eq!(code_err.error_code(), "SERIALIZATION_ERROR");
    }
}
