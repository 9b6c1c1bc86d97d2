//! Error types for the deflection solver

use thiserror::Error;

/// Main error type for deflection evaluation
#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField(_) => "MISSING_FIELD",
            CalcError::SerializationError(_) => "SERIALIZATION_ERROR",
        }
    }
}

/// Result type for deflection operations
pub type CalcResult<T> = Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = CalcError::invalid_input("length", "-1", "must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid input for 'length': -1 - must be positive"
        );
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_serde_error_converts() {
        let err: CalcError = serde_json::from_str::<f64>("not json").unwrap_err().into();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
