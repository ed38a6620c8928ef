//! Error types for the quill CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error
//! messages. Validation findings on model output are NOT errors: they are
//! collected as plain strings and reported as warnings (see `validate`).

use crate::exit_codes;
use thiserror::Error;

/// Main error type for quill operations.
///
/// Each variant maps to a specific exit code. Only fatal conditions are
/// represented here; soft validation issues never become errors.
#[derive(Error, Debug)]
pub enum QuillError {
    /// User provided invalid arguments or an invalid config file.
    #[error("{0}")]
    UserError(String),

    /// The model backend could not be reached or returned a bad response.
    #[error("Model request failed: {0}")]
    ModelError(String),

    /// The article could not be written to disk.
    #[error("Output write failed: {0}")]
    OutputError(String),
}

impl QuillError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            QuillError::UserError(_) => exit_codes::USER_ERROR,
            QuillError::ModelError(_) => exit_codes::MODEL_FAILURE,
            QuillError::OutputError(_) => exit_codes::OUTPUT_FAILURE,
        }
    }
}

/// Result type alias for quill operations.
pub type Result<T> = std::result::Result<T, QuillError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = QuillError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn model_error_has_correct_exit_code() {
        let err = QuillError::ModelError("connection refused".to_string());
        assert_eq!(err.exit_code(), exit_codes::MODEL_FAILURE);
    }

    #[test]
    fn output_error_has_correct_exit_code() {
        let err = QuillError::OutputError("permission denied".to_string());
        assert_eq!(err.exit_code(), exit_codes::OUTPUT_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = QuillError::ModelError("connection refused".to_string());
        assert_eq!(err.to_string(), "Model request failed: connection refused");

        let err = QuillError::OutputError("disk full".to_string());
        assert_eq!(err.to_string(), "Output write failed: disk full");
    }
}
