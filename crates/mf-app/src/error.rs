//! Error types for the mf-app service layer.

use mf_chart::ChartError;
use mf_core::CoreError;
use mf_friction::FrictionError;

/// Application error type shared by the CLI and the GUI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid number for {field}: {input:?}")]
    Parse { field: String, input: String },

    #[error("Domain error: {0}")]
    Domain(CoreError),

    #[error("Friction factor error: {0}")]
    Friction(#[from] FrictionError),

    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),

    #[error("Input ended")]
    EndOfInput,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for mf-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        AppError::Domain(err)
    }
}

impl AppError {
    /// Errors that only invalidate the current entry; the session can go on.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::Parse { .. } | AppError::Domain(_) | AppError::Friction(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_shows_input() {
        let err = AppError::Parse {
            field: "diameter".into(),
            input: "abc".into(),
        };
        assert!(err.to_string().contains("\"abc\""));
        assert!(err.is_recoverable());
    }

    #[test]
    fn end_of_input_is_not_recoverable() {
        assert!(!AppError::EndOfInput.is_recoverable());
    }
}
