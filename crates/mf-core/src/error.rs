use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Domain error: {what} must be positive, got {value}")]
    NonPositive { what: &'static str, value: f64 },

    #[error("Range error: {what} = {value} outside [{min}, {max}]")]
    OutOfRange {
        what: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl CoreError {
    /// True for errors raised because a value lies outside the mathematical
    /// domain of the computation (zero, negative or non-finite inputs).
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::NonFinite { .. } | Self::NonPositive { .. })
    }

    /// True for caller contract violations on a bounded parameter.
    pub fn is_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}
