//! Error types for friction-factor evaluation.

use mf_core::CoreError;
use mf_solver::SolverError;
use thiserror::Error;

/// Errors that can occur while evaluating a friction factor.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrictionError {
    #[error("Domain error: {0}")]
    Domain(CoreError),

    #[error("Range error: relative roughness {value} outside [0, {max}]")]
    RoughnessOutOfRange { value: f64, max: f64 },

    #[error(
        "Domain error: Colebrook solve did not converge at Re = {reynolds}, rr = {relative_roughness}: {source}"
    )]
    NotConverged {
        reynolds: f64,
        relative_roughness: f64,
        #[source]
        source: SolverError,
    },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Transitional sampling failed: {what}")]
    Sampling { what: String },
}

pub type FrictionResult<T> = Result<T, FrictionError>;

impl FrictionError {
    /// Re <= 0, non-finite input, or a solve that never settled.
    pub fn is_domain_error(&self) -> bool {
        matches!(self, Self::Domain(_) | Self::NotConverged { .. })
    }

    /// Caller passed a relative roughness outside the supported band.
    pub fn is_range_error(&self) -> bool {
        matches!(self, Self::RoughnessOutOfRange { .. })
    }
}

impl From<CoreError> for FrictionError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::OutOfRange { value, max, .. } => {
                FrictionError::RoughnessOutOfRange { value, max }
            }
            CoreError::InvalidArg { what } => FrictionError::InvalidArg { what },
            other => FrictionError::Domain(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FrictionError::RoughnessOutOfRange {
            value: 0.2,
            max: 0.05,
        };
        assert!(err.to_string().contains("0.2"));
        assert!(err.is_range_error());
        assert!(!err.is_domain_error());
    }

    #[test]
    fn non_convergence_is_a_domain_error() {
        let err = FrictionError::NotConverged {
            reynolds: 1e5,
            relative_roughness: 0.0,
            source: SolverError::Numeric { what: "nan".into() },
        };
        assert!(err.is_domain_error());
        assert!(err.to_string().contains("did not converge"));
    }

    #[test]
    fn core_error_conversion() {
        let err: FrictionError = CoreError::NonPositive {
            what: "Reynolds number",
            value: 0.0,
        }
        .into();
        assert!(err.is_domain_error());
    }
}
