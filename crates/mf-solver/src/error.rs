//! Error types for root-finding operations.

use thiserror::Error;

/// Errors that can occur while solving a scalar equation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Convergence failed after {iterations} iterations (residual = {residual:e}): {what}")]
    ConvergenceFailed {
        what: String,
        iterations: usize,
        residual: f64,
    },

    #[error("Root not bracketed: f({lo}) = {f_lo:e}, f({hi}) = {f_hi:e}")]
    NotBracketed {
        lo: f64,
        hi: f64,
        f_lo: f64,
        f_hi: f64,
    },

    #[error("Numeric error: {what}")]
    Numeric { what: String },

    #[error("Invalid configuration: {what}")]
    InvalidConfig { what: &'static str },
}

pub type SolverResult<T> = Result<T, SolverError>;
