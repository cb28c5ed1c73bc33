//! Scalar root finding for implicit correlations.
//!
//! Equations implement [`ScalarProblem`]; [`newton_solve`] runs a damped
//! Newton iteration that keeps iterates above a positivity floor, and
//! [`bisect`] provides a bracketing fallback. [`RootMethod`] selects one of
//! them at configuration time.

pub mod bisection;
pub mod error;
pub mod method;
pub mod newton;
pub mod problem;

pub use bisection::{BisectionConfig, bisect};
pub use error::{SolverError, SolverResult};
pub use method::RootMethod;
pub use newton::{NewtonConfig, RootResult, newton_solve};
pub use problem::{FnProblem, ScalarProblem, central_difference};
