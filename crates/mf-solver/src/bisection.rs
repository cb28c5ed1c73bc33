//! Bracketing bisection.

use crate::error::{SolverError, SolverResult};
use crate::newton::RootResult;
use crate::problem::ScalarProblem;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Bisection configuration. The bracket must contain a sign change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BisectionConfig {
    pub lower: f64,
    pub upper: f64,
    pub max_iterations: usize,
    /// Absolute tolerance on |g(x)|
    pub abs_tol: f64,
    /// Stop once the bracket is narrower than this
    pub x_tol: f64,
}

impl Default for BisectionConfig {
    fn default() -> Self {
        Self {
            lower: 1e-4,
            upper: 1.0,
            max_iterations: 200,
            abs_tol: 1e-10,
            x_tol: 1e-15,
        }
    }
}

/// Solve `g(x) = 0` on `[config.lower, config.upper]` by interval halving.
pub fn bisect<P>(problem: &P, config: &BisectionConfig) -> SolverResult<RootResult>
where
    P: ScalarProblem + ?Sized,
{
    if !(config.lower < config.upper) {
        return Err(SolverError::InvalidConfig {
            what: "bisection bracket must satisfy lower < upper",
        });
    }

    let mut lo = config.lower;
    let mut hi = config.upper;
    let g_lo = problem.residual(lo);
    let g_hi = problem.residual(hi);

    if !g_lo.is_finite() || !g_hi.is_finite() || g_lo.signum() == g_hi.signum() {
        return Err(SolverError::NotBracketed {
            lo,
            hi,
            f_lo: g_lo,
            f_hi: g_hi,
        });
    }

    let lo_positive = g_lo > 0.0;
    let mut mid = 0.5 * (lo + hi);
    let mut g_mid = problem.residual(mid);

    for iter in 0..config.max_iterations {
        if g_mid.abs() < config.abs_tol || (hi - lo) < config.x_tol {
            debug!(x = mid, residual = g_mid.abs(), iterations = iter, "bisection converged");
            return Ok(RootResult {
                x: mid,
                residual: g_mid.abs(),
                iterations: iter,
            });
        }

        if (g_mid > 0.0) == lo_positive {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
        g_mid = problem.residual(mid);
    }

    Err(SolverError::ConvergenceFailed {
        what: format!("bisection on [{}, {}] did not converge", config.lower, config.upper),
        iterations: config.max_iterations,
        residual: g_mid.abs(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::FnProblem;

    #[test]
    fn finds_sqrt_two() {
        let problem = FnProblem(|x: f64| x * x - 2.0);
        let config = BisectionConfig {
            lower: 0.0,
            upper: 2.0,
            ..Default::default()
        };
        let root = bisect(&problem, &config).unwrap();
        assert!((root.x - 2f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn decreasing_function_is_handled() {
        let problem = FnProblem(|x: f64| 3.0 - x);
        let config = BisectionConfig {
            lower: 0.0,
            upper: 10.0,
            ..Default::default()
        };
        let root = bisect(&problem, &config).unwrap();
        assert!((root.x - 3.0).abs() < 1e-9);
    }

    #[test]
    fn same_sign_is_not_bracketed() {
        let problem = FnProblem(|x: f64| x * x + 1.0);
        let err = bisect(&problem, &BisectionConfig::default()).unwrap_err();
        assert!(matches!(err, SolverError::NotBracketed { .. }));
    }

    #[test]
    fn inverted_bracket_is_rejected() {
        let problem = FnProblem(|x: f64| x);
        let config = BisectionConfig {
            lower: 1.0,
            upper: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            bisect(&problem, &config),
            Err(SolverError::InvalidConfig { .. })
        ));
    }
}
