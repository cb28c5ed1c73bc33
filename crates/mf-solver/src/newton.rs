//! Newton solver with a positivity constraint.

use crate::error::{SolverError, SolverResult};
use crate::problem::ScalarProblem;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Newton solver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NewtonConfig {
    /// Maximum iterations
    pub max_iterations: usize,
    /// Absolute tolerance on |g(x)|
    pub abs_tol: f64,
    /// Relative tolerance on |g(x)| against the initial residual
    pub rel_tol: f64,
    /// Smallest admissible iterate; steps below it are backtracked
    pub min_value: f64,
    /// Line search backtracking factor
    pub line_search_beta: f64,
    /// Maximum line search iterations
    pub max_line_search_iters: usize,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            abs_tol: 1e-10,
            rel_tol: 1e-12,
            min_value: 1e-12,
            line_search_beta: 0.5,
            max_line_search_iters: 30,
        }
    }
}

/// Outcome of a converged scalar solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootResult {
    /// Root estimate
    pub x: f64,
    /// |g(x)| at the returned root
    pub residual: f64,
    /// Number of iterations
    pub iterations: usize,
}

/// Damped Newton iteration for `g(x) = 0`, keeping `x >= config.min_value`.
pub fn newton_solve<P>(problem: &P, x0: f64, config: &NewtonConfig) -> SolverResult<RootResult>
where
    P: ScalarProblem + ?Sized,
{
    let mut x = x0;
    let mut r = checked_residual(problem, x)?;
    let r0 = r.abs();

    for iter in 0..config.max_iterations {
        if r.abs() < config.abs_tol || r.abs() < config.rel_tol * r0 {
            debug!(x, residual = r.abs(), iterations = iter, "newton converged");
            return Ok(RootResult {
                x,
                residual: r.abs(),
                iterations: iter,
            });
        }

        let slope = problem.derivative(x);
        if !slope.is_finite() || slope == 0.0 {
            let what = format!("degenerate derivative {slope} at x = {x}");
            // A flat start is a bad problem; going flat later is a failed solve
            if iter == 0 {
                return Err(SolverError::Numeric { what });
            }
            return Err(SolverError::ConvergenceFailed {
                what,
                iterations: iter,
                residual: r.abs(),
            });
        }
        let dx = -r / slope;

        // Backtrack until the step stays admissible and reduces |g|
        let mut alpha = 1.0;
        let mut x_new = x + dx;
        let mut r_new = problem.residual(x_new);

        for _ in 0..config.max_line_search_iters {
            let admissible = x_new >= config.min_value && r_new.is_finite();
            if admissible && r_new.abs() < r.abs() {
                break;
            }
            alpha *= config.line_search_beta;
            x_new = x + alpha * dx;
            r_new = problem.residual(x_new);
        }

        if alpha < 1e-10 || x_new < config.min_value || !r_new.is_finite() {
            return Err(SolverError::ConvergenceFailed {
                what: format!("line search stagnated at iteration {iter}"),
                iterations: iter,
                residual: r.abs(),
            });
        }

        x = x_new;
        r = r_new;
    }

    if r.abs() < config.abs_tol {
        debug!(x, residual = r.abs(), "newton converged on the last iteration");
        return Ok(RootResult {
            x,
            residual: r.abs(),
            iterations: config.max_iterations,
        });
    }

    Err(SolverError::ConvergenceFailed {
        what: format!("maximum iterations {} reached", config.max_iterations),
        iterations: config.max_iterations,
        residual: r.abs(),
    })
}

fn checked_residual<P>(problem: &P, x: f64) -> SolverResult<f64>
where
    P: ScalarProblem + ?Sized,
{
    let r = problem.residual(x);
    if r.is_finite() {
        Ok(r)
    } else {
        Err(SolverError::Numeric {
            what: format!("non-finite residual {r} at x = {x}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::FnProblem;

    #[test]
    fn simple_quadratic() {
        // Solve x^2 - 4 = 0, x > 0
        let problem = FnProblem(|x: f64| x * x - 4.0);
        let result = newton_solve(&problem, 3.0, &NewtonConfig::default()).unwrap();

        assert!((result.x - 2.0).abs() < 1e-6);
        assert!(result.residual < 1e-10);
    }

    #[test]
    fn positivity_is_enforced() {
        // The full Newton step from x=2 lands at x=-2; backtracking must
        // keep the iterate positive and still reach the root at 0.5.
        let problem = FnProblem(|x: f64| 1.0 / x.abs().sqrt() - 1.0 / 0.5_f64.sqrt());
        let result = newton_solve(&problem, 2.0, &NewtonConfig::default()).unwrap();
        assert!((result.x - 0.5).abs() < 1e-8);
    }

    #[test]
    fn no_root_reports_convergence_failure() {
        let problem = FnProblem(|x: f64| x * x + 1.0);
        let err = newton_solve(&problem, 1.0, &NewtonConfig::default()).unwrap_err();
        assert!(matches!(err, SolverError::ConvergenceFailed { .. }));
    }

    #[test]
    fn flat_start_is_a_numeric_error() {
        let problem = FnProblem(|_x: f64| 1.0);
        let err = newton_solve(&problem, 1.0, &NewtonConfig::default()).unwrap_err();
        assert!(matches!(err, SolverError::Numeric { .. }));
    }

    #[test]
    fn non_finite_start_is_rejected() {
        let problem = FnProblem(|x: f64| 1.0 / x);
        let err = newton_solve(&problem, 0.0, &NewtonConfig::default()).unwrap_err();
        assert!(matches!(err, SolverError::Numeric { .. }));
    }
}
