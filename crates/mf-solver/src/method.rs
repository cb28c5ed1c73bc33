//! Root-finder selection.

use crate::bisection::{BisectionConfig, bisect};
use crate::error::SolverResult;
use crate::newton::{NewtonConfig, RootResult, newton_solve};
use crate::problem::ScalarProblem;
use serde::{Deserialize, Serialize};

/// Which algorithm a caller wants for a scalar solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum RootMethod {
    /// Open method from the caller's initial guess
    Newton(NewtonConfig),
    /// Bracketing method; the initial guess is ignored
    Bisection(BisectionConfig),
}

impl Default for RootMethod {
    fn default() -> Self {
        RootMethod::Newton(NewtonConfig::default())
    }
}

impl RootMethod {
    pub fn solve<P>(&self, problem: &P, x0: f64) -> SolverResult<RootResult>
    where
        P: ScalarProblem + ?Sized,
    {
        match self {
            RootMethod::Newton(config) => newton_solve(problem, x0, config),
            RootMethod::Bisection(config) => bisect(problem, config),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RootMethod::Newton(_) => "newton",
            RootMethod::Bisection(_) => "bisection",
        }
    }
}
