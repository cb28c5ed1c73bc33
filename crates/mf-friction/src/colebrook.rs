//! Colebrook-White correlation for turbulent pipe flow.
//!
//! The correlation is implicit in the Darcy friction factor `f`:
//!
//! ```text
//! 1/sqrt(f) + 2 log10(rr/3.7 + 2.51/(Re sqrt(f))) = 0
//! ```
//!
//! Square roots are taken of `|f|` so a solver probing a negative trial
//! value still gets a finite residual.

use mf_solver::ScalarProblem;
use std::f64::consts::LN_10;

/// Fixed starting point of every turbulent solve, `max(0.02, 1e-5)`.
pub const INITIAL_GUESS: f64 = 0.02;

/// Colebrook residual at trial friction factor `f`.
pub fn colebrook_residual(f: f64, reynolds: f64, relative_roughness: f64) -> f64 {
    let s = f.abs().sqrt();
    1.0 / s + 2.0 * (relative_roughness / 3.7 + 2.51 / (reynolds * s)).log10()
}

/// The Colebrook equation at fixed `(Re, rr)` as a scalar root problem in `f`.
#[derive(Debug, Clone, Copy)]
pub struct Colebrook {
    pub reynolds: f64,
    pub relative_roughness: f64,
}

impl Colebrook {
    pub fn new(reynolds: f64, relative_roughness: f64) -> Self {
        Self {
            reynolds,
            relative_roughness,
        }
    }
}

impl ScalarProblem for Colebrook {
    fn residual(&self, f: f64) -> f64 {
        colebrook_residual(f, self.reynolds, self.relative_roughness)
    }

    fn derivative(&self, f: f64) -> f64 {
        let s = f.abs().sqrt();
        let a = self.relative_roughness / 3.7;
        let b = 2.51 / self.reynolds;
        let inner = a + b / s;
        -0.5 / (s * s * s) * (1.0 + 2.0 * b / (LN_10 * inner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mf_solver::central_difference;

    #[test]
    fn initial_guess_is_fixed() {
        assert_eq!(INITIAL_GUESS, 0.02);
    }

    #[test]
    fn analytic_derivative_matches_finite_difference() {
        for &(re, rr) in &[(4000.0, 0.0), (1e5, 1e-3), (1e8, 0.05)] {
            let problem = Colebrook::new(re, rr);
            for &f in &[0.008, 0.02, 0.07] {
                let exact = problem.derivative(f);
                let approx = central_difference(|x| problem.residual(x), f, 1e-6);
                assert!(
                    ((exact - approx) / exact).abs() < 1e-5,
                    "Re={re} rr={rr} f={f}: {exact} vs {approx}"
                );
            }
        }
    }

    #[test]
    fn residual_is_symmetric_in_sign_of_f() {
        let a = colebrook_residual(0.03, 1e5, 1e-4);
        let b = colebrook_residual(-0.03, 1e5, 1e-4);
        assert_eq!(a, b);
    }
}
