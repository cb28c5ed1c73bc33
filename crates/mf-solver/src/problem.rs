//! Scalar equation abstraction shared by all root finders.

/// A scalar equation `g(x) = 0`.
///
/// Implementors supply the residual; the derivative defaults to a central
/// finite difference and may be overridden with an analytic form.
pub trait ScalarProblem {
    /// Residual `g(x)`.
    fn residual(&self, x: f64) -> f64;

    /// Derivative `g'(x)`.
    fn derivative(&self, x: f64) -> f64 {
        central_difference(|v| self.residual(v), x, 1e-7)
    }
}

/// Closure adapter so ad-hoc equations can be handed to a solver.
pub struct FnProblem<F>(pub F);

impl<F> ScalarProblem for FnProblem<F>
where
    F: Fn(f64) -> f64,
{
    fn residual(&self, x: f64) -> f64 {
        (self.0)(x)
    }
}

/// Central finite difference with a step relative to `|x|`.
pub fn central_difference<F>(f: F, x: f64, epsilon: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    let dx = epsilon * x.abs().max(1e-3);
    (f(x + dx) - f(x - dx)) / (2.0 * dx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn central_difference_of_cubic() {
        let d = central_difference(|x| x * x * x, 2.0, 1e-6);
        assert!((d - 12.0).abs() < 1e-6);
    }

    #[test]
    fn default_derivative_uses_residual() {
        let p = FnProblem(|x: f64| x.sin());
        assert!((p.derivative(0.0) - 1.0).abs() < 1e-6);
    }
}
