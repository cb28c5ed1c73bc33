//! Newton and bisection must agree on well-posed problems.

use mf_solver::{BisectionConfig, FnProblem, NewtonConfig, RootMethod, ScalarProblem};
use proptest::prelude::*;

struct Cubic {
    target: f64,
}

impl ScalarProblem for Cubic {
    fn residual(&self, x: f64) -> f64 {
        x * x * x - self.target
    }

    fn derivative(&self, x: f64) -> f64 {
        3.0 * x * x
    }
}

#[test]
fn methods_agree_on_cube_root() {
    let problem = Cubic { target: 27.0 };
    let newton = RootMethod::Newton(NewtonConfig::default())
        .solve(&problem, 1.0)
        .unwrap();
    let bisection = RootMethod::Bisection(BisectionConfig {
        lower: 0.5,
        upper: 10.0,
        ..Default::default()
    })
    .solve(&problem, 1.0)
    .unwrap();

    assert!((newton.x - 3.0).abs() < 1e-9);
    assert!((bisection.x - 3.0).abs() < 1e-9);
}

#[test]
fn default_method_is_newton() {
    assert_eq!(RootMethod::default().name(), "newton");
}

#[test]
fn closure_problem_through_method() {
    let root = RootMethod::default()
        .solve(&FnProblem(|x: f64| x.ln() - 1.0), 2.0)
        .unwrap();
    assert!((root.x - std::f64::consts::E).abs() < 1e-8);
}

proptest! {
    #[test]
    fn newton_residual_below_tolerance(target in 1e-3_f64..1e6) {
        let problem = Cubic { target };
        let root = mf_solver::newton_solve(&problem, 1.0, &NewtonConfig::default()).unwrap();
        prop_assert!(problem.residual(root.x).abs() < 1e-6 * target.max(1.0));
    }
}
