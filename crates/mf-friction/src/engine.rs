//! Friction factor evaluation across all three flow regimes.

use crate::colebrook::{Colebrook, INITIAL_GUESS};
use crate::error::{FrictionError, FrictionResult};
use crate::regime::{LAMINAR_LIMIT, Regime, TURBULENT_LIMIT};
use crate::transitional::TransitionalDistribution;
use mf_core::{ensure_finite, ensure_in_range, ensure_positive};
use mf_solver::RootMethod;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

/// Largest relative roughness the correlation set is used for.
pub const MAX_RELATIVE_ROUGHNESS: f64 = 0.05;

/// Engine configuration. The defaults are the fixed engine parameters;
/// nothing above this crate is expected to change them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Root finder for the Colebrook solve
    pub root_method: RootMethod,
    /// Standard deviation of the transitional draw as a fraction of its mean
    pub transitional_spread: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            root_method: RootMethod::default(),
            transitional_spread: 0.2,
        }
    }
}

/// Darcy friction factor evaluator.
#[derive(Debug, Clone, Default)]
pub struct FrictionEngine {
    config: EngineConfig,
}

impl FrictionEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Friction factor for an explicit regime hint.
    ///
    /// `Laminar` returns `64/Re` for any positive Re (the chart relies on
    /// this past Re = 2000). `Turbulent` solves Colebrook from
    /// [`INITIAL_GUESS`]. `Transitional` is rejected: only
    /// [`regime_friction_factor`](Self::regime_friction_factor) samples it.
    pub fn friction_factor(
        &self,
        reynolds: f64,
        relative_roughness: f64,
        regime: Regime,
    ) -> FrictionResult<f64> {
        validate(reynolds, relative_roughness)?;
        match regime {
            Regime::Laminar => laminar(reynolds),
            Regime::Turbulent => self.colebrook(reynolds, relative_roughness),
            Regime::Transitional => Err(FrictionError::InvalidArg {
                what: "transitional friction factor needs a random source",
            }),
        }
    }

    /// Classify `Re` and evaluate the matching branch.
    ///
    /// Transitional flow draws from [`transitional_distribution`]; repeated
    /// calls with the same inputs give different values unless `rng` is
    /// reseeded.
    ///
    /// [`transitional_distribution`]: Self::transitional_distribution
    pub fn regime_friction_factor<R>(
        &self,
        reynolds: f64,
        relative_roughness: f64,
        rng: &mut R,
    ) -> FrictionResult<(f64, Regime)>
    where
        R: Rng + ?Sized,
    {
        validate(reynolds, relative_roughness)?;
        let regime = Regime::classify(reynolds);
        let f = match regime {
            Regime::Laminar => laminar(reynolds)?,
            Regime::Turbulent => self.colebrook(reynolds, relative_roughness)?,
            Regime::Transitional => self
                .transitional_distribution(relative_roughness)?
                .sample(rng)?,
        };
        Ok((f, regime))
    }

    /// Distribution the transitional draw is taken from at roughness `rr`.
    pub fn transitional_distribution(
        &self,
        relative_roughness: f64,
    ) -> FrictionResult<TransitionalDistribution> {
        let turbulent_bound =
            self.friction_factor(TURBULENT_LIMIT, relative_roughness, Regime::Turbulent)?;
        let laminar_bound =
            self.friction_factor(LAMINAR_LIMIT, relative_roughness, Regime::Laminar)?;
        Ok(TransitionalDistribution::new(
            turbulent_bound,
            laminar_bound,
            self.config.transitional_spread,
        ))
    }

    fn colebrook(&self, reynolds: f64, relative_roughness: f64) -> FrictionResult<f64> {
        let problem = Colebrook::new(reynolds, relative_roughness);
        let root = self
            .config
            .root_method
            .solve(&problem, INITIAL_GUESS)
            .map_err(|source| {
                warn!(
                    reynolds,
                    relative_roughness,
                    method = self.config.root_method.name(),
                    error = %source,
                    "Colebrook solve failed"
                );
                FrictionError::NotConverged {
                    reynolds,
                    relative_roughness,
                    source,
                }
            })?;

        trace!(
            reynolds,
            relative_roughness,
            f = root.x,
            iterations = root.iterations,
            "Colebrook converged"
        );
        Ok(root.x)
    }
}

/// `f = 64/Re`, no iteration. A subnormal Re overflows to infinity.
fn laminar(reynolds: f64) -> FrictionResult<f64> {
    Ok(ensure_finite(64.0 / reynolds, "laminar friction factor")?)
}

fn validate(reynolds: f64, relative_roughness: f64) -> FrictionResult<()> {
    ensure_positive(reynolds, "Reynolds number")?;
    ensure_in_range(
        relative_roughness,
        0.0,
        MAX_RELATIVE_ROUGHNESS,
        "relative roughness",
    )?;
    Ok(())
}

/// [`FrictionEngine::friction_factor`] with the default engine.
pub fn friction_factor(
    reynolds: f64,
    relative_roughness: f64,
    regime: Regime,
) -> FrictionResult<f64> {
    FrictionEngine::default().friction_factor(reynolds, relative_roughness, regime)
}

/// [`FrictionEngine::regime_friction_factor`] with the default engine.
pub fn regime_friction_factor<R>(
    reynolds: f64,
    relative_roughness: f64,
    rng: &mut R,
) -> FrictionResult<(f64, Regime)>
where
    R: Rng + ?Sized,
{
    FrictionEngine::default().regime_friction_factor(reynolds, relative_roughness, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colebrook::colebrook_residual;
    use mf_solver::{BisectionConfig, NewtonConfig, SolverError};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn laminar_is_exact() {
        let f = friction_factor(1000.0, 0.0, Regime::Laminar).unwrap();
        assert_eq!(f, 0.064);
    }

    #[test]
    fn turbulent_reference_value() {
        let f = friction_factor(10_000.0, 0.001, Regime::Turbulent).unwrap();
        assert!((f - 0.03238).abs() < 1e-4, "f = {f}");
        assert!(colebrook_residual(f, 10_000.0, 0.001).abs() < 1e-6);
    }

    #[test]
    fn transitional_hint_is_rejected() {
        let err = friction_factor(3000.0, 0.0, Regime::Transitional).unwrap_err();
        assert!(matches!(err, FrictionError::InvalidArg { .. }));
    }

    #[test]
    fn zero_and_negative_reynolds_are_domain_errors() {
        for re in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let err = friction_factor(re, 0.0, Regime::Laminar).unwrap_err();
            assert!(err.is_domain_error(), "Re = {re}: {err}");
        }
    }

    #[test]
    fn roughness_outside_band_is_a_range_error() {
        for rr in [-1e-6, 0.050_001, 1.0] {
            let err = friction_factor(1e5, rr, Regime::Turbulent).unwrap_err();
            assert!(err.is_range_error(), "rr = {rr}: {err}");
        }
        let err = friction_factor(1e5, f64::NAN, Regime::Turbulent).unwrap_err();
        assert!(err.is_domain_error());
    }

    #[test]
    fn subnormal_reynolds_is_a_domain_error() {
        let err = friction_factor(1e-310, 0.0, Regime::Laminar).unwrap_err();
        assert!(err.is_domain_error(), "{err}");

        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let err = regime_friction_factor(1e-310, 0.0, &mut rng).unwrap_err();
        assert!(err.is_domain_error());
    }

    #[test]
    fn regime_dispatch() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let engine = FrictionEngine::default();

        let (f, regime) = engine.regime_friction_factor(1000.0, 0.0, &mut rng).unwrap();
        assert_eq!(regime, Regime::Laminar);
        assert_eq!(f, 0.064);

        let (_, regime) = engine.regime_friction_factor(3000.0, 1e-4, &mut rng).unwrap();
        assert_eq!(regime, Regime::Transitional);

        let (f, regime) = engine.regime_friction_factor(4000.0, 0.0, &mut rng).unwrap();
        assert_eq!(regime, Regime::Turbulent);
        assert!((f - 0.03991).abs() < 1e-4);
    }

    #[test]
    fn transitional_distribution_bounds() {
        let d = FrictionEngine::default()
            .transitional_distribution(1e-4)
            .unwrap();
        assert_eq!(d.laminar_bound, 0.032);
        assert!((d.turbulent_bound - 0.040008).abs() < 1e-5);
        assert!((d.std_dev - 0.2 * d.mean).abs() < 1e-15);
    }

    #[test]
    fn bisection_engine_matches_newton() {
        let bisection = FrictionEngine::new(EngineConfig {
            root_method: RootMethod::Bisection(BisectionConfig::default()),
            ..Default::default()
        });
        let newton = FrictionEngine::default();
        for &(re, rr) in &[(4000.0, 0.0), (1e6, 1e-4), (1e8, 0.05)] {
            let a = newton.friction_factor(re, rr, Regime::Turbulent).unwrap();
            let b = bisection.friction_factor(re, rr, Regime::Turbulent).unwrap();
            assert!((a - b).abs() < 1e-9, "Re={re} rr={rr}: {a} vs {b}");
        }
    }

    #[test]
    fn solver_failure_is_surfaced() {
        // A bracket that cannot contain the root
        let engine = FrictionEngine::new(EngineConfig {
            root_method: RootMethod::Bisection(BisectionConfig {
                lower: 0.5,
                upper: 1.0,
                ..Default::default()
            }),
            ..Default::default()
        });
        let err = engine
            .friction_factor(1e5, 1e-4, Regime::Turbulent)
            .unwrap_err();
        match err {
            FrictionError::NotConverged { source, .. } => {
                assert!(matches!(source, SolverError::NotBracketed { .. }));
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn newton_failure_is_surfaced() {
        let engine = FrictionEngine::new(EngineConfig {
            root_method: RootMethod::Newton(NewtonConfig {
                max_iterations: 1,
                ..Default::default()
            }),
            ..Default::default()
        });
        let err = engine
            .friction_factor(1e5, 1e-4, Regime::Turbulent)
            .unwrap_err();
        assert!(err.is_domain_error());
        match err {
            FrictionError::NotConverged { source, .. } => {
                assert!(matches!(source, SolverError::ConvergenceFailed { .. }));
            }
            other => panic!("unexpected error {other}"),
        }
    }
}
