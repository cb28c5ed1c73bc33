//! mf-friction: Darcy friction factor for laminar, transitional and
//! turbulent pipe flow.
//!
//! - Laminar (`Re <= 2000`): `f = 64/Re`
//! - Turbulent (`Re >= 4000`): Colebrook-White, solved with `mf-solver`
//! - Transitional: one draw from a normal distribution spanning the two
//!   boundary values, taken from a caller-supplied random source
//!
//! # Example
//!
//! ```
//! use mf_friction::{FrictionEngine, Regime};
//! use rand::SeedableRng;
//!
//! let engine = FrictionEngine::default();
//! let f = engine.friction_factor(1e5, 1e-4, Regime::Turbulent).unwrap();
//! assert!(f > 0.018 && f < 0.019);
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let (_, regime) = engine.regime_friction_factor(3000.0, 1e-4, &mut rng).unwrap();
//! assert_eq!(regime, Regime::Transitional);
//! ```

pub mod colebrook;
pub mod engine;
pub mod error;
pub mod regime;
pub mod sample;
pub mod transitional;

// Re-exports
pub use colebrook::{Colebrook, INITIAL_GUESS, colebrook_residual};
pub use engine::{
    EngineConfig, FrictionEngine, MAX_RELATIVE_ROUGHNESS, friction_factor, regime_friction_factor,
};
pub use error::{FrictionError, FrictionResult};
pub use regime::{LAMINAR_LIMIT, Regime, TURBULENT_LIMIT};
pub use sample::FlowSample;
pub use transitional::TransitionalDistribution;
