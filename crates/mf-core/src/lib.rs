//! mf-core: stable foundation for moodyflow.
//!
//! Contains:
//! - units (uom types + US customary constructors used at the pipe boundary)
//! - numeric (Real + float guards + log grids)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
