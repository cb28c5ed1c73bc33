use crate::CoreError;

/// Floating point type used throughout system
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, CoreError> {
    ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(CoreError::NonPositive { what, value: v })
    }
}

/// Finite and inside the closed interval `[min, max]`. No clamping.
pub fn ensure_in_range(
    v: Real,
    min: Real,
    max: Real,
    what: &'static str,
) -> Result<Real, CoreError> {
    ensure_finite(v, what)?;
    if (min..=max).contains(&v) {
        Ok(v)
    } else {
        Err(CoreError::OutOfRange {
            what,
            value: v,
            min,
            max,
        })
    }
}

/// `count` points evenly spaced in log10 between `start` and `stop`,
/// both endpoints included.
///
/// The endpoints are written back exactly so that curves meeting at a
/// shared boundary (e.g. Re = 2000) line up without round-off gaps.
pub fn logspace(start: Real, stop: Real, count: usize) -> Result<Vec<Real>, CoreError> {
    ensure_positive(start, "logspace start")?;
    ensure_positive(stop, "logspace stop")?;
    if count < 2 {
        return Err(CoreError::InvalidArg {
            what: "logspace needs at least two points",
        });
    }

    let lo = start.log10();
    let hi = stop.log10();
    let step = (hi - lo) / (count - 1) as Real;

    let mut values: Vec<Real> = (0..count)
        .map(|i| 10f64.powf(lo + step * i as Real))
        .collect();
    values[0] = start;
    values[count - 1] = stop;
    Ok(values)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn logspace_is_increasing(lo in 1.0_f64..1e3, span in 1.5_f64..1e5, n in 2_usize..200) {
            let xs = logspace(lo, lo * span, n).unwrap();
            prop_assert_eq!(xs.len(), n);
            for pair in xs.windows(2) {
                prop_assert!(pair[1] > pair[0]);
            }
        }
    }
}
