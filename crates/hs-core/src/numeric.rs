/// Floating point type used throughout system
pub type Real = f64;

/// Round `v` up to the next multiple of `step` (exact multiples stay).
///
/// `step` must be positive; callers guard this.
pub fn ceil_to_step(v: Real, step: Real) -> Real {
    (v / step).ceil() * step
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn ceil_to_step_never_undershoots(v in 0.01_f64..500.0, step in 0.5_f64..20.0) {
            let rounded = ceil_to_step(v, step);
            prop_assert!(rounded >= v);
            prop_assert!(rounded - v < step + 1e-9);
        }
    }
}
